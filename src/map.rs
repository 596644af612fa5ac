use std::collections::{BTreeSet, HashMap, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, RevMapError};

// reversed-key string map
//
// under the canonical insertion path (`add_string`, `reset_from`) every key
// is the character-reversal of its value. re-keying operations such as
// `uppercase_all_keys` keep the values but may break that relation, which is
// accepted.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StringMap {
    map: HashMap<String, String>,
}

impl StringMap {
    // create an empty map
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    // all values, deduplicated, sorted ascending
    pub fn values_sorted(&self) -> Vec<String> {
        let set: BTreeSet<String> = self.map.values().cloned().collect();
        set.into_iter().collect()
    }

    // all keys, sorted descending
    pub fn keys_sorted_desc(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.map.keys().cloned().collect();
        keys.sort_unstable_by(|a, b| b.cmp(a));
        keys
    }

    // the lexicographically smallest value, `None` on an empty map
    pub fn first_value(&self) -> Option<String> {
        self.map.values().min().cloned()
    }

    // the lexicographically largest value, `None` on an empty map
    pub fn last_value(&self) -> Option<String> {
        self.map.values().max().cloned()
    }

    // every key uppercased, in no particular order
    pub fn keys_uppercased(&self) -> Vec<String> {
        self.map.keys().map(|k| k.to_uppercase()).collect()
    }

    // number of distinct values
    pub fn distinct_value_count(&self) -> usize {
        self.map.values().collect::<HashSet<_>>().len()
    }

    // insert `s` under its reversed form as key
    // overwrites an existing entry with the same reversed key, so the map
    // may or may not grow
    pub fn add_string(&mut self, s: String) {
        let key = reverse(&s);
        self.map.insert(key, s);
    }

    // remove the entry with this exact key, no-op when absent
    pub fn remove_by_key(&mut self, key: &str) {
        self.map.remove(key);
    }

    // remove every entry holding this value
    // several keys can share a value after deserialization or re-keying
    pub fn remove_by_value(&mut self, value: &str) {
        self.map.retain(|_, v| v.as_str() != value);
    }

    // clear the map, then insert the string projection of each element
    // later elements overwrite earlier ones that reverse to the same key
    pub fn reset_from(&mut self, objects: &[Value]) {
        self.map.clear();
        for object in objects {
            let value = project(object);
            let key = reverse(&value);
            self.map.insert(key, value);
        }
    }

    // parse a JSON array and reset the map from its elements
    pub fn reset_from_json(&mut self, json: &str) -> Result<()> {
        match serde_json::from_str(json)? {
            Value::Array(objects) => {
                self.reset_from(&objects);
                Ok(())
            }
            _ => Err(RevMapError::ExpectedArray),
        }
    }

    // re-key every entry to the uppercase form of its key, keeping values
    // when two keys uppercase to the same string, the entry iterated last
    // wins; iteration order of the underlying map is unspecified
    pub fn uppercase_all_keys(&mut self) {
        let rekeyed: HashMap<String, String> = self
            .map
            .drain()
            .map(|(k, v)| (k.to_uppercase(), v))
            .collect();
        self.map = rekeyed;
    }

    // true when every candidate appears among the current values
    // an empty candidate list is trivially contained
    pub fn contains_all_values(&self, candidates: &[&str]) -> bool {
        if candidates.is_empty() {
            return true;
        }
        let values: HashSet<&str> = self.map.values().map(String::as_str).collect();
        candidates.iter().all(|c| values.contains(c))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    // value associated with a key, cloned out
    pub fn get(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }
}

fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

// deterministic string projection of a JSON value: strings project to their
// unquoted content, everything else to its canonical JSON text
fn project(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
