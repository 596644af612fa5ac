use assert_cmd::prelude::*;
use predicates::str::contains;
use std::process::Command;

// `revmap` should exit with an error if no query is given
#[test]
fn cli_no_args() {
    Command::cargo_bin("revmap").unwrap().assert().failure();
}

#[test]
fn cli_values_sorted_and_deduped() {
    Command::cargo_bin("revmap")
        .unwrap()
        .args(&["--add", "pear", "--add", "apple", "values"])
        .assert()
        .success()
        .stdout("[\"apple\",\"pear\"]\n");
}

#[test]
fn cli_keys_descending() {
    Command::cargo_bin("revmap")
        .unwrap()
        .args(&["--add", "ab", "--add", "cd", "keys"])
        .assert()
        .success()
        .stdout("[\"dc\",\"ba\"]\n");
}

#[test]
fn cli_first_and_last() {
    Command::cargo_bin("revmap")
        .unwrap()
        .args(&["--add", "pear", "--add", "apple", "first"])
        .assert()
        .success()
        .stdout("apple\n");

    Command::cargo_bin("revmap")
        .unwrap()
        .args(&["--add", "pear", "--add", "apple", "last"])
        .assert()
        .success()
        .stdout("pear\n");
}

#[test]
fn cli_first_on_empty_map() {
    Command::cargo_bin("revmap")
        .unwrap()
        .arg("first")
        .assert()
        .success()
        .stdout(contains("No values"));
}

#[test]
fn cli_reset_from_json_array() {
    Command::cargo_bin("revmap")
        .unwrap()
        .args(&["--from", r#"[1, 2, "ab"]"#, "values"])
        .assert()
        .success()
        .stdout("[\"1\",\"2\",\"ab\"]\n");
}

#[test]
fn cli_reset_from_rejects_bad_json() {
    Command::cargo_bin("revmap")
        .unwrap()
        .args(&["--from", "[1,", "values"])
        .assert()
        .failure();

    Command::cargo_bin("revmap")
        .unwrap()
        .args(&["--from", "{}", "values"])
        .assert()
        .failure();
}

#[test]
fn cli_count_distinct_values() {
    Command::cargo_bin("revmap")
        .unwrap()
        .args(&["--add", "abc", "--add", "cba", "count"])
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn cli_contains() {
    Command::cargo_bin("revmap")
        .unwrap()
        .args(&["--add", "abc", "contains", "abc"])
        .assert()
        .success()
        .stdout("true\n");

    Command::cargo_bin("revmap")
        .unwrap()
        .args(&["--add", "abc", "contains", "abc", "xyz"])
        .assert()
        .success()
        .stdout("false\n");

    // no candidates are trivially contained
    Command::cargo_bin("revmap")
        .unwrap()
        .arg("contains")
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn cli_removals_apply_before_query() {
    Command::cargo_bin("revmap")
        .unwrap()
        .args(&["--add", "ab", "--add", "cd", "--rm-key", "ba", "values"])
        .assert()
        .success()
        .stdout("[\"cd\"]\n");

    Command::cargo_bin("revmap")
        .unwrap()
        .args(&["--add", "ab", "--add", "cd", "--rm-value", "cd", "values"])
        .assert()
        .success()
        .stdout("[\"ab\"]\n");
}

#[test]
fn cli_upper_keys_rekeys_before_query() {
    Command::cargo_bin("revmap")
        .unwrap()
        .args(&["--add", "dc", "--upper-keys", "keys"])
        .assert()
        .success()
        .stdout("[\"CD\"]\n");
}

#[test]
fn cli_keys_upper_query() {
    Command::cargo_bin("revmap")
        .unwrap()
        .args(&["--add", "ab", "--add", "cd", "keys-upper"])
        .assert()
        .success()
        .stdout("[\"BA\",\"DC\"]\n");
}

#[test]
fn cli_dump_prints_map_as_json() {
    Command::cargo_bin("revmap")
        .unwrap()
        .args(&["--add", "abc", "dump"])
        .assert()
        .success()
        .stdout("{\"cba\":\"abc\"}\n");
}
