use clap::{App, AppSettings, Arg, SubCommand};
use revmap::{Result, StringMap};

fn main() -> Result<()> {
    let matches = App::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .setting(AppSettings::DisableHelpSubcommand)
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .setting(AppSettings::VersionlessSubcommands)
        .arg(
            Arg::with_name("from")
                .long("from")
                .value_name("JSON")
                .help("Reset the map from a JSON array before anything else"),
        )
        .arg(
            Arg::with_name("add")
                .long("add")
                .value_name("STRING")
                .multiple(true)
                .number_of_values(1)
                .help("Insert a string under its reversed form as key"),
        )
        .arg(
            Arg::with_name("rm-key")
                .long("rm-key")
                .value_name("KEY")
                .multiple(true)
                .number_of_values(1)
                .help("Remove the entry with this exact key"),
        )
        .arg(
            Arg::with_name("rm-value")
                .long("rm-value")
                .value_name("VALUE")
                .multiple(true)
                .number_of_values(1)
                .help("Remove every entry holding this value"),
        )
        .arg(
            Arg::with_name("upper-keys")
                .long("upper-keys")
                .help("Uppercase every key before running the query"),
        )
        .subcommand(SubCommand::with_name("values").about("Print all values, deduplicated and sorted"))
        .subcommand(SubCommand::with_name("keys").about("Print all keys in descending order"))
        .subcommand(SubCommand::with_name("keys-upper").about("Print all keys uppercased"))
        .subcommand(SubCommand::with_name("first").about("Print the lexicographically smallest value"))
        .subcommand(SubCommand::with_name("last").about("Print the lexicographically largest value"))
        .subcommand(SubCommand::with_name("count").about("Print the number of distinct values"))
        .subcommand(
            SubCommand::with_name("contains")
                .about("Check that every candidate appears among the values")
                .arg(Arg::with_name("VALUE").multiple(true)),
        )
        .subcommand(SubCommand::with_name("dump").about("Print the whole map as JSON"))
        .get_matches();

    let mut map = StringMap::new();

    // build-up flags apply in a fixed order: reset, inserts, removals,
    // then the key transform
    if let Some(json) = matches.value_of("from") {
        map.reset_from_json(json)?;
    }
    if let Some(strings) = matches.values_of("add") {
        for s in strings {
            map.add_string(s.to_string());
        }
    }
    if let Some(keys) = matches.values_of("rm-key") {
        for key in keys {
            map.remove_by_key(key);
        }
    }
    if let Some(values) = matches.values_of("rm-value") {
        for value in values {
            map.remove_by_value(value);
        }
    }
    if matches.is_present("upper-keys") {
        map.uppercase_all_keys();
    }

    match matches.subcommand() {
        ("values", Some(_)) => {
            println!("{}", serde_json::to_string(&map.values_sorted())?);
        }
        ("keys", Some(_)) => {
            println!("{}", serde_json::to_string(&map.keys_sorted_desc())?);
        }
        ("keys-upper", Some(_)) => {
            let mut keys = map.keys_uppercased();
            keys.sort_unstable();
            println!("{}", serde_json::to_string(&keys)?);
        }
        ("first", Some(_)) => match map.first_value() {
            Some(value) => println!("{}", value),
            None => println!("No values"),
        },
        ("last", Some(_)) => match map.last_value() {
            Some(value) => println!("{}", value),
            None => println!("No values"),
        },
        ("count", Some(_)) => {
            println!("{}", map.distinct_value_count());
        }
        ("contains", Some(matches)) => {
            let candidates: Vec<&str> = matches
                .values_of("VALUE")
                .map(Iterator::collect)
                .unwrap_or_default();
            println!("{}", map.contains_all_values(&candidates));
        }
        ("dump", Some(_)) => {
            println!("{}", serde_json::to_string(&map)?);
        }
        _ => unreachable!(),
    }
    Ok(())
}
