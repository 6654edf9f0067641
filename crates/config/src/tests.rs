use super::*;
use std::collections::HashMap;

fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let config = Config::from_lookup(lookup_in(&[])).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.data_dir, PathBuf::from("."));
    assert_eq!(config.table, None);
    assert_eq!(config.log_filter, "warn");
}

#[test]
fn reads_every_variable() {
    let config = Config::from_lookup(lookup_in(&[
        ("MYDB_DATA_DIR", "/srv/tables"),
        ("MYDB_TABLE", "students"),
        ("MYDB_LOG", "engine=debug"),
    ]))
    .unwrap();
    assert_eq!(config.data_dir, PathBuf::from("/srv/tables"));
    assert_eq!(config.table.as_deref(), Some("students"));
    assert_eq!(config.log_filter, "engine=debug");
}

#[test]
fn empty_table_and_log_fall_back() {
    let config =
        Config::from_lookup(lookup_in(&[("MYDB_TABLE", ""), ("MYDB_LOG", "")])).unwrap();
    assert_eq!(config.table, None);
    assert_eq!(config.log_filter, "warn");
}

#[test]
fn empty_data_dir_is_an_error() {
    let err = Config::from_lookup(lookup_in(&[("MYDB_DATA_DIR", "")])).unwrap_err();
    assert_eq!(err, ConfigError::Empty("MYDB_DATA_DIR"));
    assert_eq!(err.to_string(), "MYDB_DATA_DIR is set but empty");
}
