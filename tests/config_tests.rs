use predicates::str::contains;
use std::fs;
use venue_intel::config::{Config, check};

mod common;
use common::{temp_dir, vi};

#[test]
fn missing_file_gives_defaults() {
    let dir = temp_dir("config_defaults");
    let cfg = Config::load_from(&dir.join("nope.conf")).unwrap();
    assert_eq!(cfg.transactions_file, "stripe_transactions.csv");
    assert_eq!(cfg.top_events, 20);
    assert_eq!(cfg.peak_days, 10);
}

#[test]
fn partial_file_keeps_defaults_for_the_rest() {
    let dir = temp_dir("config_partial");
    let path = dir.join("venueintel.conf");
    fs::write(&path, "currency_symbol: \"€\"\ntop_events: 5\ntheme: dark\n").unwrap();

    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.currency_symbol, "€");
    assert_eq!(cfg.top_events, 5);
    assert_eq!(cfg.venues_file, "venues.csv");

    let missing = check::missing_keys(&path).unwrap();
    assert!(missing.contains(&"data_dir"));
    assert!(!missing.contains(&"top_events"));
    assert_eq!(check::unknown_keys(&path).unwrap(), vec!["theme".to_string()]);
    assert_eq!(check::default_value("peak_days").as_deref(), Some("10"));
}

#[test]
fn empty_file_name_is_rejected() {
    let dir = temp_dir("config_invalid");
    let path = dir.join("venueintel.conf");
    fs::write(&path, "events_file: \"  \"\n").unwrap();
    assert!(Config::load_from(&path).is_err());
}

#[test]
fn init_writes_config_and_data_dir() {
    let dir = temp_dir("config_init");
    let conf = dir.join("venueintel.conf");
    let data = dir.join("data");

    vi()
        .args(["--config-file", conf.to_str().unwrap(), "--data", data.to_str().unwrap(), "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(conf.is_file());
    assert!(data.is_dir());
    let cfg = Config::load_from(&conf).unwrap();
    assert_eq!(cfg.data_dir, data.to_string_lossy());

    // a second init refuses to overwrite
    vi()
        .args(["--config-file", conf.to_str().unwrap(), "init"])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    vi()
        .args(["--config-file", conf.to_str().unwrap(), "--data", data.to_str().unwrap(), "init", "--force"])
        .assert()
        .success();
}

#[test]
fn config_print_and_check() {
    let dir = temp_dir("config_print");
    let conf = dir.join("venueintel.conf");
    fs::write(&conf, "top_events: 7\n").unwrap();

    vi()
        .args(["--config-file", conf.to_str().unwrap(), "config", "--print"])
        .assert()
        .success()
        .stdout(contains("top_events: 7"));

    vi()
        .args(["--config-file", conf.to_str().unwrap(), "config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing 'venues_file'"));
}
