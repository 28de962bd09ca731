use std::path::{Path, PathBuf};

use doodle_jump::config::*;

fn path() -> &'static Path {
    Path::new("doodle_jump.toml")
}

#[test]
fn empty_file_is_all_defaults() {
    let config = HostConfig::from_toml("", path()).expect("empty config parses");
    assert_eq!(config, HostConfig::default());
    assert_eq!(config.seed, None);
    assert_eq!(config.night_mode, NightMode::Auto);
    assert_eq!(config.log.level, "info");
    assert_eq!(config.log.file, None);
    assert_eq!(config.input.hold_window, 8);
}

#[test]
fn partial_file_keeps_other_defaults() {
    let text = r#"
seed = 7
night_mode = "night"

[log]
file = "game.log"
"#;
    let config = HostConfig::from_toml(text, path()).expect("config parses");
    assert_eq!(config.seed, Some(7));
    assert_eq!(config.night_mode, NightMode::Night);
    assert_eq!(config.log.file, Some(PathBuf::from("game.log")));
    assert_eq!(config.log.level, "info");
    assert_eq!(config.input.hold_window, 8);
}

#[test]
fn input_section() {
    let config = HostConfig::from_toml("[input]\nhold_window = 3\n", path()).expect("config parses");
    assert_eq!(config.input.hold_window, 3);
}

#[test]
fn bad_types_are_parse_errors() {
    let err = HostConfig::from_toml("seed = \"soon\"\n", path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("doodle_jump.toml"));
}

#[test]
fn unknown_night_mode_is_rejected() {
    let err = HostConfig::from_toml("night_mode = \"dusk\"\n", path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn missing_file_is_a_read_error() {
    let err = HostConfig::load(Path::new("/nonexistent/doodle_jump.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn auto_night_mode_follows_the_hour() {
    assert!(NightMode::Auto.resolve(0));
    assert!(NightMode::Auto.resolve(5));
    assert!(!NightMode::Auto.resolve(6));
    assert!(!NightMode::Auto.resolve(12));
    assert!(!NightMode::Auto.resolve(18));
    assert!(NightMode::Auto.resolve(19));
    assert!(NightMode::Auto.resolve(23));
}

#[test]
fn forced_night_modes_ignore_the_hour() {
    assert!(!NightMode::Day.resolve(2));
    assert!(NightMode::Night.resolve(12));
}
