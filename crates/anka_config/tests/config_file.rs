//! Config file round trips through a temporary directory.

use anka_config::{Config, ConfigError, OutputFormat};
use anka_numerology::{BirthProfile, Gender};

#[test]
fn missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let c = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(c, Config::default());
    assert_eq!(c.output, OutputFormat::Text);
}

#[test]
fn save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut c = Config {
        reference_year: Some(2026),
        output: OutputFormat::Json,
        ..Config::default()
    };
    c.add_profile(
        "jane",
        BirthProfile::parse("Jane Doe", "1992-12-03", Gender::Female).unwrap(),
    );
    c.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, c);
    let (name, p) = loaded.default_profile().unwrap();
    assert_eq!(name, "jane");
    assert_eq!(p.full_name, "Jane Doe");
}

#[test]
fn hand_written_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
output = "json"
default_profile = "me"

[profiles.me]
fullName = "Sam"
dateOfBirth = "1990-05-15"
gender = "Male"
"#,
    )
    .unwrap();

    let c = Config::load_from(&path).unwrap();
    assert_eq!(c.output, OutputFormat::Json);
    assert_eq!(c.profile("me").unwrap().gender, Gender::Male);
    assert!(matches!(c.profile("you"), Err(ConfigError::UnknownProfile(_))));
}

#[test]
fn malformed_file_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "output = [").unwrap();
    assert!(matches!(Config::load_from(&path), Err(ConfigError::Parse(_))));
}
