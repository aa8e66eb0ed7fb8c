//! Tests for config loading and option layering.

use std::fs;
use std::time::Duration;
use synthlog::{Config, Error, Format, Level, Options, SinkKind};
use tempfile::TempDir;

#[test]
fn missing_file_yields_defaults() {
    let tmp = TempDir::new().unwrap();
    let config = Config::load_from(&tmp.path().join("absent.toml")).unwrap();
    assert_eq!(config.parse_level(), Level::Warn);
    assert!(config.generate.format.is_none());
}

#[test]
fn generate_section_layers_over_defaults() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("synthlog.toml");
    fs::write(
        &path,
        r#"
[general]
level = "debug"

[generate]
format = "rfc5424"
type = "gz"
output = "/tmp/synth/out.log.gz"
number = 250
bytes = "2M"
split_by = "512K"
sleep = "1s"
delay = "20ms"
overwrite = true
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.parse_level(), Level::Debug);

    let options = config.apply(Options::default()).unwrap();
    assert_eq!(options.format, Format::Rfc5424);
    assert_eq!(options.kind, SinkKind::Gz);
    assert_eq!(options.output.to_str(), Some("/tmp/synth/out.log.gz"));
    assert_eq!(options.number, 250);
    assert_eq!(options.bytes, 2 * 1024 * 1024);
    assert_eq!(options.split_by, 512 * 1024);
    assert_eq!(options.sleep, Duration::from_secs(1));
    assert_eq!(options.delay, Duration::from_millis(20));
    assert!(options.overwrite);
    assert!(!options.forever);
}

#[test]
fn unknown_names_stay_permissive_until_validated() {
    let config: Config = toml::from_str(
        r#"
[generate]
format = "cobol"
type = "s3"
"#,
    )
    .unwrap();

    let options = config.apply(Options::default()).unwrap();
    assert_eq!(options.format, Format::Unknown);
    assert_eq!(options.kind, SinkKind::Unknown);
    assert!(matches!(options.validate(), Err(Error::InvalidOption(_))));
}

#[test]
fn bad_size_is_rejected() {
    let config: Config = toml::from_str("[generate]\nbytes = \"plenty\"\n").unwrap();
    match config.apply(Options::default()) {
        Err(Error::InvalidOption(msg)) => assert!(msg.contains("bytes")),
        other => panic!("expected InvalidOption, got {other:?}"),
    }
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("broken.toml");
    fs::write(&path, "[generate\nnumber = ").unwrap();
    assert!(matches!(Config::load_from(&path), Err(Error::ConfigParse(_))));
}

#[test]
fn validate_accepts_defaults() {
    assert!(Options::default().validate().is_ok());
}

#[test]
fn validate_requires_a_volume_unless_forever() {
    let options = Options::new().number(0).bytes(0);
    assert!(options.validate().is_err());
    assert!(options.forever(true).validate().is_ok());
}

#[test]
fn byte_budget_wins_over_count() {
    let options = Options::new().number(10).bytes(100);
    assert!(options.byte_mode());
    assert!(!Options::new().number(10).byte_mode());
    assert!(Options::new().append());
    assert!(!Options::new().overwrite(true).append());
}
