use super::Config;
use crate::error::Error;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_empty_config_uses_defaults() {
    let config = Config::parse("").unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(config.section_marker, "data-section");
    assert_eq!(config.heading_marker, "data-heading");
    assert_eq!(config.file_extensions, ["html", "htm"]);
}

#[test]
fn test_partial_config_keeps_other_defaults() {
    let config = Config::parse("section_marker = \"data-scope\"\n").unwrap();

    assert_eq!(config.section_marker, "data-scope");
    assert_eq!(config.heading_marker, "data-heading");

    let markers = config.markers();
    assert_eq!(markers.section, "data-scope");
    assert_eq!(markers.heading, "data-heading");
}

#[test]
fn test_parse_reports_errors() {
    for broken in ["file_extensions = 3 = 4", "[unterminated"] {
        let err = Config::parse(broken).unwrap_err();
        assert!(matches!(err, Error::Config { .. }), "{broken:?}: {err:?}");
        assert!(err.to_string().starts_with("invalid configuration: "), "{err}");
    }
}

#[test]
fn test_load_from_missing_or_broken_file() {
    let dir = TempDir::new().unwrap();
    assert_eq!(Config::load_from(&dir.path().join("absent.toml")), Config::default());

    let broken = dir.path().join("headline.toml");
    fs::write(&broken, "file_extensions = 3 = 4").unwrap();
    assert_eq!(Config::load_from(&broken), Config::default());
}

#[test]
fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("headline.toml");
    fs::write(&path, "file_extensions = [\"xhtml\"]\nheading_marker = \"data-h\"\n").unwrap();

    let config = Config::load_from(&path);

    assert_eq!(config.file_extensions, ["xhtml"]);
    assert_eq!(config.heading_marker, "data-h");
    assert_eq!(config.section_marker, "data-section");
}
