use std::fs;
use std::path::{Path, PathBuf};

use arc_logistics_lib::settings::{read_catalog_path, resolve_catalog_path, write_catalog_path};
use tempfile::TempDir;

#[test]
fn write_then_read_catalog_path() {
    let tmp = TempDir::new().unwrap();
    let settings = tmp.path().join("config").join("settings.toml");

    write_catalog_path(&settings, Some(Path::new("/data/custom.yaml"))).unwrap();
    assert_eq!(
        read_catalog_path(&settings),
        Some(PathBuf::from("/data/custom.yaml"))
    );

    write_catalog_path(&settings, None).unwrap();
    assert_eq!(read_catalog_path(&settings), None);
}

#[test]
fn unrelated_tables_are_preserved() {
    let tmp = TempDir::new().unwrap();
    let settings = tmp.path().join("settings.toml");
    fs::write(&settings, "[display]\ntheme = \"dark\"\n").unwrap();

    write_catalog_path(&settings, Some(Path::new("catalog.yaml"))).unwrap();

    let contents = fs::read_to_string(&settings).unwrap();
    let doc: toml::Value = contents.parse().unwrap();
    assert_eq!(doc["display"]["theme"].as_str(), Some("dark"));
    assert_eq!(doc["catalog"]["path"].as_str(), Some("catalog.yaml"));
}

#[test]
fn missing_or_blank_settings_read_as_none() {
    let tmp = TempDir::new().unwrap();
    let settings = tmp.path().join("settings.toml");
    assert_eq!(read_catalog_path(&settings), None);

    fs::write(&settings, "[catalog]\npath = \"\"\n").unwrap();
    assert_eq!(read_catalog_path(&settings), None);
}

#[test]
fn cli_override_wins() {
    let path = PathBuf::from("override.yaml");
    assert_eq!(resolve_catalog_path(Some(path.clone())), Some(path));
}
