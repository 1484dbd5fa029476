//! Shared application settings (catalog override, data directory).
//!
//! The settings file is `~/.config/arc-logistics/settings.toml`; progress
//! itself lives in the data directory, not here.

use std::io;
use std::path::{Path, PathBuf};

/// Canonical path to the settings file: `~/.config/arc-logistics/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("arc-logistics").join("settings.toml")
}

/// Default directory for saved progress: `~/.local/share/arc-logistics`
/// (or the platform equivalent).
pub fn default_data_dir() -> PathBuf {
    let data = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data.join("arc-logistics")
}

/// Resolve the catalog file using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `catalog.path` in `settings.toml`
/// 3. `None`: use the built-in catalog
pub fn resolve_catalog_path(cli_override: Option<PathBuf>) -> Option<PathBuf> {
    cli_override.or_else(|| read_catalog_path(&settings_path()))
}

/// Read `catalog.path` from a settings file, if set.
pub fn read_catalog_path(settings: &Path) -> Option<PathBuf> {
    let contents = std::fs::read_to_string(settings).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    let path = doc.get("catalog")?.get("path")?.as_str()?;
    if path.is_empty() {
        None
    } else {
        Some(PathBuf::from(path))
    }
}

/// Save (or clear) the catalog path in `settings.toml`.
pub fn save_catalog_path(path: Option<&Path>) -> io::Result<()> {
    write_catalog_path(&settings_path(), path)
}

/// Update `catalog.path` in the given settings file.
///
/// Uses `toml::Value` for a surgical update so unrelated tables are
/// preserved.
pub fn write_catalog_path(settings: &Path, path: Option<&Path>) -> io::Result<()> {
    let mut doc: toml::Value = if let Ok(contents) = std::fs::read_to_string(settings) {
        contents
            .parse()
            .unwrap_or_else(|_| toml::Value::Table(Default::default()))
    } else {
        toml::Value::Table(Default::default())
    };

    // Ensure [catalog] table exists
    let table = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
    let catalog = table
        .entry("catalog")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let catalog_table = catalog
        .as_table_mut()
        .ok_or_else(|| io::Error::other("[catalog] is not a table"))?;

    match path {
        Some(p) => {
            catalog_table.insert(
                "path".to_string(),
                toml::Value::String(p.to_string_lossy().into_owned()),
            );
        }
        None => {
            catalog_table.remove("path");
        }
    }

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, settings)?;

    Ok(())
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub fn load_settings_string() -> Option<String> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}
