use std::path::{Path, PathBuf};

use arc_logistics_lib::catalog::load_catalog;
use arc_logistics_lib::{FileStore, PROGRESS_KEY, settings};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

fn file_state(path: &Path) -> String {
    if path.exists() {
        "(exists)".if_supports_color(Stdout, |t| t.green()).to_string()
    } else {
        "(not found)"
            .if_supports_color(Stdout, |t| t.dimmed())
            .to_string()
    }
}

/// Show where settings, catalog, and progress come from.
pub(crate) fn run_config_show(
    catalog_override: Option<PathBuf>,
    data_dir: Option<PathBuf>,
) -> Result<(), CliError> {
    let settings_path = settings::settings_path();

    log::info!(
        "{}",
        "ARC Logistics Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    log::info!(
        "  Settings file: {} {}",
        settings_path.display().if_supports_color(Stdout, |t| t.cyan()),
        file_state(&settings_path),
    );

    let source = if catalog_override.is_some() {
        "--catalog"
    } else {
        "settings.toml"
    };
    match settings::resolve_catalog_path(catalog_override) {
        Some(path) => log::info!(
            "  Catalog:       {} {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            file_state(&path),
            format!("[{}]", source).if_supports_color(Stdout, |t| t.dimmed()),
        ),
        None => log::info!(
            "  Catalog:       {}",
            "built-in".if_supports_color(Stdout, |t| t.cyan()),
        ),
    }

    let data_dir = data_dir.unwrap_or_else(settings::default_data_dir);
    let progress = FileStore::new(data_dir).path_for(PROGRESS_KEY);
    log::info!(
        "  Progress file: {} {}",
        progress.display().if_supports_color(Stdout, |t| t.cyan()),
        file_state(&progress),
    );

    if let Some(contents) = settings::load_settings_string() {
        crate::log_blank();
        log::info!("{}", "settings.toml".if_supports_color(Stdout, |t| t.bold()));
        for line in contents.lines() {
            log::info!("  {}", line);
        }
    }

    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    log::info!("{}", settings::settings_path().display());
}

/// Make `path` the default catalog after checking that it loads.
pub(crate) fn run_set_catalog(path: &Path) -> Result<(), CliError> {
    let catalog = load_catalog(path)?;
    let absolute = std::fs::canonicalize(path)?;

    settings::save_catalog_path(Some(&absolute)).map_err(|e| {
        CliError::config(format!(
            "Failed to write {}: {}",
            settings::settings_path().display(),
            e
        ))
    })?;

    log::info!(
        "{} Default catalog set to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        absolute.display().if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!(
        "  {} phases, {} workshops",
        catalog.phases.len(),
        catalog.workshops.len(),
    );
    Ok(())
}

/// Remove the catalog override so the built-in catalog is used.
pub(crate) fn run_clear_catalog() -> Result<(), CliError> {
    settings::save_catalog_path(None).map_err(|e| {
        CliError::config(format!(
            "Failed to write {}: {}",
            settings::settings_path().display(),
            e
        ))
    })?;

    log::info!(
        "{} Using the built-in catalog",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
    );
    Ok(())
}
