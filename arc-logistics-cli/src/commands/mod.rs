pub(crate) mod catalog;
pub(crate) mod config;
pub(crate) mod list;
pub(crate) mod phase;
pub(crate) mod reset;
pub(crate) mod search;
pub(crate) mod status;
pub(crate) mod workshop;

use std::path::{Path, PathBuf};

use arc_logistics_lib::catalog::{Catalog, builtin_catalog, load_catalog};
use arc_logistics_lib::{FileStore, Tracker, settings};

use crate::CliError;

/// Load the catalog named by `--catalog` or settings.toml, else the built-in one.
pub(crate) fn resolve_catalog(cli_override: Option<PathBuf>) -> Result<Catalog, CliError> {
    match settings::resolve_catalog_path(cli_override) {
        Some(path) => {
            log::debug!("Using catalog file {}", path.display());
            Ok(load_catalog(&path)?)
        }
        None => Ok(builtin_catalog()?),
    }
}

pub(crate) fn open_tracker(
    catalog: Catalog,
    data_dir: Option<&Path>,
) -> Tracker<FileStore> {
    let dir = data_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(settings::default_data_dir);
    log::debug!("Progress directory: {}", dir.display());
    Tracker::open(catalog, FileStore::new(dir))
}
