//! YAML loading for catalog data.
//!
//! The shipped catalog is embedded at build time; an alternative catalog
//! file can be loaded from disk with the same schema:
//! ```text
//! phases:
//!   - id: 1
//!     name: Foundation
//!     requirements:
//!       - { name: Metal Parts, count: 150, rarity: common, icon: "🔩" }
//! workshops:
//!   - id: gunsmith
//!     name: Gunsmith
//!     max_level: 3
//!     levels:
//!       - level: 2
//!         requirements: [...]
//! ```

use crate::types::Catalog;
use crate::validate::validate_catalog;
use std::path::Path;
use thiserror::Error;

/// Built-in catalog source, compiled into the binary.
const BUILTIN_CATALOG: &str = include_str!("../catalog/arc_raiders.yaml");

/// Label used in error messages for the embedded catalog.
const BUILTIN_ORIGIN: &str = "<built-in catalog>";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("YAML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_yml::Error,
    },
    #[error("Invalid catalog {path}: {}", problems.join("; "))]
    Invalid { path: String, problems: Vec<String> },
}

/// Load the catalog embedded in the binary.
pub fn builtin_catalog() -> Result<Catalog, CatalogError> {
    parse_catalog(BUILTIN_CATALOG, BUILTIN_ORIGIN)
}

/// Load and validate a catalog YAML file.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let contents = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_catalog(&contents, &path.display().to_string())
}

/// Parse and validate catalog YAML. `origin` names the source in errors.
pub fn parse_catalog(contents: &str, origin: &str) -> Result<Catalog, CatalogError> {
    let catalog: Catalog = serde_yml::from_str(contents).map_err(|e| CatalogError::Parse {
        path: origin.to_string(),
        source: e,
    })?;

    let problems = validate_catalog(&catalog);
    if !problems.is_empty() {
        return Err(CatalogError::Invalid {
            path: origin.to_string(),
            problems,
        });
    }

    log::debug!(
        "Loaded catalog from {}: {} phases, {} workshops",
        origin,
        catalog.phases.len(),
        catalog.workshops.len(),
    );
    Ok(catalog)
}
