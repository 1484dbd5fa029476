//! Content catalog data model, YAML I/O, and structural validation.
//!
//! This crate defines the static game content (project phases and workshop
//! upgrade tracks) without any knowledge of player progress. Consumers get a
//! validated [`Catalog`] from [`builtin_catalog`] or [`load_catalog`].

pub mod types;
pub mod validate;
pub mod yaml;

pub use types::*;
pub use validate::{MAX_REQUIREMENT_COUNT, validate_catalog};
pub use yaml::{CatalogError, builtin_catalog, load_catalog, parse_catalog};
