//! Progress tracking and requirement derivation for ARC Raiders logistics.
//!
//! Everything here is a pure function of `(Catalog, ProgressState)` except
//! the [`store`] module, which persists progress, and [`settings`], which
//! resolves file locations. [`Tracker`] ties them together for frontends.

pub mod error;
pub mod index;
pub mod progress;
pub mod search;
pub mod settings;
pub mod shopping;
pub mod status;
pub mod store;
pub mod tracker;

pub use arc_logistics_catalog as catalog;

pub use error::StoreError;
pub use index::{
    ItemIndex, ItemStatusEntry, ItemVerdict, SourceBreakdown, build_item_index, canonical_name,
};
pub use progress::{ProgressState, StoredProgress};
pub use search::search;
pub use shopping::{ShoppingListEntry, build_shopping_list};
pub use status::{ProjectStatus, WorkshopStatus, project_status, workshop_statuses};
pub use store::{FileStore, KeyValueStore, MemoryStore, PROGRESS_KEY, ProgressStore};
pub use tracker::Tracker;
