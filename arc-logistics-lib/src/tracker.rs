//! The tracker owns the catalog, the current progress, and the views
//! derived from them.
//!
//! Every accepted mutation swaps in a new `ProgressState`, rebuilds the item
//! index and shopping list from scratch, and persists the new state.

use arc_logistics_catalog::Catalog;

use crate::error::StoreError;
use crate::index::{ItemIndex, ItemStatusEntry, build_item_index};
use crate::progress::ProgressState;
use crate::search::search;
use crate::shopping::{ShoppingListEntry, build_shopping_list};
use crate::status::{ProjectStatus, WorkshopStatus, project_status, workshop_statuses};
use crate::store::{KeyValueStore, ProgressStore};

pub struct Tracker<S: KeyValueStore> {
    catalog: Catalog,
    store: ProgressStore<S>,
    state: ProgressState,
    index: ItemIndex,
    shopping_list: Vec<ShoppingListEntry>,
}

impl<S: KeyValueStore> Tracker<S> {
    /// Load saved progress from `backend` and build the derived views.
    pub fn open(catalog: Catalog, backend: S) -> Self {
        let store = ProgressStore::new(backend);
        let state = store.load(&catalog);
        let index = build_item_index(&catalog, &state);
        let shopping_list = build_shopping_list(&catalog, &state);
        Self {
            catalog,
            store,
            state,
            index,
            shopping_list,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    pub fn store(&self) -> &ProgressStore<S> {
        &self.store
    }

    pub fn item_index(&self) -> &ItemIndex {
        &self.index
    }

    pub fn shopping_list(&self) -> &[ShoppingListEntry] {
        &self.shopping_list
    }

    pub fn search(&self, query: &str) -> Vec<&ItemStatusEntry> {
        search(&self.index, query)
    }

    pub fn project_status(&self) -> ProjectStatus<'_> {
        project_status(&self.catalog, &self.state)
    }

    pub fn workshop_statuses(&self) -> Vec<WorkshopStatus<'_>> {
        workshop_statuses(&self.catalog, &self.state)
    }

    // ── Mutators ────────────────────────────────────────────────────────────
    //
    // Each returns `Ok(true)` if the state changed. A save failure is
    // returned after the new state is already in effect.

    pub fn advance_phase(&mut self, new_phase: i64) -> Result<bool, StoreError> {
        let next = self.state.advance_phase(&self.catalog, new_phase);
        self.apply(next)
    }

    pub fn complete_phase(&mut self) -> Result<bool, StoreError> {
        let next = self.state.complete_phase(&self.catalog);
        self.apply(next)
    }

    pub fn undo_phase(&mut self) -> Result<bool, StoreError> {
        let next = self.state.undo_phase(&self.catalog);
        self.apply(next)
    }

    pub fn set_workshop_level(&mut self, id: &str, new_level: i64) -> Result<bool, StoreError> {
        let next = self.state.set_workshop_level(&self.catalog, id, new_level);
        self.apply(next)
    }

    pub fn upgrade_workshop(&mut self, id: &str) -> Result<bool, StoreError> {
        let next = self.state.upgrade_workshop(&self.catalog, id);
        self.apply(next)
    }

    pub fn downgrade_workshop(&mut self, id: &str) -> Result<bool, StoreError> {
        let next = self.state.downgrade_workshop(&self.catalog, id);
        self.apply(next)
    }

    /// Return to the default state. Callers confirm with the user first.
    ///
    /// Always writes the default record, even if nothing changed, so a
    /// reset also replaces an unreadable save.
    pub fn reset_progress(&mut self) -> Result<bool, StoreError> {
        let next = ProgressState::reset(&self.catalog);
        let changed = next != self.state;
        self.replace(next);
        self.store.save(&self.state)?;
        Ok(changed)
    }

    fn apply(&mut self, next: ProgressState) -> Result<bool, StoreError> {
        if next == self.state {
            log::debug!("Progress unchanged; skipping rebuild and save");
            return Ok(false);
        }

        self.replace(next);
        self.store.save(&self.state)?;
        Ok(true)
    }

    fn replace(&mut self, next: ProgressState) {
        self.state = next;
        self.index = build_item_index(&self.catalog, &self.state);
        self.shopping_list = build_shopping_list(&self.catalog, &self.state);
    }
}

#[cfg(test)]
#[path = "tests/tracker_tests.rs"]
mod tests;
