//! Player progress state and its clamping mutators.
//!
//! Every mutator returns a fresh `ProgressState` rather than editing in
//! place, so callers can compare old and new values to decide whether the
//! derived views need rebuilding.

use std::collections::BTreeMap;

use arc_logistics_catalog::Catalog;
use serde::{Deserialize, Serialize};

/// How far the player has advanced.
///
/// Serialized as `{"projectPhaseCompleted": n, "workshopLevels": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressState {
    /// `0` means nothing finished; `n` means phases `1..=n` are done and
    /// phase `n + 1` (if any) is the current goal.
    pub project_phase_completed: u32,
    /// Current level per workshop id. Missing entries mean level 1.
    #[serde(default)]
    pub workshop_levels: BTreeMap<String, u32>,
}

impl ProgressState {
    /// Starting state: no phase finished, every workshop at level 1.
    pub fn default_for(catalog: &Catalog) -> Self {
        Self {
            project_phase_completed: 0,
            workshop_levels: catalog
                .workshops
                .iter()
                .map(|w| (w.id.clone(), 1))
                .collect(),
        }
    }

    /// Current level of a workshop, defaulting to 1.
    pub fn workshop_level(&self, id: &str) -> u32 {
        self.workshop_levels.get(id).copied().unwrap_or(1)
    }

    /// Set the completed-phase counter, clamped to `0..=phase_count`.
    pub fn advance_phase(&self, catalog: &Catalog, new_phase: i64) -> Self {
        let clamped = new_phase.clamp(0, i64::from(catalog.phase_count())) as u32;
        Self {
            project_phase_completed: clamped,
            workshop_levels: self.workshop_levels.clone(),
        }
    }

    /// Mark the current goal phase as finished.
    pub fn complete_phase(&self, catalog: &Catalog) -> Self {
        self.advance_phase(catalog, i64::from(self.project_phase_completed) + 1)
    }

    /// Step the phase counter back by one.
    pub fn undo_phase(&self, catalog: &Catalog) -> Self {
        self.advance_phase(catalog, i64::from(self.project_phase_completed) - 1)
    }

    /// Set a workshop's level, clamped to `1..=max_level`.
    ///
    /// Unknown workshop ids leave the state unchanged.
    pub fn set_workshop_level(&self, catalog: &Catalog, id: &str, new_level: i64) -> Self {
        let Some(workshop) = catalog.workshop(id) else {
            log::debug!("Ignoring level change for unknown workshop '{}'", id);
            return self.clone();
        };

        let clamped = workshop.clamp_level(new_level);
        let mut workshop_levels = self.workshop_levels.clone();
        workshop_levels.insert(workshop.id.clone(), clamped);
        Self {
            project_phase_completed: self.project_phase_completed,
            workshop_levels,
        }
    }

    pub fn upgrade_workshop(&self, catalog: &Catalog, id: &str) -> Self {
        self.set_workshop_level(catalog, id, i64::from(self.workshop_level(id)) + 1)
    }

    pub fn downgrade_workshop(&self, catalog: &Catalog, id: &str) -> Self {
        self.set_workshop_level(catalog, id, i64::from(self.workshop_level(id)) - 1)
    }

    /// Discard all progress. Same as [`ProgressState::default_for`].
    pub fn reset(catalog: &Catalog) -> Self {
        Self::default_for(catalog)
    }
}

/// Progress exactly as read from storage, before clamping.
///
/// Numbers are `i64` so a negative or oversized value is clamped the same
/// way the mutators clamp it, instead of failing to parse and discarding
/// the rest of the record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredProgress {
    pub project_phase_completed: i64,
    #[serde(default)]
    pub workshop_levels: BTreeMap<String, i64>,
}

impl StoredProgress {
    /// Bring the record into catalog bounds.
    ///
    /// Clamps the phase counter and every level, drops ids the catalog
    /// doesn't know, and fills in level 1 for workshops not yet present.
    pub fn normalize(&self, catalog: &Catalog) -> ProgressState {
        let project_phase_completed =
            self.project_phase_completed
                .clamp(0, i64::from(catalog.phase_count())) as u32;

        let mut workshop_levels = BTreeMap::new();
        for workshop in &catalog.workshops {
            let saved = self.workshop_levels.get(&workshop.id).copied().unwrap_or(1);
            let level = workshop.clamp_level(saved);
            workshop_levels.insert(workshop.id.clone(), level);
        }

        for id in self.workshop_levels.keys() {
            if catalog.workshop(id).is_none() {
                log::debug!("Dropping progress for unknown workshop '{}'", id);
            }
        }

        ProgressState {
            project_phase_completed,
            workshop_levels,
        }
    }
}

impl From<&ProgressState> for StoredProgress {
    fn from(state: &ProgressState) -> Self {
        Self {
            project_phase_completed: i64::from(state.project_phase_completed),
            workshop_levels: state
                .workshop_levels
                .iter()
                .map(|(id, &level)| (id.clone(), i64::from(level)))
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "tests/progress_tests.rs"]
mod tests;
