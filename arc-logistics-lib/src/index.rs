//! Global item index: total vs remaining demand for every catalog item.
//!
//! The index walks the whole catalog against the current progress and
//! aggregates every requirement under its case-folded name. Entries keep
//! insertion order, so the same inputs always produce the same index.

use std::collections::HashMap;

use arc_logistics_catalog::{Catalog, ItemRequirement, Rarity};

use crate::progress::ProgressState;

/// Case-folded form of an item name, used as the index key.
pub fn canonical_name(name: &str) -> String {
    name.to_lowercase()
}

/// Source label for a project phase in index breakdowns.
pub fn phase_source_label(id: u32) -> String {
    format!("Project Phase {}", id)
}

/// Source label for a workshop level in index breakdowns.
pub fn workshop_source_label(workshop_name: &str, level: u32) -> String {
    format!("{} Lvl {}", workshop_name, level)
}

/// One catalog occurrence of an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceBreakdown {
    pub source: String,
    /// `true` if the owning phase/level is not yet completed.
    pub needed: bool,
    pub count: u32,
}

/// Aggregated demand for one item across the whole catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemStatusEntry {
    pub canonical_name: String,
    /// Display name of the first occurrence.
    pub display_name: String,
    /// Rarity of the first occurrence.
    pub rarity: Rarity,
    /// Icon of the first occurrence.
    pub icon: Option<String>,
    pub total_needed: u32,
    pub remaining_needed: u32,
    /// One record per occurrence, in catalog traversal order.
    pub breakdown: Vec<SourceBreakdown>,
}

/// What the player should do with an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemVerdict {
    /// Still required by unfinished content.
    Keep(u32),
    /// Tracked, but every requirement for it is already met.
    SafeToSell,
    /// Not required anywhere in the catalog.
    Unknown,
}

impl ItemVerdict {
    pub fn is_safe_to_sell(&self) -> bool {
        !matches!(self, Self::Keep(_))
    }
}

impl ItemStatusEntry {
    fn new(req: &ItemRequirement, canonical_name: String) -> Self {
        Self {
            canonical_name,
            display_name: req.name.clone(),
            rarity: req.rarity,
            icon: req.icon.clone(),
            total_needed: 0,
            remaining_needed: 0,
            breakdown: Vec::new(),
        }
    }

    pub fn verdict(&self) -> ItemVerdict {
        if self.remaining_needed > 0 {
            ItemVerdict::Keep(self.remaining_needed)
        } else {
            ItemVerdict::SafeToSell
        }
    }
}

/// Mapping from canonical name to [`ItemStatusEntry`], in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemIndex {
    entries: Vec<ItemStatusEntry>,
    positions: HashMap<String, usize>,
}

impl ItemIndex {
    /// Look up an item by any casing of its name.
    pub fn get(&self, name: &str) -> Option<&ItemStatusEntry> {
        self.positions
            .get(&canonical_name(name))
            .map(|&i| &self.entries[i])
    }

    /// Verdict for an exact item name; untracked names are `Unknown`.
    pub fn verdict(&self, name: &str) -> ItemVerdict {
        self.get(name)
            .map(ItemStatusEntry::verdict)
            .unwrap_or(ItemVerdict::Unknown)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemStatusEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn record(&mut self, req: &ItemRequirement, source: String, needed: bool) {
        let key = canonical_name(&req.name);
        let position = match self.positions.get(&key) {
            Some(&i) => i,
            None => {
                self.entries.push(ItemStatusEntry::new(req, key.clone()));
                self.positions.insert(key, self.entries.len() - 1);
                self.entries.len() - 1
            }
        };

        let entry = &mut self.entries[position];
        // Catalogs built in code skip validation, so totals saturate.
        entry.total_needed = entry.total_needed.saturating_add(req.count);
        if needed {
            entry.remaining_needed = entry.remaining_needed.saturating_add(req.count);
        }
        entry.breakdown.push(SourceBreakdown {
            source,
            needed,
            count: req.count,
        });
    }
}

/// Build the index for the whole catalog against `progress`.
///
/// Phases are visited in id order, then workshops in catalog order with
/// their levels ascending. A requirement counts toward `remaining_needed`
/// only if its phase or level is still ahead of the player.
pub fn build_item_index(catalog: &Catalog, progress: &ProgressState) -> ItemIndex {
    let mut index = ItemIndex::default();

    for phase in &catalog.phases {
        let is_future = phase.id > progress.project_phase_completed;
        for req in &phase.requirements {
            index.record(req, phase_source_label(phase.id), is_future);
        }
    }

    for workshop in &catalog.workshops {
        let current_level = progress.workshop_level(&workshop.id);
        for level in &workshop.levels {
            let is_future = level.level > current_level;
            for req in &level.requirements {
                index.record(
                    req,
                    workshop_source_label(&workshop.name, level.level),
                    is_future,
                );
            }
        }
    }

    log::debug!("Built item index: {} distinct items", index.len());
    index
}

#[cfg(test)]
#[path = "tests/index_tests.rs"]
mod tests;
