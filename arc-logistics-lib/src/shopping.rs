//! Shopping list: materials for the player's immediate next goals.
//!
//! Only the next incomplete phase and each workshop's next level are
//! considered. Duplicates are merged by their raw display name, which
//! differs from the case-folded key used by the item index.

use std::cmp::Ordering;
use std::collections::HashMap;

use arc_logistics_catalog::{Catalog, ItemRequirement, Rarity};

use crate::progress::ProgressState;

/// Source label for the next project phase.
pub fn phase_goal_label(id: u32) -> String {
    format!("Phase {}", id)
}

/// Source label for a workshop's next level.
pub fn workshop_goal_label(workshop_name: &str, level: u32) -> String {
    format!("{} L{}", workshop_name, level)
}

/// One aggregated line of the shopping list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingListEntry {
    pub name: String,
    pub count: u32,
    /// Rarity of the last occurrence merged into this entry.
    pub rarity: Rarity,
    /// Distinct source labels in the order they were first seen.
    pub sources: Vec<String>,
    /// Icon of the last occurrence merged into this entry.
    pub icon: Option<String>,
}

#[derive(Default)]
struct Accumulator {
    entries: Vec<ShoppingListEntry>,
    positions: HashMap<String, usize>,
}

impl Accumulator {
    fn add(&mut self, req: &ItemRequirement, source: &str) {
        match self.positions.get(&req.name) {
            Some(&i) => {
                let entry = &mut self.entries[i];
                entry.count = entry.count.saturating_add(req.count);
                entry.rarity = req.rarity;
                entry.icon = req.icon.clone();
                if !entry.sources.iter().any(|s| s == source) {
                    entry.sources.push(source.to_string());
                }
            }
            None => {
                self.positions
                    .insert(req.name.clone(), self.entries.len());
                self.entries.push(ShoppingListEntry {
                    name: req.name.clone(),
                    count: req.count,
                    rarity: req.rarity,
                    sources: vec![source.to_string()],
                    icon: req.icon.clone(),
                });
            }
        }
    }
}

/// Rarity descending, then name ascending.
///
/// Names compare case-insensitively first and fall back to exact byte
/// order, so entries that differ only in casing still have a fixed order.
pub fn compare_entries(a: &ShoppingListEntry, b: &ShoppingListEntry) -> Ordering {
    b.rarity
        .cmp(&a.rarity)
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.name.cmp(&b.name))
}

/// Build the shopping list for `progress`.
///
/// Returns an empty list once every phase is complete and every workshop
/// is at its max level.
pub fn build_shopping_list(catalog: &Catalog, progress: &ProgressState) -> Vec<ShoppingListEntry> {
    let mut acc = Accumulator::default();

    if let Some(phase) = catalog.phase(progress.project_phase_completed.saturating_add(1)) {
        let label = phase_goal_label(phase.id);
        for req in &phase.requirements {
            acc.add(req, &label);
        }
    }

    for workshop in &catalog.workshops {
        let target_level = progress.workshop_level(&workshop.id).saturating_add(1);
        if let Some(level) = workshop.level(target_level) {
            let label = workshop_goal_label(&workshop.name, target_level);
            for req in &level.requirements {
                acc.add(req, &label);
            }
        }
    }

    let mut list = acc.entries;
    list.sort_by(compare_entries);
    log::debug!("Built shopping list: {} entries", list.len());
    list
}

#[cfg(test)]
#[path = "tests/shopping_tests.rs"]
mod tests;
