//! Structural checks for catalog data.
//!
//! Lookups elsewhere rely on these holding: the phase at position `i` has
//! id `i + 1`, and every workshop level sits in `2..=max_level`.

use std::collections::HashSet;

use crate::types::{Catalog, ItemRequirement};

/// Largest count a single requirement row may ask for.
pub const MAX_REQUIREMENT_COUNT: u32 = 1_000_000;

/// Return a human-readable description of every structural problem found.
/// An empty list means the catalog is usable.
pub fn validate_catalog(catalog: &Catalog) -> Vec<String> {
    let mut problems = Vec::new();

    for (index, phase) in catalog.phases.iter().enumerate() {
        let expected = index as u32 + 1;
        if phase.id != expected {
            problems.push(format!(
                "phase at position {} has id {} (expected {})",
                index, phase.id, expected,
            ));
        }
        check_requirements(
            &phase.requirements,
            &format!("phase {}", phase.id),
            &mut problems,
        );
    }

    let mut seen_ids = HashSet::new();
    for workshop in &catalog.workshops {
        if workshop.id.is_empty() {
            problems.push(format!("workshop '{}' has an empty id", workshop.name));
        }
        if !seen_ids.insert(workshop.id.as_str()) {
            problems.push(format!("duplicate workshop id '{}'", workshop.id));
        }
        if workshop.max_level == 0 {
            problems.push(format!("workshop '{}' has max_level 0", workshop.id));
        }

        let mut previous = 1;
        for level in &workshop.levels {
            if level.level < 2 || level.level > workshop.max_level {
                problems.push(format!(
                    "workshop '{}' level {} is outside 2..={}",
                    workshop.id, level.level, workshop.max_level,
                ));
            }
            if level.level <= previous {
                problems.push(format!(
                    "workshop '{}' levels are not strictly ascending at level {}",
                    workshop.id, level.level,
                ));
            }
            previous = level.level;
            check_requirements(
                &level.requirements,
                &format!("workshop '{}' level {}", workshop.id, level.level),
                &mut problems,
            );
        }
    }

    problems
}

fn check_requirements(reqs: &[ItemRequirement], owner: &str, problems: &mut Vec<String>) {
    for req in reqs {
        if req.name.trim().is_empty() {
            problems.push(format!("{} has a requirement with an empty name", owner));
        }
        if req.count == 0 {
            problems.push(format!("{} requires zero of '{}'", owner, req.name));
        } else if req.count > MAX_REQUIREMENT_COUNT {
            problems.push(format!(
                "{} requires {} of '{}' (limit {})",
                owner, req.count, req.name, MAX_REQUIREMENT_COUNT,
            ));
        }
    }
}

#[cfg(test)]
#[path = "tests/validate_tests.rs"]
mod tests;
