use super::*;
use crate::types::{ProjectPhase, Rarity, Workshop, WorkshopLevel};

fn phase(id: u32) -> ProjectPhase {
    ProjectPhase {
        id,
        name: format!("Phase {}", id),
        requirements: vec![ItemRequirement::new("Metal Parts", 10, Rarity::Common)],
    }
}

fn workshop(id: &str, max_level: u32, levels: &[u32]) -> Workshop {
    Workshop {
        id: id.to_string(),
        name: id.to_string(),
        max_level,
        levels: levels
            .iter()
            .map(|&level| WorkshopLevel {
                level,
                requirements: vec![ItemRequirement::new("Wires", 2, Rarity::Rare)],
            })
            .collect(),
    }
}

#[test]
fn valid_catalog_has_no_problems() {
    let catalog = Catalog {
        phases: vec![phase(1), phase(2)],
        workshops: vec![workshop("gunsmith", 3, &[2, 3])],
    };
    assert!(validate_catalog(&catalog).is_empty());
}

#[test]
fn gap_in_phase_ids_is_reported() {
    let catalog = Catalog {
        phases: vec![phase(1), phase(3)],
        workshops: vec![],
    };
    let problems = validate_catalog(&catalog);
    assert_eq!(problems.len(), 1);
    assert!(problems[0].contains("expected 2"), "{}", problems[0]);
}

#[test]
fn level_outside_range_is_reported() {
    let catalog = Catalog {
        phases: vec![],
        workshops: vec![workshop("refiner", 3, &[1, 4])],
    };
    let problems = validate_catalog(&catalog);
    assert!(problems.iter().any(|p| p.contains("level 1 is outside")));
    assert!(problems.iter().any(|p| p.contains("level 4 is outside")));
}

#[test]
fn descending_levels_are_reported() {
    let catalog = Catalog {
        phases: vec![],
        workshops: vec![workshop("refiner", 3, &[3, 2])],
    };
    let problems = validate_catalog(&catalog);
    assert!(problems.iter().any(|p| p.contains("not strictly ascending")));
}

#[test]
fn duplicate_workshop_ids_are_reported() {
    let catalog = Catalog {
        phases: vec![],
        workshops: vec![workshop("scrappy", 2, &[2]), workshop("scrappy", 2, &[2])],
    };
    let problems = validate_catalog(&catalog);
    assert!(problems.iter().any(|p| p.contains("duplicate workshop id")));
}

#[test]
fn zero_count_is_reported() {
    let mut bad = phase(1);
    bad.requirements[0].count = 0;
    let catalog = Catalog {
        phases: vec![bad],
        workshops: vec![],
    };
    let problems = validate_catalog(&catalog);
    assert_eq!(problems, vec!["phase 1 requires zero of 'Metal Parts'".to_string()]);
}

#[test]
fn count_above_limit_is_reported() {
    let mut at_limit = phase(1);
    at_limit.requirements[0].count = MAX_REQUIREMENT_COUNT;
    let mut too_many = phase(2);
    too_many.requirements[0].count = 3_000_000_000;
    let catalog = Catalog {
        phases: vec![at_limit, too_many],
        workshops: vec![],
    };
    let problems = validate_catalog(&catalog);
    assert_eq!(problems.len(), 1);
    assert!(problems[0].starts_with("phase 2 requires 3000000000"), "{}", problems[0]);
}
