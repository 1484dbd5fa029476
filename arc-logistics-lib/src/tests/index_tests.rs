use super::*;
use arc_logistics_catalog::{ProjectPhase, Workshop, WorkshopLevel, builtin_catalog};

fn default_state(catalog: &Catalog) -> ProgressState {
    ProgressState::default_for(catalog)
}

#[test]
fn index_covers_every_distinct_item() {
    let catalog = builtin_catalog().unwrap();
    let index = build_item_index(&catalog, &default_state(&catalog));
    assert_eq!(index.len(), 54);
}

#[test]
fn breakdown_sums_to_total_and_remaining_never_exceeds_total() {
    let catalog = builtin_catalog().unwrap();
    let state = default_state(&catalog)
        .advance_phase(&catalog, 3)
        .set_workshop_level(&catalog, "gear_bench", 3)
        .set_workshop_level(&catalog, "scrappy", 3);
    let index = build_item_index(&catalog, &state);

    for entry in index.iter() {
        let sum: u32 = entry.breakdown.iter().map(|b| b.count).sum();
        assert_eq!(sum, entry.total_needed, "{}", entry.display_name);
        assert!(entry.remaining_needed <= entry.total_needed);
        assert!(entry.total_needed > 0);
        let needed: u32 = entry
            .breakdown
            .iter()
            .filter(|b| b.needed)
            .map(|b| b.count)
            .sum();
        assert_eq!(needed, entry.remaining_needed, "{}", entry.display_name);
    }
}

#[test]
fn duplicate_item_aggregates_in_traversal_order() {
    let catalog = builtin_catalog().unwrap();
    let index = build_item_index(&catalog, &default_state(&catalog));

    let entry = index.get("Electrical Components").unwrap();
    assert_eq!(entry.total_needed, 30);
    assert_eq!(entry.remaining_needed, 30);
    let sources: Vec<&str> = entry.breakdown.iter().map(|b| b.source.as_str()).collect();
    assert_eq!(
        sources,
        vec!["Project Phase 3", "Gear Bench Lvl 2", "Utility Station Lvl 2"]
    );
}

#[test]
fn completed_sources_are_not_remaining() {
    let catalog = builtin_catalog().unwrap();
    let state = default_state(&catalog)
        .advance_phase(&catalog, 3)
        .set_workshop_level(&catalog, "gear_bench", 2);
    let index = build_item_index(&catalog, &state);

    let entry = index.get("electrical components").unwrap();
    assert_eq!(entry.total_needed, 30);
    assert_eq!(entry.remaining_needed, 5);
    let needed: Vec<bool> = entry.breakdown.iter().map(|b| b.needed).collect();
    assert_eq!(needed, vec![false, false, true]);
    assert_eq!(entry.verdict(), ItemVerdict::Keep(5));
}

#[test]
fn workshop_levels_compare_against_current_level() {
    let catalog = builtin_catalog().unwrap();
    let state = default_state(&catalog).set_workshop_level(&catalog, "scrappy", 3);
    let index = build_item_index(&catalog, &state);

    let apricot = index.get("Apricot").unwrap();
    assert_eq!(apricot.total_needed, 15);
    assert_eq!(apricot.remaining_needed, 12);
    assert_eq!(apricot.breakdown[0].source, "Scrappy Lvl 3");
    assert!(!apricot.breakdown[0].needed);
    assert!(apricot.breakdown[1].needed);
}

#[test]
fn fully_completed_item_is_safe_to_sell() {
    let catalog = builtin_catalog().unwrap();
    let state = default_state(&catalog).advance_phase(&catalog, 1);
    let index = build_item_index(&catalog, &state);

    assert_eq!(index.verdict("Metal Parts"), ItemVerdict::SafeToSell);
    assert_eq!(index.verdict("metal parts"), ItemVerdict::SafeToSell);
    assert_eq!(index.verdict("Rubber Duck"), ItemVerdict::Unknown);
    assert!(index.verdict("Rubber Duck").is_safe_to_sell());
    assert!(!index.verdict("Wires").is_safe_to_sell());
}

fn casing_catalog() -> Catalog {
    Catalog {
        phases: vec![ProjectPhase {
            id: 1,
            name: "Foundation".to_string(),
            requirements: vec![
                ItemRequirement::new("Metal Parts", 10, Rarity::Common).with_icon("🔩"),
            ],
        }],
        workshops: vec![Workshop {
            id: "gunsmith".to_string(),
            name: "Gunsmith".to_string(),
            max_level: 2,
            levels: vec![WorkshopLevel {
                level: 2,
                requirements: vec![
                    ItemRequirement::new("METAL PARTS", 4, Rarity::Epic).with_icon("img/metal.png"),
                ],
            }],
        }],
    }
}

#[test]
fn differently_cased_names_merge_with_first_write_wins() {
    let catalog = casing_catalog();
    let index = build_item_index(&catalog, &default_state(&catalog));

    assert_eq!(index.len(), 1);
    let entry = index.get("metal parts").unwrap();
    assert_eq!(entry.canonical_name, "metal parts");
    assert_eq!(entry.display_name, "Metal Parts");
    assert_eq!(entry.rarity, Rarity::Common);
    assert_eq!(entry.icon.as_deref(), Some("🔩"));
    assert_eq!(entry.total_needed, 14);
    assert_eq!(entry.breakdown.len(), 2);
}

#[test]
fn index_is_deterministic() {
    let catalog = builtin_catalog().unwrap();
    let state = default_state(&catalog).advance_phase(&catalog, 2);
    let a = build_item_index(&catalog, &state);
    let b = build_item_index(&catalog, &state);
    assert_eq!(a, b);
    let names_a: Vec<&str> = a.iter().map(|e| e.display_name.as_str()).collect();
    let names_b: Vec<&str> = b.iter().map(|e| e.display_name.as_str()).collect();
    assert_eq!(names_a, names_b);
    assert_eq!(names_a[0], "Metal Parts");
}

#[test]
fn unvalidated_huge_counts_saturate_instead_of_overflowing() {
    let catalog = Catalog {
        phases: vec![ProjectPhase {
            id: 1,
            name: "Foundation".to_string(),
            requirements: vec![
                ItemRequirement::new("Metal Parts", 3_000_000_000, Rarity::Common),
                ItemRequirement::new("Metal Parts", 3_000_000_000, Rarity::Common),
            ],
        }],
        workshops: vec![],
    };
    let index = build_item_index(&catalog, &default_state(&catalog));

    let entry = index.get("Metal Parts").unwrap();
    assert_eq!(entry.total_needed, u32::MAX);
    assert_eq!(entry.remaining_needed, u32::MAX);
    assert_eq!(entry.breakdown.len(), 2);
}
