use super::*;
use crate::index::build_item_index;
use crate::progress::ProgressState;
use arc_logistics_catalog::builtin_catalog;

fn default_index() -> ItemIndex {
    let catalog = builtin_catalog().unwrap();
    build_item_index(&catalog, &ProgressState::default_for(&catalog))
}

#[test]
fn wires_at_default_state() {
    let index = default_index();
    let results = search(&index, "wires");

    assert_eq!(results.len(), 1);
    let wires = results[0];
    assert_eq!(wires.display_name, "Wires");
    assert_eq!(wires.remaining_needed, 25);
    assert_eq!(wires.breakdown.len(), 1);
    assert!(wires.breakdown[0].needed);
    assert_eq!(wires.breakdown[0].count, 25);
    assert_eq!(wires.breakdown[0].source, "Project Phase 3");
}

#[test]
fn blank_query_returns_nothing() {
    let index = default_index();
    assert!(search(&index, "").is_empty());
    assert!(search(&index, "   \t").is_empty());
}

#[test]
fn unmatched_query_returns_nothing() {
    let index = default_index();
    assert!(search(&index, "rubber duck").is_empty());
}

#[test]
fn matches_substrings_case_insensitively() {
    let index = default_index();
    let results = search(&index, "  ELECTRICAL ");
    let names: Vec<&str> = results.iter().map(|e| e.display_name.as_str()).collect();
    assert_eq!(names, vec!["Electrical Components", "Advanced Electrical Components"]);

    // Substring, not prefix.
    let results = search(&index, "otor");
    assert!(results.iter().any(|e| e.display_name == "Motor"));
}

#[test]
fn results_sorted_by_remaining_demand() {
    let catalog = builtin_catalog().unwrap();
    let state = ProgressState::default_for(&catalog).advance_phase(&catalog, 3);
    let index = build_item_index(&catalog, &state);

    // "Electrical Components" has 10 left (two level-2 upgrades), the
    // advanced variant still has all 15.
    let results = search(&index, "electrical");
    let remaining: Vec<u32> = results.iter().map(|e| e.remaining_needed).collect();
    assert_eq!(remaining, vec![15, 10]);
    assert_eq!(results[0].display_name, "Advanced Electrical Components");
}

#[test]
fn ties_keep_index_order() {
    let index = default_index();
    // Rusted Tools and Rusted Gear both need 3.
    let results = search(&index, "rusted");
    let names: Vec<&str> = results.iter().map(|e| e.display_name.as_str()).collect();
    assert_eq!(names, vec!["Rusted Tools", "Rusted Gear", "Rusted Shut Medical Kit"]);
}
