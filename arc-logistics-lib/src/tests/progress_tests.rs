use super::*;
use arc_logistics_catalog::builtin_catalog;

fn catalog() -> Catalog {
    builtin_catalog().unwrap()
}

#[test]
fn default_state_has_every_workshop_at_level_one() {
    let catalog = catalog();
    let state = ProgressState::default_for(&catalog);
    assert_eq!(state.project_phase_completed, 0);
    assert_eq!(state.workshop_levels.len(), catalog.workshops.len());
    assert!(state.workshop_levels.values().all(|&l| l == 1));
}

#[test]
fn missing_workshop_defaults_to_level_one() {
    let state = ProgressState {
        project_phase_completed: 0,
        workshop_levels: Default::default(),
    };
    assert_eq!(state.workshop_level("gunsmith"), 1);
}

#[test]
fn advance_phase_clamps_to_catalog_bounds() {
    let catalog = catalog();
    let state = ProgressState::default_for(&catalog);
    assert_eq!(state.advance_phase(&catalog, 3).project_phase_completed, 3);
    assert_eq!(state.advance_phase(&catalog, 99).project_phase_completed, 5);
    assert_eq!(state.advance_phase(&catalog, -4).project_phase_completed, 0);
}

#[test]
fn complete_and_undo_stop_at_the_ends() {
    let catalog = catalog();
    let mut state = ProgressState::default_for(&catalog);
    state = state.undo_phase(&catalog);
    assert_eq!(state.project_phase_completed, 0);
    for _ in 0..10 {
        state = state.complete_phase(&catalog);
    }
    assert_eq!(state.project_phase_completed, 5);
    state = state.undo_phase(&catalog);
    assert_eq!(state.project_phase_completed, 4);
}

#[test]
fn set_workshop_level_clamps() {
    let catalog = catalog();
    let state = ProgressState::default_for(&catalog);
    assert_eq!(
        state
            .set_workshop_level(&catalog, "scrappy", 4)
            .workshop_level("scrappy"),
        4
    );
    assert_eq!(
        state
            .set_workshop_level(&catalog, "scrappy", 42)
            .workshop_level("scrappy"),
        5
    );
    assert_eq!(
        state
            .set_workshop_level(&catalog, "gunsmith", 0)
            .workshop_level("gunsmith"),
        1
    );
}

#[test]
fn unknown_workshop_is_ignored() {
    let catalog = catalog();
    let state = ProgressState::default_for(&catalog);
    let next = state.set_workshop_level(&catalog, "stables", 3);
    assert_eq!(next, state);
    assert!(!next.workshop_levels.contains_key("stables"));
    assert_eq!(state.upgrade_workshop(&catalog, "stables"), state);
}

#[test]
fn mutators_leave_the_original_untouched() {
    let catalog = catalog();
    let state = ProgressState::default_for(&catalog);
    let _ = state.complete_phase(&catalog);
    let _ = state.upgrade_workshop(&catalog, "refiner");
    assert_eq!(state, ProgressState::default_for(&catalog));
}

#[test]
fn bounds_hold_after_arbitrary_mutations() {
    let catalog = catalog();
    let mut state = ProgressState::default_for(&catalog);
    let requests: [i64; 8] = [-3, 0, 2, 7, 100, 1, -1, 4];
    for (step, &value) in requests.iter().enumerate() {
        state = state.advance_phase(&catalog, value);
        for workshop in &catalog.workshops {
            state = match step % 3 {
                0 => state.set_workshop_level(&catalog, &workshop.id, value),
                1 => state.upgrade_workshop(&catalog, &workshop.id),
                _ => state.downgrade_workshop(&catalog, &workshop.id),
            };
        }

        assert!(state.project_phase_completed <= catalog.phase_count());
        for workshop in &catalog.workshops {
            let level = state.workshop_level(&workshop.id);
            assert!(
                (1..=workshop.max_level).contains(&level),
                "{} at level {} after step {}",
                workshop.id,
                level,
                step,
            );
        }
    }
}

#[test]
fn reset_is_idempotent() {
    let catalog = catalog();
    let once = ProgressState::reset(&catalog);
    let twice = ProgressState::reset(&catalog);
    assert_eq!(once, twice);
    assert_eq!(once, ProgressState::default_for(&catalog));
}

#[test]
fn stored_progress_clamps_and_drops_unknown_ids() {
    let catalog = catalog();
    let mut state = ProgressState {
        project_phase_completed: 12,
        workshop_levels: Default::default(),
    };
    state.workshop_levels.insert("gunsmith".to_string(), 9);
    state.workshop_levels.insert("medical_lab".to_string(), 0);
    state.workshop_levels.insert("stables".to_string(), 2);

    let normalized = StoredProgress::from(&state).normalize(&catalog);
    assert_eq!(normalized.project_phase_completed, 5);
    assert_eq!(normalized.workshop_level("gunsmith"), 3);
    assert_eq!(normalized.workshop_level("medical_lab"), 1);
    assert_eq!(normalized.workshop_level("scrappy"), 1);
    assert!(!normalized.workshop_levels.contains_key("stables"));
    assert_eq!(normalized.workshop_levels.len(), catalog.workshops.len());
}

#[test]
fn serializes_with_camel_case_keys() {
    let catalog = catalog();
    let state = ProgressState::default_for(&catalog).advance_phase(&catalog, 2);
    let json = serde_json::to_value(&state).unwrap();
    assert_eq!(json["projectPhaseCompleted"], 2);
    assert_eq!(json["workshopLevels"]["gunsmith"], 1);
}
