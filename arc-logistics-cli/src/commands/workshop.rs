use arc_logistics_lib::catalog::Catalog;
use arc_logistics_lib::{FileStore, Tracker};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::cli_types::WorkshopAction;

/// Match a workshop by id or display name, ignoring case and treating
/// spaces and hyphens as underscores.
pub(crate) fn resolve_workshop_id<'a>(catalog: &'a Catalog, input: &str) -> Option<&'a str> {
    let wanted = normalize(input);
    catalog
        .workshops
        .iter()
        .find(|w| normalize(&w.id) == wanted || normalize(&w.name) == wanted)
        .map(|w| w.id.as_str())
}

fn normalize(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect()
}

pub(crate) fn run_workshop(
    tracker: &mut Tracker<FileStore>,
    action: WorkshopAction,
) -> Result<(), CliError> {
    let (input, change) = match action {
        WorkshopAction::List => {
            run_workshop_list(tracker);
            return Ok(());
        }
        WorkshopAction::Up { workshop } => (workshop, LevelChange::Up),
        WorkshopAction::Down { workshop } => (workshop, LevelChange::Down),
        WorkshopAction::Set { workshop, level } => (workshop, LevelChange::Set(level)),
    };

    let id = match resolve_workshop_id(tracker.catalog(), &input) {
        Some(id) => id.to_string(),
        None => {
            let known: Vec<&str> = tracker
                .catalog()
                .workshops
                .iter()
                .map(|w| w.id.as_str())
                .collect();
            return Err(CliError::unknown_workshop(format!(
                "'{}' (known: {})",
                input,
                known.join(", ")
            )));
        }
    };

    let before = tracker.state().workshop_level(&id);
    let changed = match change {
        LevelChange::Up => tracker.upgrade_workshop(&id)?,
        LevelChange::Down => tracker.downgrade_workshop(&id)?,
        LevelChange::Set(level) => tracker.set_workshop_level(&id, level)?,
    };
    let after = tracker.state().workshop_level(&id);

    let (name, max_level) = match tracker.catalog().workshop(&id) {
        Some(w) => (w.name.as_str(), w.max_level),
        None => (id.as_str(), after),
    };

    if changed {
        log::info!(
            "{} {}: Lvl {} -> {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            name.if_supports_color(Stdout, |t| t.bold()),
            before,
            after.if_supports_color(Stdout, |t| t.bold()),
        );
    } else {
        log::info!(
            "{}",
            format!("No change: {} is at Lvl {}/{}.", name, after, max_level)
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    Ok(())
}

enum LevelChange {
    Up,
    Down,
    Set(i64),
}

fn run_workshop_list(tracker: &Tracker<FileStore>) {
    log::info!("{}", "Workshops".if_supports_color(Stdout, |t| t.bold()));
    crate::log_blank();

    for status in tracker.workshop_statuses() {
        let w = status.workshop;
        log::info!(
            "  {} {} Lvl {}/{}",
            w.name.if_supports_color(Stdout, |t| t.bold()),
            format!("({})", w.id).if_supports_color(Stdout, |t| t.dimmed()),
            status.current_level,
            w.max_level,
        );
        match status.next_level() {
            Some(next) => {
                let needs: Vec<String> = next
                    .requirements
                    .iter()
                    .map(|r| format!("{} x{}", r.name, r.count))
                    .collect();
                log::info!("    Next (L{}): {}", next.level, needs.join(", "));
            }
            None if status.is_maxed() => log::info!(
                "    {}",
                "Fully upgraded".if_supports_color(Stdout, |t| t.green()),
            ),
            None => log::info!(
                "    {}",
                "No requirements listed for the next level".if_supports_color(Stdout, |t| t.dimmed()),
            ),
        }
    }
}

#[cfg(test)]
#[path = "../tests/workshop_tests.rs"]
mod tests;
