use arc_logistics_lib::catalog::Rarity;
use arc_logistics_lib::{FileStore, ShoppingListEntry, Tracker};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::render::{icon_text, paint};

/// Entries to show, keeping list order. `None` keeps everything.
pub(crate) fn select_entries(
    list: &[ShoppingListEntry],
    rarity: Option<Rarity>,
) -> Vec<&ShoppingListEntry> {
    list.iter()
        .filter(|e| rarity.is_none_or(|r| e.rarity == r))
        .collect()
}

/// Print the aggregated shopping list for the current goals.
pub(crate) fn run_list(
    tracker: &Tracker<FileStore>,
    rarity: Option<Rarity>,
) -> Result<(), CliError> {
    let list = select_entries(tracker.shopping_list(), rarity);

    log::info!("{}", "Shopping List".if_supports_color(Stdout, |t| t.bold()));

    let mut goals = Vec::new();
    if let Some(phase) = tracker.project_status().current_goal {
        goals.push(format!("Phase {} ({})", phase.id, phase.name));
    }
    for status in tracker.workshop_statuses() {
        if let Some(level) = status.next_level() {
            goals.push(format!("{} L{}", status.workshop.name, level.level));
        }
    }
    if !goals.is_empty() {
        log::info!(
            "  {}",
            format!("Goals: {}", goals.join(", ")).if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    crate::log_blank();

    if list.is_empty() {
        match rarity {
            Some(rarity) if !tracker.shopping_list().is_empty() => log::info!(
                "  {}",
                format!("No {} items needed for the current goals.", rarity)
                    .if_supports_color(Stdout, |t| t.dimmed()),
            ),
            _ => log::info!(
                "  {}",
                "No active requirements. Everything is complete!"
                    .if_supports_color(Stdout, |t| t.green()),
            ),
        }
        return Ok(());
    }

    let name_width = list.iter().map(|e| e.name.chars().count()).max().unwrap_or(0);
    let count_width = list
        .iter()
        .map(|e| e.count.to_string().len())
        .max()
        .unwrap_or(0)
        + 1;

    for entry in &list {
        let padded = format!("{:<name_width$}", entry.name);
        let count = format!("x{}", entry.count);
        log::info!(
            "  {}  {}  {:>count_width$}  {}  {}",
            icon_text(entry.icon.as_deref()),
            paint(&padded, entry.rarity),
            count,
            paint(&format!("{:<9}", entry.rarity.as_str()), entry.rarity),
            entry
                .sources
                .join(", ")
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    crate::log_blank();
    let total: u64 = list.iter().map(|e| u64::from(e.count)).sum();
    log::info!(
        "{} distinct items, {} total",
        list.len().if_supports_color(Stdout, |t| t.bold()),
        total.if_supports_color(Stdout, |t| t.bold()),
    );

    Ok(())
}

#[cfg(test)]
#[path = "../tests/list_tests.rs"]
mod tests;
