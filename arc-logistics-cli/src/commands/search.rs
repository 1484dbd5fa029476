use arc_logistics_lib::{FileStore, ItemStatusEntry, ItemVerdict, Tracker};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::render::{icon_text, paint, rarity_tag, verdict_banner, verdict_description};

/// Look up items by partial name and tell the player whether to keep them.
pub(crate) fn run_search(tracker: &Tracker<FileStore>, query: &str) -> Result<(), CliError> {
    let results = tracker.search(query);

    if results.is_empty() {
        log::info!(
            "Unknown item '{}': no tracked item matches.",
            query.trim().if_supports_color(Stdout, |t| t.bold()),
        );
        log::info!(
            "  {}  {}",
            verdict_banner(ItemVerdict::Unknown),
            verdict_description(ItemVerdict::Unknown).if_supports_color(Stdout, |t| t.dimmed()),
        );
        return Ok(());
    }

    log::info!(
        "{} result{} for '{}'",
        results.len(),
        if results.len() == 1 { "" } else { "s" },
        query.trim(),
    );

    for entry in results {
        crate::log_blank();
        print_entry(entry);
    }

    Ok(())
}

fn print_entry(entry: &ItemStatusEntry) {
    let verdict = entry.verdict();

    log::info!(
        "{}  {}  {}",
        icon_text(entry.icon.as_deref()),
        paint(&entry.display_name, entry.rarity),
        rarity_tag(entry.rarity),
    );
    log::info!(
        "  {}  {}",
        verdict_banner(verdict),
        verdict_description(verdict).if_supports_color(Stdout, |t| t.dimmed()),
    );
    log::info!(
        "  Needed {} of {} total",
        entry.remaining_needed,
        entry.total_needed,
    );

    for source in &entry.breakdown {
        let count = format!("x{}", source.count);
        if source.needed {
            log::info!(
                "    {} {}  {}",
                "\u{2022}".if_supports_color(Stdout, |t| t.red()),
                source.source,
                count.if_supports_color(Stdout, |t| t.bold()),
            );
        } else {
            log::info!(
                "    {} {}  {}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                source
                    .source
                    .if_supports_color(Stdout, |t| t.strikethrough()),
                count.if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
    }
}
