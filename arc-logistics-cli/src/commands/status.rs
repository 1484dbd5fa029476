use arc_logistics_lib::{FileStore, Tracker};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::render::progress_bar;

/// Print project progress followed by every workshop's level.
pub(crate) fn run_status(tracker: &Tracker<FileStore>) -> Result<(), CliError> {
    let project = tracker.project_status();

    log::info!(
        "{}",
        "Expedition Project".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!(
        "  {} {}/{} phases",
        progress_bar(project.completion_ratio(), 20),
        project.completed,
        project.total,
    );
    match project.current_goal {
        Some(phase) => log::info!(
            "  Current goal: {} {}",
            format!("Phase {}:", phase.id).if_supports_color(Stdout, |t| t.cyan()),
            phase.name,
        ),
        None => log::info!(
            "  {}",
            "All phases complete!".if_supports_color(Stdout, |t| t.green()),
        ),
    }
    crate::log_blank();

    log::info!("{}", "Workshops".if_supports_color(Stdout, |t| t.bold()));
    let width = tracker
        .catalog()
        .workshops
        .iter()
        .map(|w| w.name.len())
        .max()
        .unwrap_or(0);
    for status in tracker.workshop_statuses() {
        let level = format!("Lvl {}/{}", status.current_level, status.workshop.max_level);
        if status.is_maxed() {
            log::info!(
                "  {:<width$}  {}  {}",
                status.workshop.name,
                level,
                "MAX".if_supports_color(Stdout, |t| t.green()),
            );
        } else {
            log::info!(
                "  {:<width$}  {}",
                status.workshop.name,
                level.if_supports_color(Stdout, |t| t.cyan()),
            );
        }
    }

    crate::log_blank();
    log::info!(
        "{}",
        format!(
            "Progress file: {}",
            tracker.store().backend().path_for(arc_logistics_lib::PROGRESS_KEY).display()
        )
        .if_supports_color(Stdout, |t| t.dimmed()),
    );

    Ok(())
}
