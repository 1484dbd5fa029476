use arc_logistics_lib::{FileStore, Tracker};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::cli_types::PhaseAction;

pub(crate) fn run_phase(
    tracker: &mut Tracker<FileStore>,
    action: PhaseAction,
) -> Result<(), CliError> {
    let before = tracker.state().project_phase_completed;

    let changed = match action {
        PhaseAction::Complete => tracker.complete_phase()?,
        PhaseAction::Undo => tracker.undo_phase()?,
        PhaseAction::Set { phase } => tracker.advance_phase(phase)?,
    };

    let status = tracker.project_status();
    if !changed {
        log::info!(
            "{}",
            format!(
                "No change: {}/{} phases completed.",
                status.completed, status.total
            )
            .if_supports_color(Stdout, |t| t.dimmed()),
        );
        return Ok(());
    }

    log::info!(
        "{} Project phases completed: {} -> {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        before,
        status.completed.if_supports_color(Stdout, |t| t.bold()),
    );
    match status.current_goal {
        Some(phase) => log::info!("  Current goal: Phase {}: {}", phase.id, phase.name),
        None => log::info!(
            "  {}",
            "All phases complete!".if_supports_color(Stdout, |t| t.green()),
        ),
    }

    Ok(())
}
