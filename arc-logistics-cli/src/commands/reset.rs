use arc_logistics_lib::{FileStore, PROGRESS_KEY, Tracker};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

/// Return all progress to the starting state.
pub(crate) fn run_reset(tracker: &mut Tracker<FileStore>, confirm: bool) -> Result<(), CliError> {
    let path = tracker.store().backend().path_for(PROGRESS_KEY);

    if !confirm {
        log::warn!(
            "This will reset all project and workshop progress saved at:\n  {}",
            path.display(),
        );
        log::info!("Re-run with --confirm to proceed:");
        log::info!("  arc-logistics reset --confirm");
        return Ok(());
    }

    let changed = tracker.reset_progress()?;

    log::info!(
        "{}",
        "Progress reset.".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Path: {}", path.display());
    if !changed {
        log::info!(
            "  {}",
            "Progress was already at the starting state.".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    Ok(())
}
