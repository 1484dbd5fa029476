//! Progress summaries for display: current project goal and workshop levels.

use arc_logistics_catalog::{Catalog, ProjectPhase, Workshop, WorkshopLevel};

use crate::progress::ProgressState;

/// Where the player stands on the project track.
#[derive(Debug, Clone, Copy)]
pub struct ProjectStatus<'a> {
    pub completed: u32,
    pub total: u32,
    /// Next phase to work on, or `None` once every phase is done.
    pub current_goal: Option<&'a ProjectPhase>,
}

impl ProjectStatus<'_> {
    pub fn is_complete(&self) -> bool {
        self.current_goal.is_none()
    }

    /// Fraction of phases completed, in `0.0..=1.0`.
    pub fn completion_ratio(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            f64::from(self.completed) / f64::from(self.total)
        }
    }
}

pub fn project_status<'a>(catalog: &'a Catalog, progress: &ProgressState) -> ProjectStatus<'a> {
    let completed = progress.project_phase_completed.min(catalog.phase_count());
    ProjectStatus {
        completed,
        total: catalog.phase_count(),
        current_goal: catalog.phases.get(completed as usize),
    }
}

/// One workshop's current level and what comes next.
#[derive(Debug, Clone, Copy)]
pub struct WorkshopStatus<'a> {
    pub workshop: &'a Workshop,
    pub current_level: u32,
}

impl<'a> WorkshopStatus<'a> {
    pub fn is_maxed(&self) -> bool {
        self.current_level >= self.workshop.max_level
    }

    /// Requirements for the next upgrade, if the catalog defines one.
    pub fn next_level(&self) -> Option<&'a WorkshopLevel> {
        self.workshop.level(self.current_level.saturating_add(1))
    }
}

/// Status for every workshop, in catalog order.
pub fn workshop_statuses<'a>(
    catalog: &'a Catalog,
    progress: &ProgressState,
) -> Vec<WorkshopStatus<'a>> {
    catalog
        .workshops
        .iter()
        .map(|workshop| WorkshopStatus {
            workshop,
            current_level: progress.workshop_level(&workshop.id),
        })
        .collect()
}
