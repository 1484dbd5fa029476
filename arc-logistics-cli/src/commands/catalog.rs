use std::path::PathBuf;

use arc_logistics_lib::catalog::{
    Catalog, CatalogError, ItemRequirement, builtin_catalog, load_catalog,
};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::render::{icon_text, paint};

/// Print every phase and workshop level with its requirements.
pub(crate) fn run_catalog_show(catalog: &Catalog) {
    log::info!("{}", "Project Phases".if_supports_color(Stdout, |t| t.bold()));
    for phase in &catalog.phases {
        log::info!(
            "  {} {}",
            format!("Phase {}:", phase.id).if_supports_color(Stdout, |t| t.cyan()),
            phase.name,
        );
        print_requirements(&phase.requirements);
    }
    crate::log_blank();

    log::info!("{}", "Workshops".if_supports_color(Stdout, |t| t.bold()));
    for workshop in &catalog.workshops {
        log::info!(
            "  {} {} max Lvl {}",
            workshop.name.if_supports_color(Stdout, |t| t.cyan()),
            format!("({})", workshop.id).if_supports_color(Stdout, |t| t.dimmed()),
            workshop.max_level,
        );
        for level in &workshop.levels {
            log::info!("    L{}", level.level);
            print_requirements(&level.requirements);
        }
    }
    crate::log_blank();

    log::info!(
        "{} phases, {} workshops, {} requirement rows",
        catalog.phases.len(),
        catalog.workshops.len(),
        catalog.requirement_count(),
    );
}

fn print_requirements(requirements: &[ItemRequirement]) {
    if requirements.is_empty() {
        log::info!(
            "      {}",
            "(no requirements)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    for req in requirements {
        log::info!(
            "      {} {} x{}",
            icon_text(req.icon.as_deref()),
            paint(&req.name, req.rarity),
            req.count,
        );
    }
}

/// Load a catalog file and report whether it is structurally sound.
pub(crate) fn run_catalog_validate(path: Option<PathBuf>) -> Result<(), CliError> {
    let loaded = match &path {
        Some(p) => load_catalog(p),
        None => builtin_catalog(),
    };

    let catalog = match loaded {
        Ok(catalog) => catalog,
        Err(CatalogError::Invalid { path, problems }) => {
            log::warn!("Problems in {}:", path);
            for problem in &problems {
                log::warn!(
                    "  {} {}",
                    "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                    problem
                );
            }
            return Err(CliError::other(format!(
                "{} catalog problem(s) found",
                problems.len()
            )));
        }
        Err(e) => return Err(e.into()),
    };

    let origin = path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "Built-in catalog".to_string());
    log::info!(
        "{} {} is valid",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        origin.if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!(
        "  {} phases, {} workshops, {} requirement rows",
        catalog.phases.len(),
        catalog.workshops.len(),
        catalog.requirement_count(),
    );

    Ok(())
}
