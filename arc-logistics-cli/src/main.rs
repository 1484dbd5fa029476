mod cli_types;
mod commands;
mod error;
mod logger;
mod render;

use arc_logistics_lib::{FileStore, Tracker};
use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use cli_types::*;
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();
    logger::init(cli.quiet, cli.verbose, cli.logfile.as_deref());

    if let Err(e) = run(cli) {
        log::error!("{} {}", "\u{2718}".if_supports_color(Stderr, |t| t.red()), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let Cli {
        catalog,
        data_dir,
        command,
        ..
    } = cli;

    // Only commands that read or change progress open the progress file.
    let open_tracker = || -> Result<Tracker<FileStore>, CliError> {
        let catalog = commands::resolve_catalog(catalog.clone())?;
        Ok(commands::open_tracker(catalog, data_dir.as_deref()))
    };

    match command {
        Commands::Status => commands::status::run_status(&open_tracker()?),
        Commands::List { rarity } => commands::list::run_list(&open_tracker()?, rarity),
        Commands::Search { query } => {
            commands::search::run_search(&open_tracker()?, &query.join(" "))
        }
        Commands::Phase { action } => commands::phase::run_phase(&mut open_tracker()?, action),
        Commands::Workshop { action } => {
            commands::workshop::run_workshop(&mut open_tracker()?, action)
        }
        Commands::Reset { confirm } => commands::reset::run_reset(&mut open_tracker()?, confirm),
        Commands::Catalog { action } => match action {
            CatalogAction::Show => {
                let catalog = commands::resolve_catalog(catalog.clone())?;
                commands::catalog::run_catalog_show(&catalog);
                Ok(())
            }
            CatalogAction::Validate { path } => {
                commands::catalog::run_catalog_validate(path.or_else(|| catalog.clone()))
            }
        },
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                commands::config::run_config_show(catalog.clone(), data_dir.clone())
            }
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
            ConfigAction::SetCatalog { path } => commands::config::run_set_catalog(&path),
            ConfigAction::ClearCatalog => commands::config::run_clear_catalog(),
        },
    }
}

/// Print an empty line through the logger.
pub(crate) fn log_blank() {
    log::info!("");
}
