//! dextrack CLI
//!
//! Browse the national dex from the command line and track which entries
//! you own.

mod app;
mod cli_types;
mod commands;
mod error;
mod spinner;

use std::io::Write;

use clap::Parser;
use log::LevelFilter;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use dextrack_lib::Settings;

use app::App;
use cli_types::{CacheAction, Cli, Commands, ConfigAction};
use error::CliError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    if let Err(e) = run(cli) {
        eprintln!(
            "{} {}",
            "\u{2718}".if_supports_color(Stderr, |t| t.red()),
            e.if_supports_color(Stderr, |t| t.red()),
        );
        std::process::exit(1);
    }
}

/// Bare messages by default; `--verbose` adds timestamps and levels.
/// `RUST_LOG` is applied last and wins.
fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .filter_module("reqwest", LevelFilter::Warn)
        .filter_module("hyper_util", LevelFilter::Warn)
        .filter_module("rustls", LevelFilter::Warn)
        .target(env_logger::Target::Stdout);
    if verbose {
        builder.format_timestamp_millis().format_target(false);
    } else {
        builder.format(|buf, record| writeln!(buf, "{}", record.args()));
    }
    builder.parse_default_env();

    if let Err(e) = builder.try_init() {
        eprintln!("Logger already initialized: {e}");
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut settings = Settings::load();
    if let Some(dir) = cli.data_dir {
        settings.storage.data_dir = Some(dir);
    }

    // Config commands never touch the network or the data directory.
    if let Commands::Config { action } = &cli.command {
        return match action {
            ConfigAction::Show => commands::config::run_config_show(&settings),
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
        };
    }

    let app = App::open(settings, cli.quiet)?;
    match cli.command {
        Commands::Show { entry, forms } => commands::show::run_show(&app, &entry, forms),
        Commands::Generation {
            generation,
            filter,
            sort,
            kind,
        } => commands::browse::run_generation(&app, generation.as_deref(), filter, sort, kind),
        Commands::Search { query } => commands::browse::run_search(&app, &query),
        Commands::Own { entry } => commands::collection::run_own(&app, &entry),
        Commands::Fav { entry } => commands::collection::run_fav(&app, &entry),
        Commands::Stats => {
            commands::collection::run_stats(&app);
            Ok(())
        }
        Commands::Recent => commands::collection::run_recent(&app),
        Commands::Forms { entry } => commands::show::run_forms(&app, &entry),
        Commands::Cache { action } => match action {
            CacheAction::Info => commands::cache::run_cache_info(&app),
            CacheAction::Clear => commands::cache::run_cache_clear(&app),
        },
        Commands::Config { .. } => Ok(()),
    }
}
