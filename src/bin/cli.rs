//! i18n-sync CLI
//!
//! Local entry point for propagating and patching translation documents.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use i18n_sync::{
    error::Result,
    models::{Config, LocaleConfig},
    pipeline,
    storage::{LocalStorage, WriteOptions},
    utils::console,
};

/// i18n-sync - Translation Structure Propagator
#[derive(Parser, Debug)]
#[command(
    name = "i18n-sync",
    version,
    about = "Keep per-language translation files in the canonical shape"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: PathBuf,

    /// Path to console message templates
    #[arg(long, default_value = "locale.toml", global = true)]
    locale: PathBuf,

    /// Override the directory holding <lang>.json documents
    #[arg(long, global = true)]
    base_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress console status output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Propagate the canonical document's structure to every target language
    Propagate {
        /// Report what would change without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Write top-level sections from a patch file into each language
    Patch {
        /// JSON file mapping language codes to sections
        file: PathBuf,

        /// Create documents for languages that have none yet
        #[arg(long)]
        create_missing: bool,

        /// Report what would change without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Validate configuration
    Validate,

    /// Show document locations and which ones exist
    Info,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool, level: &str) {
    let level = if verbose { "debug" } else { level };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn run(cli: Cli, loaded: Result<Config>) -> Result<()> {
    let mut config = loaded?;
    if let Some(base_dir) = cli.base_dir {
        config.paths.base_dir = base_dir.display().to_string();
    }
    let locale = if cli.locale.exists() {
        LocaleConfig::load_or_default(&cli.locale)
    } else {
        LocaleConfig::default()
    };

    if !matches!(cli.command, Command::Validate) {
        config.validate()?;
    }

    log::debug!("Using documents in {}", config.paths.base_dir);
    let storage = LocalStorage::new(config.base_dir());

    match cli.command {
        Command::Propagate { dry_run } => {
            let options = WriteOptions {
                dry_run,
                ..WriteOptions::safe()
            };
            let report = pipeline::run_propagate(&config, &locale, &storage, &options)?;
            log::info!(
                "Propagation finished: {} language(s), {} failed",
                report.outcomes.len(),
                report.failure_count()
            );
        }

        Command::Patch {
            file,
            create_missing,
            dry_run,
        } => {
            let options = WriteOptions {
                dry_run,
                create_missing,
            };
            let report = pipeline::run_patch(&locale, &storage, &file, &options)?;
            log::info!(
                "Patch finished: {} language(s), {} failed",
                report.outcomes.len(),
                report.failure_count()
            );
        }

        Command::Validate => pipeline::run_validate(&config, &locale)?,

        Command::Info => pipeline::run_info(&config, &locale, &storage),
    }

    Ok(())
}

/// Main entry point for the CLI application.
fn main() -> ExitCode {
    let cli = Cli::parse();

    // The log level lives in the config file, so load it before logging starts.
    let loaded = Config::load_or_default(&cli.config);
    let level = match &loaded {
        Ok(config) => config.logging.level.clone(),
        Err(_) => "info".to_string(),
    };
    init_logging(cli.verbose, &level);
    console::set_quiet(cli.quiet);

    match run(cli, loaded) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            console::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
