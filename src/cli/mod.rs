//! The fpp-model Command-Line Interface.
//!
//! Parses arguments, installs the log subscriber, and drives the location
//! loader and translator. Any error is rendered through miette and the
//! process exits with status 1.

use std::path::Path;
use std::process;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::ast::{AstId, AstSession};
use crate::cli::args::{ArgsCommand, FppModelArgs, OutputFormat};
use crate::errors::{Result, TranslateError};
use crate::locations::Locations;
use crate::translate::{translate_ast_json, TranslateOptions};

pub mod args;
pub mod output;

/// Environment variable holding a log filter; overrides `-v`.
pub const LOG_ENV: &str = "FPP_MODEL_LOG";

// ============================================================================
// MAIN ENTRY POINT
// ============================================================================

/// The main entry point for the CLI.
pub fn run() {
    let args = FppModelArgs::parse();
    init_logging(args.verbose);

    let result = match args.command {
        ArgsCommand::Translate {
            ast,
            locations,
            format,
            sequential,
            parallel_threshold,
        } => translate(
            &ast,
            locations.as_deref(),
            format,
            ArgsCommand::translate_options(sequential, parallel_threshold),
        ),
        ArgsCommand::Locate { locations, ids } => locate(&locations, &ids),
    };

    if let Err(e) = result {
        output::print_error(e);
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(args::log_level(verbose)));
    // a subscriber may already be installed when run from tests
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

// ============================================================================
// COMMANDS
// ============================================================================

fn translate(
    ast: &Path,
    locations: Option<&Path>,
    format: OutputFormat,
    options: TranslateOptions,
) -> Result<()> {
    for path in std::iter::once(ast).chain(locations) {
        ensure_exists(path)?;
    }

    // locations are complete before any node is decoded
    let locations = locations.map(Locations::load).transpose()?;
    let session = AstSession::new();
    let units = translate_ast_json(ast, &session, options)?;
    info!(
        units = units.len(),
        parallel = options.parallel,
        "printing translation"
    );

    output::print_units(&units, format)?;
    if let Some(locations) = &locations {
        output::print_member_locations(&units, locations)?;
    }
    Ok(())
}

fn locate(path: &Path, ids: &[AstId]) -> Result<()> {
    let locations = Locations::load(path)?;
    output::print_locations(ids, &locations)
}

fn ensure_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(TranslateError::FileNotFound {
            path: path.to_path_buf(),
        })
    }
}
