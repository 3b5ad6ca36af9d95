//! Command-line arguments for `fpp-model`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::translate::TranslateOptions;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "fpp-model",
    version,
    about = "Rebuild typed FPP syntax trees from fpp-to-json output."
)]
pub struct FppModelArgs {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: ArgsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ArgsCommand {
    /// Translate an AST file and print its members.
    Translate {
        /// The AST JSON file written by fpp-to-json.
        #[arg(required = true)]
        ast: PathBuf,
        /// The location map written alongside the AST.
        #[arg(short, long)]
        locations: Option<PathBuf>,
        /// How to print the decoded members.
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Debug)]
        format: OutputFormat,
        /// Decode everything on the calling thread.
        #[arg(long)]
        sequential: bool,
        /// Smallest list decoded in parallel.
        #[arg(long, default_value_t = TranslateOptions::default().parallel_threshold)]
        parallel_threshold: usize,
    },
    /// Print the source location of node ids.
    Locate {
        /// The location map file.
        #[arg(required = true)]
        locations: PathBuf,
        /// Node ids to look up.
        #[arg(required = true)]
        ids: Vec<u64>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Rust debug form.
    Debug,
    /// Pretty-printed JSON.
    Json,
}

impl ArgsCommand {
    /// Translation options selected by the flags of `translate`.
    pub fn translate_options(sequential: bool, parallel_threshold: usize) -> TranslateOptions {
        TranslateOptions {
            parallel: !sequential,
            parallel_threshold,
        }
    }
}

/// Default log filter for a `-v` count.
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
