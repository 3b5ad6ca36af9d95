//! Handles all user-facing output for the CLI.
//!
//! Decoded members go to stdout, colored section headers mark translation
//! units, and errors are rendered on stderr through miette.

use std::io::{self, Write};
use std::path::PathBuf;

use miette::Report;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::ast::{AstId, TransUnit};
use crate::cli::args::OutputFormat;
use crate::errors::{Result, TranslateError};
use crate::locations::{Location, Locations};

// ============================================================================
// CORE OUTPUT FUNCTIONS
// ============================================================================

/// Prints every translation unit in the requested format.
pub fn print_units(units: &[TransUnit], format: OutputFormat) -> Result<()> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    match format {
        OutputFormat::Debug => {
            for (index, unit) in units.iter().enumerate() {
                header(&mut stdout, &format!("--- Unit {}: {} members ---", index, unit.members.len()))
                    .map_err(stdout_error)?;
                for member in &unit.members {
                    writeln!(stdout, "{member:#?}").map_err(stdout_error)?;
                }
            }
        }
        OutputFormat::Json => {
            let text = serde_json::to_string_pretty(units)
                .map_err(|e| crate::internal!("could not serialize members: {}", e))?;
            writeln!(stdout, "{text}").map_err(stdout_error)?;
        }
    }
    Ok(())
}

/// Prints the location of each top-level member.
pub fn print_member_locations(units: &[TransUnit], locations: &Locations) -> Result<()> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    header(&mut stdout, "--- Locations ---").map_err(stdout_error)?;
    for member in units.iter().flat_map(|unit| &unit.members) {
        let node = &member.node.value;
        let loc = locations.get(node.id())?;
        writeln!(stdout, "{} {}", node.name(), located(node.id(), loc)).map_err(stdout_error)?;
    }
    Ok(())
}

/// Prints the location of each requested id.
pub fn print_locations(ids: &[AstId], locations: &Locations) -> Result<()> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    for &id in ids {
        let loc = locations.get(id)?;
        writeln!(stdout, "{}", located(id, loc)).map_err(stdout_error)?;
    }
    Ok(())
}

/// Renders an error with its diagnostic code and help on stderr.
pub fn print_error(error: TranslateError) {
    let report = Report::new(error);
    eprintln!("{report:?}");
}

// ============================================================================
// PRIVATE HELPERS
// ============================================================================

fn located(id: AstId, loc: &Location) -> String {
    let mut line = format!("{} → {}:{}", id, loc.file.display(), loc.pos);
    if let Some(including) = &loc.including_loc {
        line.push_str(&format!(" (included at {})", including));
    }
    line
}

fn header(stdout: &mut StandardStream, text: &str) -> io::Result<()> {
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true))?;
    writeln!(stdout, "{text}")?;
    stdout.reset()
}

fn stdout_error(source: io::Error) -> TranslateError {
    TranslateError::Io {
        path: PathBuf::from("<stdout>"),
        source,
    }
}
