//! CLI command implementations

pub mod batch;
pub mod image;
pub mod inspect;
pub mod metadata;
pub mod verify;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

/// Write `contents` to `out`, or to stdout when no path is given.
pub(crate) fn emit(out: Option<&Path>, contents: &str) -> Result<()> {
    match out {
        Some(path) => {
            fs::write(path, contents)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            eprintln!("{} {}", "Wrote".green().bold(), path.display());
        }
        None => println!("{}", contents),
    }
    Ok(())
}
