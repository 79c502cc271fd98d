//! Inspect command implementation
//!
//! Shows every intermediate of one render: seed, grid, runs, and size
//! figures.

use std::process::ExitCode;

use anyhow::{Context, Result};
use bitmapnft_backend_svg::{RenderedToken, Run};
use bitmapnft_model::TokenId;
use colored::Colorize;

use crate::session::Session;

/// Run the inspect command.
///
/// # Arguments
/// * `session` - Renderer to query
/// * `token_id` - Token to inspect
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(session: &Session, token_id: TokenId, json_output: bool) -> Result<ExitCode> {
    let rendered = session.render_token(token_id)?;

    if json_output {
        let json = serde_json::to_string_pretty(&rendered).context("Failed to serialize render")?;
        println!("{}", json);
    } else {
        print_human(&rendered);
    }

    Ok(ExitCode::SUCCESS)
}

fn print_human(rendered: &RenderedToken) {
    println!("{} {}", "Token:".cyan().bold(), rendered.token_id);
    println!("{} {:#018x}", "Seed:".cyan().bold(), rendered.seed);
    println!(
        "{} {}x{}",
        "Grid:".cyan().bold(),
        rendered.grid.width(),
        rendered.grid.height()
    );

    println!();
    for (row, runs) in rendered.grid.rows().zip(&rendered.runs) {
        let cells: String = row.iter().map(|&c| cell_char(c)).collect();
        println!("  {}  {}", cells, format_runs(runs).dimmed());
    }

    let stats = &rendered.stats;
    println!();
    println!("{} {}", "Runs:".dimmed(), stats.run_count);
    println!("{} {}", "Longest run:".dimmed(), stats.longest_run);
    println!("{} {}", "SVG bytes:".dimmed(), stats.svg_bytes);
    if stats.over_budget {
        println!("{} run count exceeds the soft budget", "WARNING".yellow().bold());
    }
}

/// One character per palette index: `0-9`, then `a-z`, then `+`.
fn cell_char(index: u8) -> char {
    char::from_digit(index as u32, 36).unwrap_or('+')
}

/// `color x length` pairs, e.g. `0x2 1x1`.
fn format_runs(runs: &[Run]) -> String {
    runs.iter()
        .map(|run| format!("{}x{}", run.color, run.length))
        .collect::<Vec<_>>()
        .join(" ")
}
