//! Row-wise run-length encoding.
//!
//! Invariants for every encoded row:
//! - run lengths sum to the row width
//! - adjacent runs never share a color index
//! - expanding the runs reproduces the row exactly

use serde::Serialize;

use crate::grid::Grid;

/// A maximal horizontal span of one palette index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Run {
    pub color: u8,
    pub length: u32,
}

impl Run {
    pub fn new(color: u8, length: u32) -> Self {
        Self { color, length }
    }
}

/// Encode one row.
pub fn encode_row(row: &[u8]) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();

    for &color in row {
        match runs.last_mut() {
            Some(run) if run.color == color => run.length += 1,
            _ => runs.push(Run::new(color, 1)),
        }
    }

    runs
}

/// Encode every row of a grid, top to bottom.
pub fn encode_runs(grid: &Grid) -> Vec<Vec<Run>> {
    grid.rows().map(encode_row).collect()
}

/// Expand encoded rows back into palette indices.
pub fn expand_runs(rows: &[Vec<Run>]) -> Vec<Vec<u8>> {
    rows.iter()
        .map(|runs| {
            runs.iter()
                .flat_map(|run| std::iter::repeat(run.color).take(run.length as usize))
                .collect()
        })
        .collect()
}

/// Total number of runs across all rows.
pub fn total_runs(rows: &[Vec<Run>]) -> usize {
    rows.iter().map(Vec::len).sum()
}

/// Length of the longest run in any row.
pub fn longest_run(rows: &[Vec<Run>]) -> u32 {
    rows.iter()
        .flatten()
        .map(|run| run.length)
        .max()
        .unwrap_or(0)
}
