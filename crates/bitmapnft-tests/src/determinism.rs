//! Determinism testing for bitmapnft.
//!
//! Runs a render function several times and compares every output
//! byte-by-byte against the first.
//!
//! # Example
//!
//! ```
//! use bitmapnft_tests::{default_renderer, verify_determinism};
//!
//! let renderer = default_renderer();
//! let result = verify_determinism(|| renderer.get_svg(1).unwrap(), 3);
//! result.assert_deterministic();
//! ```

use std::fmt;

/// Result of a determinism verification.
#[derive(Debug, Clone)]
pub struct DeterminismResult {
    /// Whether all runs produced identical output.
    pub is_deterministic: bool,
    /// Number of runs performed.
    pub runs: usize,
    /// Size of the reference output in bytes.
    pub output_size: usize,
    /// BLAKE3 hash of the reference output.
    pub hash: String,
    /// If non-deterministic, the first difference found.
    pub diff_info: Option<DiffInfo>,
}

/// The first byte difference found between two runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffInfo {
    /// Byte offset of the difference.
    pub offset: usize,
    /// Byte from the reference run, if it extends that far.
    pub expected: Option<u8>,
    /// Byte from the differing run, if it extends that far.
    pub actual: Option<u8>,
    /// Which run (0-indexed) differed.
    pub run_index: usize,
}

impl fmt::Display for DiffInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |b: Option<u8>| match b {
            Some(b) => format!("0x{:02X}", b),
            None => "<end>".to_string(),
        };
        write!(
            f,
            "Difference at byte {}: expected {}, got {} (run {})",
            self.offset,
            show(self.expected),
            show(self.actual),
            self.run_index
        )
    }
}

impl DeterminismResult {
    /// Panic with a detailed message if not deterministic.
    pub fn assert_deterministic(&self) {
        if let Some(diff) = &self.diff_info {
            panic!(
                "Non-deterministic output detected!\n\
                 Runs: {}\n\
                 Output size: {} bytes\n\
                 Hash: {}\n\
                 {}",
                self.runs, self.output_size, self.hash, diff
            );
        }
    }
}

/// Run `render_fn` `runs` times and verify all outputs are identical.
///
/// # Panics
/// If `runs < 2`.
pub fn verify_determinism<F, O>(render_fn: F, runs: usize) -> DeterminismResult
where
    F: Fn() -> O,
    O: AsRef<[u8]>,
{
    assert!(runs >= 2, "Must run at least 2 times to verify determinism");

    let reference = render_fn();
    let reference = reference.as_ref();
    let hash = compute_hash(reference);

    for run_index in 1..runs {
        let output = render_fn();
        if let Some(diff) = first_difference(reference, output.as_ref(), run_index) {
            return DeterminismResult {
                is_deterministic: false,
                runs,
                output_size: reference.len(),
                hash,
                diff_info: Some(diff),
            };
        }
    }

    DeterminismResult {
        is_deterministic: true,
        runs,
        output_size: reference.len(),
        hash,
        diff_info: None,
    }
}

fn first_difference(expected: &[u8], actual: &[u8], run_index: usize) -> Option<DiffInfo> {
    let len = expected.len().max(actual.len());
    (0..len)
        .find(|&i| expected.get(i) != actual.get(i))
        .map(|offset| DiffInfo {
            offset,
            expected: expected.get(offset).copied(),
            actual: actual.get(offset).copied(),
            run_index,
        })
}

/// Compute the BLAKE3 hash of data.
pub fn compute_hash(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}
