//! Verify command implementation
//!
//! Renders each token in a range several times and checks that the SVG and
//! token URI fingerprints never change.

use std::process::ExitCode;

use anyhow::{bail, Result};
use bitmapnft_model::{canonical_hash, TokenId};
use colored::Colorize;

use crate::session::Session;

/// Fingerprint mismatch for one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub token_id: TokenId,
    pub run_index: usize,
    pub expected: String,
    pub actual: String,
}

/// Render `from..=to`, `runs` times each, and collect mismatches.
pub fn check_range(
    session: &Session,
    from: TokenId,
    to: TokenId,
    runs: usize,
) -> Result<Vec<Mismatch>> {
    if from > to {
        bail!("Invalid range: {} > {}", from, to);
    }
    if runs < 2 {
        bail!("Must run at least 2 times to verify determinism, got {}", runs);
    }

    let mut mismatches = Vec::new();
    for token_id in from..=to {
        let reference = fingerprint(session, token_id)?;
        for run_index in 1..runs {
            let actual = fingerprint(session, token_id)?;
            if actual != reference {
                mismatches.push(Mismatch {
                    token_id,
                    run_index,
                    expected: reference.clone(),
                    actual,
                });
            }
        }
    }
    Ok(mismatches)
}

/// BLAKE3 over the SVG followed by the token URI.
fn fingerprint(session: &Session, token_id: TokenId) -> Result<String> {
    let mut bytes = session.get_svg(token_id)?.into_bytes();
    bytes.extend_from_slice(session.token_uri(token_id)?.as_bytes());
    Ok(canonical_hash(&bytes))
}

/// Run the verify command.
///
/// # Returns
/// Exit code: 0 if every token is stable, 1 otherwise
pub fn run(session: &Session, from: TokenId, to: TokenId, runs: usize) -> Result<ExitCode> {
    println!("{} {}..={}", "Tokens:".cyan().bold(), from, to);
    println!("{} {}", "Runs per token:".cyan().bold(), runs);

    let mismatches = check_range(session, from, to, runs)?;

    if mismatches.is_empty() {
        println!("\n{} All tokens rendered identically", "PASSED".green().bold());
        return Ok(ExitCode::SUCCESS);
    }

    for m in &mismatches {
        println!(
            "  {} token {} run {}: expected {}, got {}",
            "FAIL".red().bold(),
            m.token_id,
            m.run_index,
            m.expected,
            m.actual
        );
    }
    println!(
        "\n{} {} non-deterministic render(s)",
        "FAILED".red().bold(),
        mismatches.len()
    );
    Ok(ExitCode::from(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session;

    #[test]
    fn test_range_is_stable() {
        let session = session::open(None, &[]).unwrap();
        assert!(check_range(&session, 0, 9, 3).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_arguments() {
        let session = session::open(None, &[]).unwrap();
        assert!(check_range(&session, 5, 4, 2).is_err());
        assert!(check_range(&session, 0, 1, 1).is_err());
    }

    #[test]
    fn test_unminted_token_in_range() {
        let session = session::open(None, &[1]).unwrap();
        assert!(check_range(&session, 1, 2, 2).is_err());
    }
}
