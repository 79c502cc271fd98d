//! Batch command implementation
//!
//! Writes `<id>.svg` and `<id>.json` for every token in a range.

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use bitmapnft_model::TokenId;
use colored::Colorize;

use crate::session::Session;

/// Write image and decoded metadata for `from..=to` into `out_dir`.
///
/// # Returns
/// Number of tokens written
pub fn write_range(session: &Session, from: TokenId, to: TokenId, out_dir: &Path) -> Result<u64> {
    if from > to {
        bail!("Invalid range: {} > {}", from, to);
    }

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    let mut written = 0u64;
    for token_id in from..=to {
        let svg_path = out_dir.join(format!("{}.svg", token_id));
        fs::write(&svg_path, session.get_svg(token_id)?)
            .with_context(|| format!("Failed to write {}", svg_path.display()))?;

        let json = serde_json::to_string_pretty(&session.get_metadata(token_id)?)
            .context("Failed to serialize metadata")?;
        let json_path = out_dir.join(format!("{}.json", token_id));
        fs::write(&json_path, json)
            .with_context(|| format!("Failed to write {}", json_path.display()))?;

        tracing::debug!(token_id, "wrote token files");
        written += 1;
    }
    Ok(written)
}

/// Run the batch command.
pub fn run(session: &Session, from: TokenId, to: TokenId, out_dir: &Path) -> Result<ExitCode> {
    let written = write_range(session, from, to, out_dir)?;
    println!(
        "{} {} token(s) to {}",
        "Wrote".green().bold(),
        written,
        out_dir.display()
    );
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session;
    use bitmapnft_model::MetadataDocument;

    #[test]
    fn test_writes_files() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        let session = session::open(None, &[]).unwrap();

        assert_eq!(write_range(&session, 3, 5, &out).unwrap(), 3);

        for id in 3..=5 {
            let svg = fs::read_to_string(out.join(format!("{}.svg", id))).unwrap();
            assert_eq!(svg, session.renderer().get_svg(id).unwrap());

            let json = fs::read_to_string(out.join(format!("{}.json", id))).unwrap();
            let doc: MetadataDocument = serde_json::from_str(&json).unwrap();
            assert_eq!(doc.decode_image().unwrap(), svg);
        }
    }

    #[test]
    fn test_rejects_reversed_range() {
        let dir = tempfile::tempdir().unwrap();
        let session = session::open(None, &[]).unwrap();
        assert!(write_range(&session, 2, 1, dir.path()).is_err());
    }
}
