//! Image command implementation
//!
//! Prints or writes the SVG for one token.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use bitmapnft_model::TokenId;

use super::emit;
use crate::session::Session;

/// Run the image command.
///
/// # Arguments
/// * `session` - Renderer to query
/// * `token_id` - Token to render
/// * `out` - Output file (default: stdout)
pub fn run(session: &Session, token_id: TokenId, out: Option<&Path>) -> Result<ExitCode> {
    let svg = session.get_svg(token_id)?;
    emit(out, &svg)?;
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session;

    #[test]
    fn test_writes_svg_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("1.svg");
        let session = session::open(None, &[]).unwrap();

        run(&session, 1, Some(&path)).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, session.renderer().get_svg(1).unwrap());
    }

    #[test]
    fn test_unminted_token_fails() {
        let session = session::open(None, &[7]).unwrap();
        let err = run(&session, 8, None).unwrap_err();
        assert_eq!(err.to_string(), "token 8 is not registered");
    }
}
