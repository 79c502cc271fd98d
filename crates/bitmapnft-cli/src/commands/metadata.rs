//! Metadata command implementation
//!
//! Prints the token URI (`data:application/json;base64,...`) or, with
//! `--decoded`, the metadata document as pretty JSON.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use bitmapnft_model::TokenId;

use super::emit;
use crate::session::Session;

/// Run the metadata command.
///
/// # Arguments
/// * `session` - Renderer to query
/// * `token_id` - Token to describe
/// * `decoded` - Print JSON instead of the data URI
/// * `out` - Output file (default: stdout)
pub fn run(
    session: &Session,
    token_id: TokenId,
    decoded: bool,
    out: Option<&Path>,
) -> Result<ExitCode> {
    let contents = if decoded {
        let document = session.get_metadata(token_id)?;
        serde_json::to_string_pretty(&document).context("Failed to serialize metadata")?
    } else {
        session.token_uri(token_id)?
    };

    emit(out, &contents)?;
    Ok(ExitCode::SUCCESS)
}
