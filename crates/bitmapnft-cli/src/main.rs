//! bitmapnft CLI - render deterministic pixel-art token images and metadata
//!
//! Every command is a pure query: the same token id and configuration always
//! produce byte-identical output.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};

use bitmapnft_cli::{commands, logging, session};
use bitmapnft_model::TokenId;

/// bitmapnft - Deterministic Pixel-Art Token Renderer
#[derive(Parser)]
#[command(name = "bitmapnft")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// JSON render configuration (default: built-in constants)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Only answer for these token ids (comma-separated); default is every id
    #[arg(long, global = true, value_delimiter = ',')]
    minted: Vec<TokenId>,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print or write the SVG image for a token
    Image {
        /// Token id
        id: TokenId,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Print or write the metadata document for a token
    Metadata {
        /// Token id
        id: TokenId,

        /// Print pretty JSON instead of the base64 data URI
        #[arg(long)]
        decoded: bool,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Show seed, grid, runs, and size figures for a token
    Inspect {
        /// Token id
        id: TokenId,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Render a range of tokens repeatedly and check the output never changes
    Verify {
        /// First token id (inclusive)
        from: TokenId,

        /// Last token id (inclusive)
        to: TokenId,

        /// Renders per token
        #[arg(long, default_value_t = 3)]
        runs: usize,
    },

    /// Write <id>.svg and <id>.json for a range of tokens
    Batch {
        /// First token id (inclusive)
        from: TokenId,

        /// Last token id (inclusive)
        to: TokenId,

        /// Output directory
        #[arg(long)]
        out_dir: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = session::open(cli.config.as_deref(), &cli.minted).and_then(|session| {
        match cli.command {
            Commands::Image { id, out } => commands::image::run(&session, id, out.as_deref()),
            Commands::Metadata { id, decoded, out } => {
                commands::metadata::run(&session, id, decoded, out.as_deref())
            }
            Commands::Inspect { id, json } => commands::inspect::run(&session, id, json),
            Commands::Verify { from, to, runs } => commands::verify::run(&session, from, to, runs),
            Commands::Batch { from, to, out_dir } => {
                commands::batch::run(&session, from, to, &out_dir)
            }
        }
    });

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
