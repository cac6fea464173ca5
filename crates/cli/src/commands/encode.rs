use cestats_statsfile::StatsFile;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

use crate::{
    commands::Result,
    util::{bold, render_json, write_output},
};

#[derive(Debug, Clone, Args)]
pub struct EncodeCliArgs {
    /// Path to the TOML stats file.
    pub stats_file: PathBuf,

    /// Write the documents to this file instead of stdout.
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(short, long)]
    pub pretty: bool,
}

/// Encode all paths in a stats file.
pub fn encode(args: EncodeCliArgs) -> Result<()> {
    let stats_file = StatsFile::from_file(&args.stats_file)?;
    let docs = stats_file.encode()?;
    let rendered = render_json(&docs, args.pretty)?;
    write_output(&rendered, args.out.as_deref())?;
    if let Some(out) = &args.out {
        info!(
            "wrote {} document(s) to {}",
            docs.len(),
            bold(out.display().to_string())
        );
    }
    Ok(())
}
