use cestats_core::make_stats_bucket;
use clap::Args;

use crate::{
    commands::Result,
    util::{render_json, write_output},
};

#[derive(Debug, Clone, Args)]
pub struct BucketCliArgs {
    #[arg(allow_negative_numbers = true)]
    pub boundary_count: f64,
    #[arg(allow_negative_numbers = true)]
    pub range_count: f64,
    #[arg(allow_negative_numbers = true)]
    pub range_distincts: f64,
    #[arg(allow_negative_numbers = true)]
    pub cumulative_count: f64,
    #[arg(allow_negative_numbers = true)]
    pub cumulative_distincts: f64,

    /// Pretty-print the JSON output.
    #[arg(short, long)]
    pub pretty: bool,
}

fn render_bucket(args: &BucketCliArgs) -> Result<String> {
    let bucket = make_stats_bucket(
        args.boundary_count,
        args.range_count,
        args.range_distincts,
        args.cumulative_count,
        args.cumulative_distincts,
    );
    render_json(&bucket, args.pretty)
}

/// Print a single encoded bucket to stdout.
pub fn bucket(args: BucketCliArgs) -> Result<()> {
    let rendered = render_bucket(&args)?;
    write_output(&rendered, None)
}
