mod bucket;
mod cestats_subcommand;
mod encode;

use clap::Parser;

pub use bucket::{bucket, BucketCliArgs};
pub use cestats_subcommand::CestatsSubcommand;
pub use encode::{encode, EncodeCliArgs};

pub type Result<T> = std::result::Result<T, crate::error::CliError>;

#[derive(Parser, Debug)]
#[command(
    name = "cestats",
    version,
    about = "Encode cardinality-estimation statistics documents"
)]
pub struct CestatsCli {
    #[command(subcommand)]
    pub command: CestatsSubcommand,

    /// Log filter, e.g. `debug` or `cestats_core=trace`. Overrides RUST_LOG.
    #[arg(long, global = true, env = "CESTATS_LOG")]
    pub log_level: Option<String>,
}

impl CestatsCli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
