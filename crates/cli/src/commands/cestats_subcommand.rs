use clap::Subcommand;

use super::{BucketCliArgs, EncodeCliArgs};

#[derive(Debug, Subcommand)]
pub enum CestatsSubcommand {
    #[command(
        name = "encode",
        long_about = "Encode every path of a stats file into StatsPath documents, written as a JSON array."
    )]
    Encode(EncodeCliArgs),

    #[command(
        name = "bucket",
        long_about = "Encode a single histogram bucket into a StatsBucket document."
    )]
    Bucket(BucketCliArgs),
}
