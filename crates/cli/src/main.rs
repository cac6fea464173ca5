mod commands;
mod error;
mod util;

use commands::{CestatsCli, CestatsSubcommand};

fn main() -> miette::Result<()> {
    let args = CestatsCli::parse_args();
    util::init_tracing(args.log_level.as_deref());

    match args.command {
        CestatsSubcommand::Encode(args) => commands::encode(args)?,
        CestatsSubcommand::Bucket(args) => commands::bucket(args)?,
    }
    Ok(())
}
