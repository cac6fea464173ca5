use nu_ansi_term::{AnsiGenericString, Style};
use serde::Serialize;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use crate::commands::Result;

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Logs go to stderr so encoded documents on stdout stay machine-readable.
/// An explicit level wins over `RUST_LOG`.
pub fn init_tracing(log_level: Option<&str>) {
    let filter = match log_level {
        Some(level) => EnvFilter::new(level.to_lowercase()),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL)),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok(); // already initialized
}

pub fn bold<'a>(msg: impl AsRef<str> + 'a) -> AnsiGenericString<'a, str> {
    Style::new().bold().paint(msg.as_ref().to_owned())
}

pub fn render_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(rendered)
}

/// Writes `contents` to `out`, or to stdout when no path is given.
pub fn write_output(contents: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => std::fs::write(path, format!("{contents}\n"))?,
        None => println!("{contents}"),
    }
    Ok(())
}
