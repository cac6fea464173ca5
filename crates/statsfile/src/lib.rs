mod error;
mod stats_file;
mod types;

pub use error::{Error, StatsFileError};
pub use stats_file::StatsFile;
pub use types::{ArrayHistogramDefinition, HistogramDefinition, PathDefinition};

pub type Result<T> = std::result::Result<T, Error>;
