use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Core(#[from] cestats_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("toml serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("invalid stats file: {0}")]
    StatsFile(#[from] StatsFileError),
}

#[derive(Debug, Error, PartialEq)]
pub enum StatsFileError {
    #[error("stats file must define at least one [[path]]")]
    NoPaths,

    #[error("path #{index} has an empty identifier")]
    PathEmpty { index: usize },

    #[error("path '{path}' is defined more than once")]
    DuplicatePath { path: String },
}
