use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("stats file error")]
    #[diagnostic(
        code(cestats::stats_file),
        help("each [[path]] needs `path` and `documents`; a histogram needs both `buckets` and `bounds`")
    )]
    StatsFile(#[from] cestats_statsfile::Error),

    #[error("failed to render json")]
    #[diagnostic(code(cestats::json))]
    Json(#[from] serde_json::Error),

    #[error("io error")]
    #[diagnostic(code(cestats::io))]
    Io(#[from] std::io::Error),
}
