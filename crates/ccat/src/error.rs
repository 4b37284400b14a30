use std::io;

use ccat_highlight::HighlightError;

/// Anything that stops `ccat` before every file has been written.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{path}: {source}")]
    Read { path: String, source: io::Error },

    #[error("{path}: size is greater than {limit} bytes")]
    TooLarge { path: String, limit: u64 },

    #[error("unknown color code `{name}`; expected one of the token kinds listed by --palette")]
    BadColorCode { name: String },

    #[error(transparent)]
    Highlight(#[from] HighlightError),

    #[error("failed to serialize document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
}

impl CliError {
    /// The reader of our output went away (`ccat file | head`).
    pub fn is_broken_pipe(&self) -> bool {
        let kind = match self {
            CliError::Write(e) | CliError::Highlight(HighlightError::Write(e)) => Some(e.kind()),
            CliError::Json(e) => e.io_error_kind(),
            _ => None,
        };
        kind == Some(io::ErrorKind::BrokenPipe)
    }
}
