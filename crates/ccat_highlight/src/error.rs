//! Errors surfaced by the emission drivers.

use std::io;

/// Error returned by [`print`](crate::print) and [`annotate`](crate::annotate).
///
/// Lexical problems never appear here; the scanner absorbs them. The only
/// failures are a sink that refuses a write and an annotator that rejects a
/// token.
#[derive(Debug, thiserror::Error)]
pub enum HighlightError {
    #[error("failed to write highlighted output: {0}")]
    Write(#[from] io::Error),

    #[error("annotation failed at byte {offset}: {reason}")]
    Annotate { offset: u32, reason: String },
}
