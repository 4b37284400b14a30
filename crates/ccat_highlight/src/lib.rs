//! Language-agnostic syntax highlighting.
//!
//! Tokens from [`ccat_lexer_core`] are classified into [`Kind`]s by lexical
//! shape alone, resolved to a style through a [`StyleConfig`], and handed to
//! one of three emission drivers:
//!
//! - [`print`]: inline styled output ([`AnsiPrinter`], [`HtmlPrinter`],
//!   [`HtmlColorPrinter`]) written straight to a sink
//! - [`annotate`]: non-overlapping [`Annotation`] spans over the original
//!   buffer
//! - [`build_document`]: a line-oriented [`SourceDocument`]
//!
//! ```text
//! Scanner → Classifier → StyleConfig → Printer | Annotator | DocumentBuilder
//! ```
//!
//! No driver ever fails on malformed input. The only errors are sink write
//! failures and annotator rejections, both reported as [`HighlightError`].

mod annotate;
mod attr;
mod classify;
mod config;
mod document;
mod error;
mod keywords;
mod kind;
mod printer;

pub mod ansi;
pub mod html;

pub use annotate::{annotate, annotate_with, render_annotations, Annotation, Annotator, HtmlAnnotator};
pub use classify::{token_kind, Classifier};
pub use config::StyleConfig;
pub use document::{
    build_document, build_document_with, DocumentBuilder, Line, LineEntry, SourceDocument,
    TokenRecord,
};
pub use error::HighlightError;
pub use keywords::Keywords;
pub use kind::{Kind, UnknownKind};
pub use printer::{
    as_ansi, as_html, print, print_with, AnsiPrinter, HtmlColorPrinter, HtmlPrinter, Printer,
};
