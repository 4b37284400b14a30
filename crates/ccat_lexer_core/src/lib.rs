//! Low-level, language-agnostic tokenizer for ccat.
//!
//! The scanner knows nothing about any particular programming language. It
//! recognises lexical *shapes* only: identifiers, numbers, quoted literals,
//! raw strings, comments, and single characters. Every input byte belongs to
//! exactly one token, whitespace and comments included.
//!
//! # Layers
//!
//! ```text
//! bytes → SourceBuffer → Cursor → RawScanner → (RawTag, len) → Scanner → Token
//! ```
//!
//! - [`SourceBuffer`]: owned, sentinel-terminated copy of the input
//! - [`Cursor`]: byte-level navigation with sentinel EOF detection
//! - [`RawScanner`]: produces `(RawTag, len)` pairs, no allocation
//! - [`Scanner`]: attaches offsets and lexeme slices, absorbs lexical errors
//!
//! Lexical errors (an unterminated string, an invalid UTF-8 byte) never stop
//! scanning. They are encoded as dedicated [`RawTag`] variants and the
//! malformed fragment is still returned as a token.

mod cursor;
mod raw_scanner;
mod scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use raw_scanner::RawScanner;
pub use scanner::{Scanner, Token};
pub use source_buffer::SourceBuffer;
pub use tag::{RawTag, RawToken};
