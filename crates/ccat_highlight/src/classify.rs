//! Raw token to [`Kind`] classification.
//!
//! Classification looks only at lexical shape. Rules, in priority order:
//!
//! 1. identifiers: keyword, else `Type` when the first character is
//!    uppercase, else `Plaintext`
//! 2. numbers: `Decimal`
//! 3. character, string and raw string literals: `String`
//! 4. comments: `Comment`
//! 5. a symbol whose character is Unicode whitespace: `Whitespace`
//! 6. everything else: `Punctuation`
//!
//! Malformed tokens classify like their well-formed counterparts, so an
//! unterminated string still renders as a string.

use ccat_lexer_core::RawTag;

use crate::keywords::Keywords;
use crate::Kind;

/// Pure classifier borrowing an immutable keyword set.
#[derive(Clone, Copy, Debug)]
pub struct Classifier<'k> {
    keywords: &'k Keywords,
}

impl<'k> Classifier<'k> {
    pub fn new(keywords: &'k Keywords) -> Self {
        Classifier { keywords }
    }

    /// Classifier over [`Keywords::standard`].
    pub fn standard() -> Classifier<'static> {
        Classifier::new(Keywords::standard())
    }

    /// Classify one token. Total over every tag the scanner produces.
    pub fn classify(&self, tag: RawTag, text: &[u8]) -> Kind {
        match tag {
            RawTag::Ident => {
                if self.keywords.contains(text) {
                    Kind::Keyword
                } else if first_char(text).is_some_and(char::is_uppercase) {
                    Kind::Type
                } else {
                    Kind::Plaintext
                }
            }
            RawTag::Int | RawTag::Float => Kind::Decimal,
            RawTag::Char
            | RawTag::String
            | RawTag::RawString
            | RawTag::UnterminatedChar
            | RawTag::UnterminatedString
            | RawTag::UnterminatedRawString => Kind::String,
            RawTag::LineComment | RawTag::BlockComment | RawTag::UnterminatedBlockComment => {
                Kind::Comment
            }
            RawTag::Symbol if first_char(text).is_some_and(char::is_whitespace) => {
                Kind::Whitespace
            }
            RawTag::Symbol | RawTag::InvalidByte | RawTag::Eof => Kind::Punctuation,
        }
    }
}

impl Default for Classifier<'static> {
    fn default() -> Self {
        Classifier::standard()
    }
}

/// Classify with the standard keyword set.
pub fn token_kind(tag: RawTag, text: &[u8]) -> Kind {
    Classifier::standard().classify(tag, text)
}

/// First decoded character of `text`, if its leading bytes are valid UTF-8.
fn first_char(text: &[u8]) -> Option<char> {
    let width = text.len().min(4);
    let prefix = match std::str::from_utf8(&text[..width]) {
        Ok(s) => s,
        Err(e) => std::str::from_utf8(&text[..e.valid_up_to()]).ok()?,
    };
    prefix.chars().next()
}
