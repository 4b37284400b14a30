//! Offset-tracking scanner adapter.
//!
//! Wraps [`RawScanner`] and turns `(tag, len)` pairs into [`Token`]s that
//! carry their start offset and lexeme. Lexical errors are absorbed here:
//! they are counted and traced, and the malformed fragment is returned as an
//! ordinary token so highlighting degrades instead of failing.

use crate::raw_scanner::RawScanner;
use crate::source_buffer::SourceBuffer;
use crate::tag::RawTag;

/// A scanned token: raw shape, start offset, and the exact source bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub tag: RawTag,
    /// Byte offset of the first byte of `text` in the source.
    pub offset: u32,
    pub text: &'a [u8],
}

impl Token<'_> {
    /// Byte length of the lexeme.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "token text is a slice of a buffer whose length fits in u32"
    )]
    pub fn len(&self) -> u32 {
        self.text.len() as u32
    }

    /// Always `false`: the scanner never produces empty tokens.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Exclusive end offset.
    pub fn end(&self) -> u32 {
        self.offset + self.len()
    }
}

/// Pull-based scanner over a [`SourceBuffer`].
///
/// Every source byte is covered by exactly one token, in order.
pub struct Scanner<'a> {
    raw: RawScanner<'a>,
    source: &'a [u8],
    offset: u32,
    errors: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(buf: &'a SourceBuffer) -> Self {
        Self {
            raw: RawScanner::new(buf.cursor()),
            source: buf.as_bytes(),
            offset: 0,
            errors: 0,
        }
    }

    /// Produce the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Option<Token<'a>> {
        let raw = self.raw.next_token();
        if raw.tag == RawTag::Eof {
            return None;
        }
        let start = self.offset;
        let end = start + raw.len;
        let text = &self.source[start as usize..end as usize];
        self.offset = end;
        if raw.tag.is_error() {
            self.errors += 1;
            tracing::trace!(offset = start, len = raw.len, "absorbed {}", raw.tag.name());
        }
        Some(Token {
            tag: raw.tag,
            offset: start,
            text,
        })
    }

    /// Number of lexical errors absorbed so far.
    pub fn error_count(&self) -> usize {
        self.errors
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        self.next_token()
    }
}
