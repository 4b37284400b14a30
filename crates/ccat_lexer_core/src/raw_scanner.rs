//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and produces
//! [`RawToken`] values with zero heap allocation. It recognises the lexical
//! shapes shared by most C-family languages and nothing more: it does not
//! resolve keywords, validate escapes, or parse numeric values.
//!
//! # Design
//!
//! Main dispatch covers all 256 byte values. Each arm calls a focused method
//! that advances the cursor and returns `RawToken { tag, len }`. Whitespace
//! is never skipped or grouped: each whitespace character is its own
//! [`RawTag::Symbol`] token, so every input byte is observed by the caller.

use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};

/// Allocation-free scanner.
///
/// Produces one token at a time as a `(tag, length)` pair.
/// Error conditions are encoded as `RawTag` variants, not as `Result::Err`.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the source is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    #[inline]
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        if self.cursor.is_eof() {
            return RawToken {
                tag: RawTag::Eof,
                len: 0,
            };
        }
        match self.cursor.current() {
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start),
            b'0'..=b'9' => self.number(start),
            b'.' => self.dot(start),
            b'"' => self.quoted(start, b'"', RawTag::String, RawTag::UnterminatedString),
            b'\'' => self.quoted(start, b'\'', RawTag::Char, RawTag::UnterminatedChar),
            b'`' => self.raw_string(start),
            b'/' => self.slash_or_comment(start),
            0x80..=0xFF => self.non_ascii(start),
            // Everything else is a one-byte symbol: punctuation, ASCII
            // whitespace, control characters, interior NUL.
            _ => self.single(start),
        }
    }

    fn token(&self, start: u32, tag: RawTag) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    /// One-byte symbol.
    fn single(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        self.token(start, RawTag::Symbol)
    }

    /// Leading byte >= 0x80: a Unicode letter starts an identifier, any other
    /// valid scalar is a symbol, and an undecodable byte is an error token.
    fn non_ascii(&mut self, start: u32) -> RawToken {
        match self.cursor.current_char() {
            Some((c, width)) if c.is_alphabetic() => {
                self.cursor.advance_n(width);
                self.eat_ident_continue();
                self.token(start, RawTag::Ident)
            }
            Some((_, width)) => {
                self.cursor.advance_n(width);
                self.token(start, RawTag::Symbol)
            }
            None => {
                self.cursor.advance();
                self.token(start, RawTag::InvalidByte)
            }
        }
    }

    // ─── Comments ───────────────────────────────────────────────

    fn slash_or_comment(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume first '/'
        match self.cursor.current() {
            b'/' => {
                self.cursor.eat_until_newline_or_eof();
                self.token(start, RawTag::LineComment)
            }
            b'*' => {
                self.cursor.advance();
                if self.cursor.skip_past(b"*/") {
                    self.token(start, RawTag::BlockComment)
                } else {
                    self.token(start, RawTag::UnterminatedBlockComment)
                }
            }
            _ => self.token(start, RawTag::Symbol),
        }
    }

    // ─── Identifiers ────────────────────────────────────────────

    #[inline]
    fn identifier(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // first byte already validated
        self.eat_ident_continue();
        self.token(start, RawTag::Ident)
    }

    fn eat_ident_continue(&mut self) {
        loop {
            let b = self.cursor.current();
            if is_ident_continue(b) {
                self.cursor.advance();
                continue;
            }
            if b >= 0x80 {
                if let Some((c, width)) = self.cursor.current_char() {
                    if c.is_alphanumeric() || c == '_' {
                        self.cursor.advance_n(width);
                        continue;
                    }
                }
            }
            break;
        }
    }

    // ─── Numeric Literals ───────────────────────────────────────

    fn number(&mut self, start: u32) -> RawToken {
        let mut base = 10;
        if self.cursor.current() == b'0' {
            self.cursor.advance();
            match self.cursor.current().to_ascii_lowercase() {
                b'x' => {
                    self.cursor.advance();
                    base = 16;
                }
                b'o' => {
                    self.cursor.advance();
                    base = 8;
                }
                b'b' => {
                    self.cursor.advance();
                    base = 2;
                }
                // Legacy octal (`0755`) or a plain zero.
                _ => base = 8,
            }
        }
        self.eat_digits(base);

        let mut tag = RawTag::Int;
        if self.cursor.current() == b'.' {
            self.cursor.advance();
            tag = RawTag::Float;
            self.eat_digits(base);
        }
        if self.eat_exponent() {
            tag = RawTag::Float;
        }
        self.token(start, tag)
    }

    fn dot(&mut self, start: u32) -> RawToken {
        if !self.cursor.peek().is_ascii_digit() {
            return self.single(start);
        }
        self.cursor.advance(); // consume '.'
        self.eat_digits(10);
        self.eat_exponent();
        self.token(start, RawTag::Float)
    }

    /// Digits of the given base plus `_` separators.
    ///
    /// Bases up to 10 accept every decimal digit so that malformed literals
    /// such as `0b102` or `089` stay a single token.
    fn eat_digits(&mut self, base: u32) {
        if base == 16 {
            self.cursor.eat_while(|b| b.is_ascii_hexdigit() || b == b'_');
        } else {
            self.cursor.eat_while(|b| b.is_ascii_digit() || b == b'_');
        }
    }

    /// `e`/`E` (decimal) or `p`/`P` (hex) exponent with optional sign.
    fn eat_exponent(&mut self) -> bool {
        if !matches!(self.cursor.current().to_ascii_lowercase(), b'e' | b'p') {
            return false;
        }
        self.cursor.advance();
        if matches!(self.cursor.current(), b'+' | b'-') {
            self.cursor.advance();
        }
        self.eat_digits(10);
        true
    }

    // ─── String, Char & Raw Literals ────────────────────────────

    /// Scan a `quote`-delimited literal with backslash escapes.
    ///
    /// The literal ends at the closing quote, or (unterminated) just before
    /// a newline or at EOF. The newline is never part of the token.
    fn quoted(&mut self, start: u32, quote: u8, ok: RawTag, unterminated: RawTag) -> RawToken {
        self.cursor.advance(); // consume opening quote
        loop {
            match self.cursor.skip_to_quote_delim(quote) {
                b'\\' => {
                    self.cursor.advance(); // consume '\'
                    if !self.cursor.is_eof() && self.cursor.current() != b'\n' {
                        self.cursor.advance_char();
                    }
                }
                b'\n' | 0 => return self.token(start, unterminated),
                _ => {
                    self.cursor.advance(); // consume closing quote
                    return self.token(start, ok);
                }
            }
        }
    }

    fn raw_string(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume opening '`'
        if self.cursor.skip_to(b'`') == b'`' {
            self.cursor.advance();
            self.token(start, RawTag::RawString)
        } else {
            self.token(start, RawTag::UnterminatedRawString)
        }
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        let tok = self.next_token();
        if tok.tag == RawTag::Eof {
            None
        } else {
            Some(tok)
        }
    }
}

/// 256-byte lookup table for ASCII identifier continuation bytes.
/// The sentinel byte (0x00) maps to `false`, naturally terminating loops.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_'
        );
        i += 1;
    }
    table
};

#[inline]
fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

#[cfg(test)]
mod tests;
