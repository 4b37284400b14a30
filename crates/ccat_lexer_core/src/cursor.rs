//! Cursor over a sentinel-terminated buffer.
//!
//! The cursor advances through the buffer byte-by-byte. EOF is detected
//! when the current byte equals the sentinel (`0x00`) and the position
//! has reached the source length, so interior NUL bytes are still content.
//!
//! The `skip_*` methods use `memchr` to jump over the bodies of literals
//! and comments, which dominate the byte count of typical source files.

/// Cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], enabling cheap state snapshots.
///
/// # Invariant
///
/// `buf[source_len] == 0x00` and every byte after it is `0x00`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
}

const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Returns the byte at the current position (`0x00` at EOF).
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Returns the byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Returns `true` if the cursor has reached EOF.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false` so the sentinel stops the loop.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }

    /// Returns the number of bytes in the UTF-8 sequence led by `byte`.
    ///
    /// - `0xC0..=0xDF`: 2 bytes
    /// - `0xE0..=0xEF`: 3 bytes
    /// - `0xF0..=0xF7`: 4 bytes
    /// - Everything else (ASCII, continuation, invalid): 1 byte
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Decode the Unicode scalar starting at the current position.
    ///
    /// Returns the character and its encoded width, or `None` at EOF or when
    /// the bytes at the cursor are not a valid UTF-8 sequence.
    pub fn current_char(&self) -> Option<(char, u32)> {
        let width = Self::utf8_char_width(self.current());
        let start = self.pos as usize;
        let end = (start + width as usize).min(self.source_len as usize);
        let c = std::str::from_utf8(&self.buf[start..end])
            .ok()?
            .chars()
            .next()?;
        Some((c, width))
    }

    /// Advance past one character, or one byte if the sequence is invalid.
    #[inline]
    pub fn advance_char(&mut self) {
        match self.current_char() {
            Some((_, width)) => self.advance_n(width),
            None => self.advance(),
        }
    }

    /// Remaining source content from the current position.
    fn remaining(&self) -> &'a [u8] {
        &self.buf[self.pos as usize..self.source_len as usize]
    }

    /// Move to `offset` bytes past the current position, or to EOF if `None`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < remaining().len() <= source_len which fits in u32"
    )]
    fn jump(&mut self, offset: Option<usize>) -> u8 {
        if let Some(off) = offset {
            self.pos += off as u32;
            self.current()
        } else {
            self.pos = self.source_len;
            0
        }
    }

    /// Advance to the next `\n` byte or EOF.
    pub fn eat_until_newline_or_eof(&mut self) {
        let found = memchr::memchr(b'\n', self.remaining());
        self.jump(found);
    }

    /// Advance past ordinary quoted content to the next interesting byte.
    /// Returns the byte found, or 0 for EOF.
    ///
    /// "Interesting" bytes: the closing `quote`, `\`, and `\n`.
    pub fn skip_to_quote_delim(&mut self, quote: u8) -> u8 {
        let found = memchr::memchr3(quote, b'\\', b'\n', self.remaining());
        self.jump(found)
    }

    /// Advance to the next `byte` or EOF. Returns the byte found, or 0 for EOF.
    pub fn skip_to(&mut self, byte: u8) -> u8 {
        let found = memchr::memchr(byte, self.remaining());
        self.jump(found)
    }

    /// Advance past the next occurrence of `needle`.
    ///
    /// Returns `false` (cursor at EOF) if the needle does not occur.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "needle is a short literal"
    )]
    pub fn skip_past(&mut self, needle: &[u8]) -> bool {
        match memchr::memmem::find(self.remaining(), needle) {
            Some(off) => {
                self.jump(Some(off));
                self.advance_n(needle.len() as u32);
                true
            }
            None => {
                self.jump(None);
                false
            }
        }
    }
}
