//! Sentinel-terminated source buffer for zero-bounds-check scanning.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! allowing the scanner to detect EOF without explicit bounds checking.
//! The total buffer size is rounded up to the next 64-byte boundary, which
//! also keeps `peek()` in bounds on the last source byte.
//!
//! Unlike a compiler front end, ccat accepts arbitrary bytes: invalid UTF-8
//! and interior NUL bytes are legal input and simply become tokens.

use std::io::{self, Read};

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Sentinel-terminated source buffer.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
}

impl SourceBuffer {
    /// Create a new sentinel-terminated buffer from raw bytes.
    ///
    /// # File Size
    ///
    /// Offsets are `u32`. Content beyond `u32::MAX` bytes (~4 GiB) is not
    /// scanned; use [`from_reader`](Self::from_reader) to get an error
    /// instead, or enforce a size limit upstream.
    pub fn new(source: &[u8]) -> Self {
        let source_len = source.len().min(u32::MAX as usize - 1);
        let source_bytes = &source[..source_len];

        // Round up to next 64-byte boundary (minimum: source + 1 sentinel byte).
        let padded_len = (source_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // The sentinel (buf[source_len]) and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source_bytes);

        #[allow(
            clippy::cast_possible_truncation,
            reason = "source_len clamped below u32::MAX above"
        )]
        let source_len = source_len as u32;

        Self { buf, source_len }
    }

    /// Read a stream to completion and buffer it.
    ///
    /// This is the only blocking step of a highlighting run: the scanner
    /// itself never touches the reader.
    pub fn from_reader(mut reader: impl Read) -> io::Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        if u32::try_from(bytes.len()).map_or(true, |n| n == u32::MAX) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("input of {} bytes exceeds the 4 GiB limit", bytes.len()),
            ));
        }
        Ok(Self::new(&bytes))
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}
