//! Raw token tags produced by the scanner.
//!
//! A tag describes the lexical *shape* of a token, not its meaning. Turning
//! shapes into highlighting kinds is the classifier's job.

/// Lexical shape of a raw token.
///
/// `repr(u8)` with values grouped by category:
/// - 0-15: identifiers, numbers, and literals
/// - 16-31: comments
/// - 32: any other single character (punctuation and whitespace)
/// - 240-250: absorbed lexical errors
/// - 255: end of input
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RawTag {
    /// Letter or `_`, followed by letters, digits, or `_`.
    Ident = 0,
    /// Integer literal in any base (`42`, `0x2A`, `0o52`, `0b101010`, `052`).
    Int = 1,
    /// Literal with a fraction or exponent (`1.5`, `.5`, `1e9`, `0x1p-2`).
    Float = 2,
    /// Single-quoted literal (`'a'`, `'\n'`).
    Char = 3,
    /// Double-quoted literal (`"hi"`).
    String = 4,
    /// Backquoted literal, may span lines (`` `raw` ``).
    RawString = 5,

    /// `//` comment up to, not including, the newline.
    LineComment = 16,
    /// `/* */` comment, may span lines.
    BlockComment = 17,

    /// Any other single Unicode scalar value, whitespace included.
    Symbol = 32,

    /// Char literal cut short by a newline or EOF.
    UnterminatedChar = 240,
    /// String literal cut short by a newline or EOF.
    UnterminatedString = 241,
    /// Raw string with no closing backquote.
    UnterminatedRawString = 242,
    /// Block comment with no closing `*/`.
    UnterminatedBlockComment = 243,
    /// A byte that does not start a valid UTF-8 sequence.
    InvalidByte = 244,

    /// End of input. Always zero length.
    Eof = 255,
}

impl RawTag {
    /// Returns `true` for tags that encode an absorbed lexical error.
    pub fn is_error(self) -> bool {
        matches!(
            self,
            RawTag::UnterminatedChar
                | RawTag::UnterminatedString
                | RawTag::UnterminatedRawString
                | RawTag::UnterminatedBlockComment
                | RawTag::InvalidByte
        )
    }

    /// Human-readable name, used in trace output.
    pub fn name(self) -> &'static str {
        match self {
            RawTag::Ident => "identifier",
            RawTag::Int => "integer",
            RawTag::Float => "float",
            RawTag::Char => "char literal",
            RawTag::String => "string literal",
            RawTag::RawString => "raw string literal",
            RawTag::LineComment => "line comment",
            RawTag::BlockComment => "block comment",
            RawTag::Symbol => "symbol",
            RawTag::UnterminatedChar => "unterminated char literal",
            RawTag::UnterminatedString => "unterminated string literal",
            RawTag::UnterminatedRawString => "unterminated raw string literal",
            RawTag::UnterminatedBlockComment => "unterminated block comment",
            RawTag::InvalidByte => "invalid UTF-8 byte",
            RawTag::Eof => "end of input",
        }
    }
}

/// A raw token: tag plus byte length. Offsets are tracked by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}

const _: () = assert!(std::mem::size_of::<RawToken>() == 8);
