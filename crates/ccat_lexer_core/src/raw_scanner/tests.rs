use pretty_assertions::assert_eq;

use super::*;
use crate::SourceBuffer;

/// Helper: scan a source and collect all tokens (excluding Eof).
fn scan(source: &[u8]) -> Vec<RawToken> {
    let buf = SourceBuffer::new(source);
    RawScanner::new(buf.cursor()).collect()
}

/// Helper: scan and return `(tag, text)` pairs.
fn scan_text(source: &str) -> Vec<(RawTag, &str)> {
    let mut offset = 0usize;
    scan(source.as_bytes())
        .into_iter()
        .map(|tok| {
            let end = offset + tok.len as usize;
            let text = &source[offset..end];
            offset = end;
            (tok.tag, text)
        })
        .collect()
}

fn scan_tags(source: &str) -> Vec<RawTag> {
    scan(source.as_bytes()).iter().map(|t| t.tag).collect()
}

// ─── Invariants ──────────────────────────────────────────────

#[test]
fn total_len_equals_source_len() {
    let sources: [&[u8]; 10] = [
        b"",
        b"x",
        b"hello world",
        b"let x = 42\nlet y = x + 1",
        b"\"hello\" 'c' 123 0xFF",
        b"/* block\ncomment */ // line",
        b"`raw\nstring`",
        b"  \t\n  \r\n  ",
        b"\"unterminated\nnext",
        &[b'a', 0xFF, 0xC3, b'b', 0],
    ];
    for source in sources {
        let total: u32 = scan(source).iter().map(|t| t.len).sum();
        assert_eq!(total as usize, source.len(), "length mismatch for {source:?}");
    }
}

#[test]
fn every_token_has_positive_length() {
    let sources: [&[u8]; 5] = [b"a := 2", b"+-*/%", b"\"str\" 'c'", b"`tmpl`", b"  \t\n\r\n"];
    for source in sources {
        for tok in scan(source) {
            assert!(tok.len > 0, "zero-length token {tok:?} in {source:?}");
        }
    }
}

#[test]
fn repeated_eof_returns_eof() {
    let buf = SourceBuffer::new(b"");
    let mut scanner = RawScanner::new(buf.cursor());
    for _ in 0..5 {
        let tok = scanner.next_token();
        assert_eq!(tok.tag, RawTag::Eof);
        assert_eq!(tok.len, 0);
    }
}

// ─── Whitespace ─────────────────────────────────────────────

#[test]
fn whitespace_is_one_token_per_character() {
    assert_eq!(
        scan_text("  \t"),
        vec![
            (RawTag::Symbol, " "),
            (RawTag::Symbol, " "),
            (RawTag::Symbol, "\t")
        ]
    );
}

#[test]
fn crlf_is_two_tokens() {
    assert_eq!(
        scan_text("\r\n"),
        vec![(RawTag::Symbol, "\r"), (RawTag::Symbol, "\n")]
    );
}

#[test]
fn unicode_space_is_single_symbol() {
    assert_eq!(
        scan_text("a\u{3000}b"),
        vec![
            (RawTag::Ident, "a"),
            (RawTag::Symbol, "\u{3000}"),
            (RawTag::Ident, "b")
        ]
    );
}

// ─── Identifiers ─────────────────────────────────────────────

#[test]
fn identifiers() {
    assert_eq!(
        scan_text("foo _bar Baz9 _"),
        vec![
            (RawTag::Ident, "foo"),
            (RawTag::Symbol, " "),
            (RawTag::Ident, "_bar"),
            (RawTag::Symbol, " "),
            (RawTag::Ident, "Baz9"),
            (RawTag::Symbol, " "),
            (RawTag::Ident, "_"),
        ]
    );
}

#[test]
fn unicode_identifiers() {
    assert_eq!(
        scan_text("こんにちは über"),
        vec![
            (RawTag::Ident, "こんにちは"),
            (RawTag::Symbol, " "),
            (RawTag::Ident, "über"),
        ]
    );
}

// ─── Numbers ─────────────────────────────────────────────────

#[test]
fn integers_in_every_base() {
    assert_eq!(
        scan_tags("42 0x2A 0o52 0b101010 052 1_000"),
        vec![
            RawTag::Int,
            RawTag::Symbol,
            RawTag::Int,
            RawTag::Symbol,
            RawTag::Int,
            RawTag::Symbol,
            RawTag::Int,
            RawTag::Symbol,
            RawTag::Int,
            RawTag::Symbol,
            RawTag::Int,
        ]
    );
}

#[test]
fn floats() {
    assert_eq!(
        scan_text("1.5 .5 1e9 2.5E-3 0x1p-2"),
        vec![
            (RawTag::Float, "1.5"),
            (RawTag::Symbol, " "),
            (RawTag::Float, ".5"),
            (RawTag::Symbol, " "),
            (RawTag::Float, "1e9"),
            (RawTag::Symbol, " "),
            (RawTag::Float, "2.5E-3"),
            (RawTag::Symbol, " "),
            (RawTag::Float, "0x1p-2"),
        ]
    );
}

#[test]
fn lone_dot_is_symbol() {
    assert_eq!(
        scan_text("a.b"),
        vec![
            (RawTag::Ident, "a"),
            (RawTag::Symbol, "."),
            (RawTag::Ident, "b")
        ]
    );
}

#[test]
fn trailing_dot_belongs_to_number() {
    assert_eq!(
        scan_text("1.x"),
        vec![(RawTag::Float, "1."), (RawTag::Ident, "x")]
    );
}

// ─── Literals ────────────────────────────────────────────────

#[test]
fn string_with_escapes() {
    assert_eq!(
        scan_text(r#""a\"b" x"#),
        vec![
            (RawTag::String, r#""a\"b""#),
            (RawTag::Symbol, " "),
            (RawTag::Ident, "x")
        ]
    );
}

#[test]
fn unterminated_string_stops_before_newline() {
    assert_eq!(
        scan_text("\"open\nnext"),
        vec![
            (RawTag::UnterminatedString, "\"open"),
            (RawTag::Symbol, "\n"),
            (RawTag::Ident, "next"),
        ]
    );
}

#[test]
fn escaped_newline_does_not_continue_string() {
    assert_eq!(
        scan_text("\"a\\\nb"),
        vec![
            (RawTag::UnterminatedString, "\"a\\"),
            (RawTag::Symbol, "\n"),
            (RawTag::Ident, "b"),
        ]
    );
}

#[test]
fn unterminated_string_at_eof() {
    assert_eq!(
        scan_text("\"open"),
        vec![(RawTag::UnterminatedString, "\"open")]
    );
}

#[test]
fn char_literals() {
    assert_eq!(
        scan_text(r"'a' '\n' 'é'"),
        vec![
            (RawTag::Char, "'a'"),
            (RawTag::Symbol, " "),
            (RawTag::Char, r"'\n'"),
            (RawTag::Symbol, " "),
            (RawTag::Char, "'é'"),
        ]
    );
}

#[test]
fn apostrophe_in_prose_runs_to_end_of_line() {
    assert_eq!(
        scan_text("don't stop\nx"),
        vec![
            (RawTag::Ident, "don"),
            (RawTag::UnterminatedChar, "'t stop"),
            (RawTag::Symbol, "\n"),
            (RawTag::Ident, "x"),
        ]
    );
}

#[test]
fn raw_string_spans_lines() {
    assert_eq!(
        scan_text("`I am\na raw`;"),
        vec![(RawTag::RawString, "`I am\na raw`"), (RawTag::Symbol, ";")]
    );
}

#[test]
fn unterminated_raw_string() {
    assert_eq!(
        scan_text("`open\nstill"),
        vec![(RawTag::UnterminatedRawString, "`open\nstill")]
    );
}

// ─── Comments ────────────────────────────────────────────────

#[test]
fn line_comment_excludes_newline() {
    assert_eq!(
        scan_text("// note\nx"),
        vec![
            (RawTag::LineComment, "// note"),
            (RawTag::Symbol, "\n"),
            (RawTag::Ident, "x"),
        ]
    );
}

#[test]
fn block_comment_spans_lines() {
    assert_eq!(
        scan_text("/* I am\na multiline\ncomment\n*/"),
        vec![(RawTag::BlockComment, "/* I am\na multiline\ncomment\n*/")]
    );
}

#[test]
fn unterminated_block_comment() {
    assert_eq!(
        scan_text("/* open"),
        vec![(RawTag::UnterminatedBlockComment, "/* open")]
    );
}

#[test]
fn slash_alone_is_symbol() {
    assert_eq!(
        scan_text("a/b"),
        vec![
            (RawTag::Ident, "a"),
            (RawTag::Symbol, "/"),
            (RawTag::Ident, "b")
        ]
    );
}

// ─── Symbols & Errors ────────────────────────────────────────

#[test]
fn assignment_is_four_tokens() {
    assert_eq!(
        scan_text("a:=2"),
        vec![
            (RawTag::Ident, "a"),
            (RawTag::Symbol, ":"),
            (RawTag::Symbol, "="),
            (RawTag::Int, "2"),
        ]
    );
}

#[test]
fn invalid_utf8_bytes_are_single_tokens() {
    let tokens = scan(&[0xFF, 0xC3, b'a']);
    assert_eq!(
        tokens,
        vec![
            RawToken {
                tag: RawTag::InvalidByte,
                len: 1
            },
            RawToken {
                tag: RawTag::InvalidByte,
                len: 1
            },
            RawToken {
                tag: RawTag::Ident,
                len: 1
            },
        ]
    );
}

#[test]
fn interior_null_is_symbol() {
    assert_eq!(scan_tags("a\0b"), vec![RawTag::Ident, RawTag::Symbol, RawTag::Ident]);
}

#[test]
fn non_letter_unicode_is_symbol() {
    assert_eq!(scan_text("→"), vec![(RawTag::Symbol, "→")]);
}

// ─── Property Tests ──────────────────────────────────────────

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod proptest_scanner {
    use super::scan;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn lengths_cover_random_bytes(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
            let tokens = scan(&bytes);
            let total: usize = tokens.iter().map(|t| t.len as usize).sum();
            prop_assert_eq!(total, bytes.len());
            prop_assert!(tokens.iter().all(|t| t.len > 0));
        }

        #[test]
        fn lengths_cover_random_text(text in "\\PC{0,256}") {
            let tokens = scan(text.as_bytes());
            let total: usize = tokens.iter().map(|t| t.len as usize).sum();
            prop_assert_eq!(total, text.len());
        }
    }
}
