//! Structured, line-oriented document model.
//!
//! [`DocumentBuilder`] consumes classified tokens and produces a
//! [`SourceDocument`]: one [`Line`] per newline-terminated stretch of input,
//! each holding merged plain-text runs and styled [`TokenRecord`]s. Tokens
//! that span newlines (block comments, raw strings) are split so that every
//! record lies on exactly one line.
//!
//! Line byte ranges partition the input: each line ends (exclusively) just
//! past its newline, where the next line starts. Only the last line may be
//! left open.

use ccat_lexer_core::{Scanner, SourceBuffer};
use serde::{Deserialize, Serialize};

use crate::annotate::{Annotation, Annotator};
use crate::{html, Classifier, HighlightError, Kind, StyleConfig};

/// A styled token on a single line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    pub start_byte: u32,
    pub end_byte: u32,
    pub class: String,
    /// HTML-escaped lexeme.
    pub label: String,
    #[serde(default)]
    pub is_def: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub urls: Vec<String>,
}

impl TokenRecord {
    pub fn new(start_byte: u32, end_byte: u32, class: impl Into<String>, label: impl Into<String>) -> Self {
        TokenRecord {
            start_byte,
            end_byte,
            class: class.into(),
            label: label.into(),
            is_def: false,
            urls: Vec::new(),
        }
    }
}

/// One element of a line: merged unstyled text, or a styled token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LineEntry {
    /// HTML-escaped text of adjacent unstyled fragments.
    Text(String),
    Token(TokenRecord),
}

impl LineEntry {
    /// The escaped text this entry renders. For hosts that draw a
    /// [`SourceDocument`] themselves; the JSON export serialises the fields.
    pub fn label(&self) -> &str {
        match self {
            LineEntry::Text(text) => text,
            LineEntry::Token(tok) => &tok.label,
        }
    }
}

/// A contiguous byte range of the input and its entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub start_byte: u32,
    /// Exclusive end, including the terminating newline. `None` while open.
    pub end_byte: Option<u32>,
    pub entries: Vec<LineEntry>,
}

impl Line {
    fn open(start_byte: u32) -> Self {
        Line {
            start_byte,
            end_byte: None,
            entries: Vec::new(),
        }
    }

    /// Labels of every entry, in order. Concatenated, they are the escaped
    /// text of the line without its newline; hosts rendering lines directly
    /// use this instead of matching on [`LineEntry`].
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(LineEntry::label)
    }
}

/// Ordered lines covering one input buffer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDocument {
    pub lines: Vec<Line>,
}

impl SourceDocument {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Close the last line at `end_byte` if it is still open.
    pub fn close(&mut self, end_byte: u32) {
        if let Some(last) = self.lines.last_mut() {
            last.end_byte.get_or_insert(end_byte);
        }
    }
}

/// Builds a [`SourceDocument`] one token at a time.
///
/// Offsets passed to [`push`](Self::push) are relative to the buffer; the
/// builder adds `start_byte` so records carry absolute offsets when the
/// buffer is a slice of a larger file. Absolute offsets saturate at
/// `u32::MAX`.
#[derive(Clone, Debug)]
pub struct DocumentBuilder {
    config: StyleConfig,
    lines: Vec<Line>,
    byte_offset: u32,
}

impl DocumentBuilder {
    /// Builder using the prettify classes, sized for `src`.
    pub fn new(start_byte: u32, src: &[u8]) -> Self {
        Self::with_config(StyleConfig::prettify(), start_byte, src)
    }

    pub fn with_config(config: StyleConfig, start_byte: u32, src: &[u8]) -> Self {
        let mut lines = Vec::with_capacity(memchr::memchr_iter(b'\n', src).count() + 1);
        lines.push(Line::open(start_byte));
        DocumentBuilder {
            config,
            lines,
            byte_offset: start_byte,
        }
    }

    /// Record one classified token starting at relative offset `start`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "tokens come from a SourceBuffer whose length fits in u32"
    )]
    pub fn push(&mut self, start: u32, kind: Kind, text: &[u8]) {
        let start = self.byte_offset.saturating_add(start);
        let styled = !self.config.style(kind).is_empty();

        if text == b"\n" {
            self.add_line(start.saturating_add(1));
        } else if memchr::memchr(b'\n', text).is_some() {
            let class = styled.then(|| self.config.style(kind).to_owned());
            self.add_multiline(start, text, class.as_deref());
        } else if styled {
            let class = self.config.style(kind).to_owned();
            let end = start.saturating_add(text.len() as u32);
            self.add_token(TokenRecord::new(start, end, class, html::escape_to_string(text)));
        } else {
            self.add_text(&html::escape_to_string(text));
        }
    }

    /// The document so far; the last line stays open.
    pub fn into_document(self) -> SourceDocument {
        SourceDocument { lines: self.lines }
    }

    /// The document with its last line closed at absolute `end_byte`.
    pub fn finish(self, end_byte: u32) -> SourceDocument {
        let mut doc = self.into_document();
        doc.close(end_byte);
        doc
    }

    fn current(&mut self) -> &mut Line {
        let last = self.lines.len() - 1;
        &mut self.lines[last]
    }

    /// Close the current line at `start_byte` and open the next one there.
    fn add_line(&mut self, start_byte: u32) {
        self.current().end_byte = Some(start_byte);
        self.lines.push(Line::open(start_byte));
    }

    /// Append unstyled text, merging into a preceding text run.
    fn add_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let entries = &mut self.current().entries;
        match entries.last_mut() {
            Some(LineEntry::Text(run)) => run.push_str(text),
            _ => entries.push(LineEntry::Text(text.to_owned())),
        }
    }

    fn add_token(&mut self, record: TokenRecord) {
        self.current().entries.push(LineEntry::Token(record));
    }

    /// Split a token containing newlines into one piece per line. Empty
    /// pieces (a newline at either end, or two in a row) produce no entry
    /// but still advance the line.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "tokens come from a SourceBuffer whose length fits in u32"
    )]
    fn add_multiline(&mut self, mut start: u32, text: &[u8], class: Option<&str>) {
        let mut pieces = text.split(|&b| b == b'\n').peekable();
        while let Some(piece) = pieces.next() {
            let end = start.saturating_add(piece.len() as u32);
            if !piece.is_empty() {
                let label = html::escape_to_string(piece);
                match class {
                    Some(class) => self.add_token(TokenRecord::new(start, end, class, label)),
                    None => self.add_text(&label),
                }
            }
            start = end;
            if pieces.peek().is_some() {
                start = start.saturating_add(1);
                self.add_line(start);
            }
        }
    }
}

impl Annotator for DocumentBuilder {
    fn annotate(
        &mut self,
        start: u32,
        kind: Kind,
        text: &[u8],
    ) -> Result<Option<Annotation>, HighlightError> {
        self.push(start, kind, text);
        Ok(None)
    }
}

/// Build the document for `src` with the prettify classes. `start_byte` is
/// the absolute offset of `src` within its file; offsets past `u32::MAX`
/// saturate.
pub fn build_document(src: &[u8], start_byte: u32) -> SourceDocument {
    build_document_with(src, start_byte, StyleConfig::prettify(), Classifier::standard())
}

/// [`build_document`] with caller-supplied classes and classifier.
#[tracing::instrument(level = "debug", skip_all, fields(len = src.len(), start_byte = start_byte))]
pub fn build_document_with(
    src: &[u8],
    start_byte: u32,
    config: StyleConfig,
    classifier: Classifier<'_>,
) -> SourceDocument {
    let buf = SourceBuffer::new(src);
    let mut builder = DocumentBuilder::with_config(config, start_byte, src);
    let mut scanner = Scanner::new(&buf);
    for tok in &mut scanner {
        builder.push(tok.offset, classifier.classify(tok.tag, tok.text), tok.text);
    }
    let doc = builder.finish(start_byte.saturating_add(buf.len()));
    tracing::debug!(lines = doc.len(), errors = scanner.error_count(), "built document");
    doc
}
