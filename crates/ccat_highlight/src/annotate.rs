//! Span annotation: markup to insert around token ranges of the original
//! buffer, for consumers that render the buffer themselves.

use std::io::{self, Write};

use ccat_lexer_core::{Scanner, SourceBuffer};

use crate::{html, Classifier, HighlightError, Kind, StyleConfig};

/// Markup to wrap around `src[start..end]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Annotation {
    pub start: u32,
    pub end: u32,
    pub left: Vec<u8>,
    pub right: Vec<u8>,
}

/// Consumes classified tokens, optionally producing an annotation for each.
///
/// `start` is the token's byte offset relative to the annotated buffer.
pub trait Annotator {
    fn annotate(
        &mut self,
        start: u32,
        kind: Kind,
        text: &[u8],
    ) -> Result<Option<Annotation>, HighlightError>;
}

/// One `<span class="…">` annotation per styled token.
#[derive(Clone, Debug, Default)]
pub struct HtmlAnnotator {
    config: StyleConfig,
}

impl HtmlAnnotator {
    pub fn new(config: StyleConfig) -> Self {
        HtmlAnnotator { config }
    }
}

impl Annotator for HtmlAnnotator {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "tokens come from a SourceBuffer whose length fits in u32"
    )]
    fn annotate(
        &mut self,
        start: u32,
        kind: Kind,
        text: &[u8],
    ) -> Result<Option<Annotation>, HighlightError> {
        let class = self.config.style(kind);
        if class.is_empty() {
            return Ok(None);
        }
        let mut left = Vec::with_capacity(class.len() + 15);
        left.extend_from_slice(br#"<span class=""#);
        left.extend_from_slice(&html::escape_html(class.as_bytes()));
        left.extend_from_slice(br#"">"#);
        Ok(Some(Annotation {
            start,
            end: start + text.len() as u32,
            left,
            right: html::CLOSE.as_bytes().to_vec(),
        }))
    }
}

/// Run `annotator` over `src` with the standard classifier and collect the
/// annotations it produces, in source order.
pub fn annotate<A: Annotator + ?Sized>(
    src: &[u8],
    annotator: &mut A,
) -> Result<Vec<Annotation>, HighlightError> {
    annotate_with(src, Classifier::standard(), annotator)
}

/// [`annotate`] with a caller-supplied classifier.
#[tracing::instrument(level = "debug", skip_all, fields(len = src.len()))]
pub fn annotate_with<A: Annotator + ?Sized>(
    src: &[u8],
    classifier: Classifier<'_>,
    annotator: &mut A,
) -> Result<Vec<Annotation>, HighlightError> {
    let buf = SourceBuffer::new(src);
    let mut scanner = Scanner::new(&buf);
    let mut anns = Vec::new();
    for tok in &mut scanner {
        let kind = classifier.classify(tok.tag, tok.text);
        if let Some(ann) = annotator.annotate(tok.offset, kind, tok.text)? {
            anns.push(ann);
        }
    }
    tracing::debug!(
        annotations = anns.len(),
        errors = scanner.error_count(),
        "annotated"
    );
    Ok(anns)
}

/// Write `src` with every annotation's markup inserted around its range.
/// Source text is HTML-escaped; markup is written verbatim.
///
/// Annotations must be sorted by `start` and must not overlap, which is
/// what [`annotate`] produces. A range that breaks this fails with
/// [`io::ErrorKind::InvalidInput`].
pub fn render_annotations<W: Write + ?Sized>(
    src: &[u8],
    anns: &[Annotation],
    w: &mut W,
) -> io::Result<()> {
    let mut cursor = 0usize;
    for ann in anns {
        let (start, end) = (ann.start as usize, ann.end as usize);
        html::write_escaped(w, slice(src, cursor, start)?)?;
        w.write_all(&ann.left)?;
        html::write_escaped(w, slice(src, start, end)?)?;
        w.write_all(&ann.right)?;
        cursor = end;
    }
    html::write_escaped(w, &src[cursor..])
}

fn slice(src: &[u8], from: usize, to: usize) -> io::Result<&[u8]> {
    src.get(from..to).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("annotation range {from}..{to} is out of order or out of bounds"),
        )
    })
}
