//! Inline printing: style each token and write it straight to a sink.
//!
//! The driver holds one token at a time. It stops at the first failed
//! write and reports it; bytes already written stay written.

use std::io::{self, Write};

use ccat_lexer_core::{Scanner, SourceBuffer};

use crate::{ansi, html, Classifier, HighlightError, Kind, StyleConfig};

/// Writes one classified token to a sink.
pub trait Printer {
    fn print<W: Write + ?Sized>(&self, w: &mut W, kind: Kind, text: &[u8]) -> io::Result<()>;
}

/// Wraps styled tokens in `<span class="…">` using the configured classes.
/// All text is HTML-escaped.
#[derive(Clone, Debug, Default)]
pub struct HtmlPrinter {
    config: StyleConfig,
}

impl HtmlPrinter {
    pub fn new(config: StyleConfig) -> Self {
        HtmlPrinter { config }
    }
}

impl Printer for HtmlPrinter {
    fn print<W: Write + ?Sized>(&self, w: &mut W, kind: Kind, text: &[u8]) -> io::Result<()> {
        let class = self.config.style(kind);
        if class.is_empty() {
            return html::write_escaped(w, text);
        }
        w.write_all(br#"<span class=""#)?;
        html::write_escaped(w, class.as_bytes())?;
        w.write_all(br#"">"#)?;
        html::write_escaped(w, text)?;
        w.write_all(html::CLOSE.as_bytes())
    }
}

/// Colours tokens with ANSI escape sequences from a palette.
#[derive(Clone, Debug)]
pub struct AnsiPrinter {
    /// Opening sequence per kind, indexed by `Kind as usize`; `None` when
    /// the palette leaves the kind unstyled.
    openings: [Option<String>; 13],
}

impl AnsiPrinter {
    pub fn new(palette: &StyleConfig) -> Self {
        AnsiPrinter {
            openings: Kind::ALL.map(|kind| {
                let attr = palette.style(kind);
                (!attr.is_empty()).then(|| ansi::opening(attr))
            }),
        }
    }
}

impl Printer for AnsiPrinter {
    fn print<W: Write + ?Sized>(&self, w: &mut W, kind: Kind, text: &[u8]) -> io::Result<()> {
        match &self.openings[kind as usize] {
            None => w.write_all(text),
            Some(open) => {
                w.write_all(open.as_bytes())?;
                w.write_all(text)?;
                w.write_all(ansi::RESET.as_bytes())
            }
        }
    }
}

/// Renders a terminal palette as HTML spans named after the colours.
#[derive(Clone, Debug)]
pub struct HtmlColorPrinter {
    palette: StyleConfig,
}

impl HtmlColorPrinter {
    pub fn new(palette: StyleConfig) -> Self {
        HtmlColorPrinter { palette }
    }
}

impl Printer for HtmlColorPrinter {
    fn print<W: Write + ?Sized>(&self, w: &mut W, kind: Kind, text: &[u8]) -> io::Result<()> {
        html::write_htmlized(w, self.palette.style(kind), text)
    }
}

/// Drive `printer` over every token of `scanner` with the standard
/// classifier.
pub fn print<P, W>(scanner: Scanner<'_>, w: &mut W, printer: &P) -> Result<(), HighlightError>
where
    P: Printer + ?Sized,
    W: Write + ?Sized,
{
    print_with(scanner, Classifier::standard(), w, printer)
}

/// [`print`] with a caller-supplied classifier.
#[tracing::instrument(level = "debug", skip_all)]
pub fn print_with<P, W>(
    mut scanner: Scanner<'_>,
    classifier: Classifier<'_>,
    w: &mut W,
    printer: &P,
) -> Result<(), HighlightError>
where
    P: Printer + ?Sized,
    W: Write + ?Sized,
{
    let mut tokens = 0usize;
    for tok in &mut scanner {
        let kind = classifier.classify(tok.tag, tok.text);
        printer.print(w, kind, tok.text)?;
        tokens += 1;
    }
    tracing::debug!(tokens, errors = scanner.error_count(), "printed");
    Ok(())
}

/// Render `src` as HTML with the prettify classes.
pub fn as_html(src: &[u8]) -> Result<Vec<u8>, HighlightError> {
    render(src, &HtmlPrinter::default())
}

/// Render `src` with ANSI colours from `palette`.
pub fn as_ansi(src: &[u8], palette: &StyleConfig) -> Result<Vec<u8>, HighlightError> {
    render(src, &AnsiPrinter::new(palette))
}

fn render<P: Printer + ?Sized>(src: &[u8], printer: &P) -> Result<Vec<u8>, HighlightError> {
    let buf = SourceBuffer::new(src);
    let mut out = Vec::with_capacity(src.len() * 2);
    print(Scanner::new(&buf), &mut out, printer)?;
    Ok(out)
}
