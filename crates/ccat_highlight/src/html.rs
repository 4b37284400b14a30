//! HTML span codes and escaping.
//!
//! Mirrors [`crate::ansi`] with `<span class="NAME">` in place of escape
//! sequences, so a terminal palette can be rendered as HTML and styled with
//! a stylesheet keyed on colour names.

use std::borrow::Cow;
use std::io::{self, Write};

use crate::attr;

/// Closes one span.
pub const CLOSE: &str = "</span>";

/// Span for a colour or attribute name. `reset` maps to [`CLOSE`].
pub fn code(name: &str) -> Option<&'static str> {
    Some(match name {
        "reset" => CLOSE,
        "bold" | "white" => r#"<span class="bold">"#,
        "faint" => r#"<span class="faint">"#,
        "standout" => r#"<span class="standout">"#,
        "underline" => r#"<span class="underline">"#,
        "blink" => r#"<span class="blink">"#,
        "overline" => r#"<span class="overline">"#,

        "black" => r#"<span class="black">"#,
        "darkred" => r#"<span class="darkred">"#,
        "darkgreen" => r#"<span class="darkgreen">"#,
        "brown" | "darkyellow" => r#"<span class="brown">"#,
        "darkblue" => r#"<span class="darkblue">"#,
        "purple" => r#"<span class="purple">"#,
        "teal" => r#"<span class="teal">"#,
        "lightgray" => r#"<span class="lightgray">"#,

        "darkgray" => r#"<span class="darkgray">"#,
        "red" => r#"<span class="red">"#,
        "green" => r#"<span class="green">"#,
        "yellow" => r#"<span class="yellow">"#,
        "blue" => r#"<span class="blue">"#,
        "fuchsia" | "fuscia" => r#"<span class="fuchsia">"#,
        "turquoise" | "darkteal" => r#"<span class="turquoise">"#,
        _ => return None,
    })
}

/// Opening spans for a style attribute, and how many spans they open.
pub fn opening(attr: &str) -> (String, usize) {
    let mut open = String::new();
    let mut depth = 0;
    for span in attr::expand(attr).into_iter().filter_map(code) {
        open.push_str(span);
        if span != CLOSE {
            depth += 1;
        }
    }
    (open, depth)
}

/// Wrap already-escaped `text` in the spans for `attr`. Every opened span
/// is closed; an empty attribute returns the text unchanged.
pub fn htmlize(attr: &str, text: &str) -> String {
    if attr.is_empty() {
        return text.to_owned();
    }
    let (open, depth) = opening(attr);
    format!("{open}{text}{}", CLOSE.repeat(depth))
}

/// Streaming form of [`htmlize`]. `text` is raw source and gets escaped.
pub fn write_htmlized<W: Write + ?Sized>(w: &mut W, attr: &str, text: &[u8]) -> io::Result<()> {
    if attr.is_empty() {
        return write_escaped(w, text);
    }
    let (open, depth) = opening(attr);
    w.write_all(open.as_bytes())?;
    write_escaped(w, text)?;
    for _ in 0..depth {
        w.write_all(CLOSE.as_bytes())?;
    }
    Ok(())
}

fn escape_byte(b: u8) -> Option<&'static str> {
    match b {
        b'&' => Some("&amp;"),
        b'<' => Some("&lt;"),
        b'>' => Some("&gt;"),
        b'\'' => Some("&#39;"),
        b'"' => Some("&#34;"),
        _ => None,
    }
}

/// Escape the five HTML-significant bytes. Everything else, including
/// invalid UTF-8, passes through.
pub fn escape_html(text: &[u8]) -> Cow<'_, [u8]> {
    if !text.iter().any(|&b| escape_byte(b).is_some()) {
        return Cow::Borrowed(text);
    }
    let mut out = Vec::with_capacity(text.len() + text.len() / 4);
    for &b in text {
        match escape_byte(b) {
            Some(entity) => out.extend_from_slice(entity.as_bytes()),
            None => out.push(b),
        }
    }
    Cow::Owned(out)
}

/// [`escape_html`] decoded lossily into a `String`, for labels.
pub fn escape_to_string(text: &[u8]) -> String {
    String::from_utf8_lossy(&escape_html(text)).into_owned()
}

/// Write `text` HTML-escaped, in runs between escaped bytes.
pub fn write_escaped<W: Write + ?Sized>(w: &mut W, text: &[u8]) -> io::Result<()> {
    let mut rest = text;
    while let Some((i, entity)) = rest
        .iter()
        .enumerate()
        .find_map(|(i, &b)| escape_byte(b).map(|entity| (i, entity)))
    {
        w.write_all(&rest[..i])?;
        w.write_all(entity.as_bytes())?;
        rest = &rest[i + 1..];
    }
    w.write_all(rest)
}

/// Every colour name wrapped in its own span, comma separated.
pub fn describe() -> String {
    crate::ansi::NAMES
        .map(|name| htmlize(name, name))
        .join(", ")
}
