//! Highlighting kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Semantic lexical category assigned to every token.
///
/// A style scheme maps each kind to a style token (an ANSI colour name or an
/// HTML class). `Tag`, `HtmlTag`, `HtmlAttrName`, `HtmlAttrValue` and
/// `Literal` are never produced by the generic classifier; they exist so
/// that richer, consumer-supplied classifiers can share the same style
/// configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Kind {
    Whitespace,
    String,
    Keyword,
    Comment,
    Type,
    Literal,
    Punctuation,
    Plaintext,
    Tag,
    HtmlTag,
    HtmlAttrName,
    HtmlAttrValue,
    Decimal,
}

impl Kind {
    /// Every kind, in declaration order.
    pub const ALL: [Kind; 13] = [
        Kind::Whitespace,
        Kind::String,
        Kind::Keyword,
        Kind::Comment,
        Kind::Type,
        Kind::Literal,
        Kind::Punctuation,
        Kind::Plaintext,
        Kind::Tag,
        Kind::HtmlTag,
        Kind::HtmlAttrName,
        Kind::HtmlAttrValue,
        Kind::Decimal,
    ];

    /// Kinds that carry a configurable style. Whitespace is always unstyled.
    pub const STYLED: [Kind; 12] = [
        Kind::String,
        Kind::Keyword,
        Kind::Comment,
        Kind::Type,
        Kind::Literal,
        Kind::Punctuation,
        Kind::Plaintext,
        Kind::Tag,
        Kind::HtmlTag,
        Kind::HtmlAttrName,
        Kind::HtmlAttrValue,
        Kind::Decimal,
    ];

    /// Configuration name of the kind, as accepted by `-G KIND=COLOR`.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Whitespace => "Whitespace",
            Kind::String => "String",
            Kind::Keyword => "Keyword",
            Kind::Comment => "Comment",
            Kind::Type => "Type",
            Kind::Literal => "Literal",
            Kind::Punctuation => "Punctuation",
            Kind::Plaintext => "Plaintext",
            Kind::Tag => "Tag",
            Kind::HtmlTag => "HTMLTag",
            Kind::HtmlAttrName => "HTMLAttrName",
            Kind::HtmlAttrValue => "HTMLAttrValue",
            Kind::Decimal => "Decimal",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for a name that is not a [`Kind`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown token kind `{0}`")]
pub struct UnknownKind(pub String);

impl FromStr for Kind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownKind(s.to_owned()))
    }
}
