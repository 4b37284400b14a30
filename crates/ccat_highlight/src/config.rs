//! Style configuration: the `Kind -> style token` resolver.
//!
//! A style token is an ANSI colour name (`"darkblue"`, `"*red*"`) or an
//! HTML class (`"kwd"`), depending on which printer consumes it. The empty
//! string means "pass the lexeme through unstyled".

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Kind;

/// One style token per styleable [`Kind`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct StyleConfig {
    pub string: String,
    pub keyword: String,
    pub comment: String,
    pub r#type: String,
    pub literal: String,
    pub punctuation: String,
    pub plaintext: String,
    pub tag: String,
    #[serde(rename = "HTMLTag")]
    pub html_tag: String,
    #[serde(rename = "HTMLAttrName")]
    pub html_attr_name: String,
    #[serde(rename = "HTMLAttrValue")]
    pub html_attr_value: String,
    pub decimal: String,
}

impl StyleConfig {
    /// Build a config from twelve tokens in [`Kind::STYLED`] order.
    fn from_tokens(tokens: [&str; 12]) -> Self {
        let [string, keyword, comment, ty, literal, punctuation, plaintext, tag, html_tag, html_attr_name, html_attr_value, decimal] =
            tokens.map(str::to_owned);
        StyleConfig {
            string,
            keyword,
            comment,
            r#type: ty,
            literal,
            punctuation,
            plaintext,
            tag,
            html_tag,
            html_attr_name,
            html_attr_value,
            decimal,
        }
    }

    /// Class names of the google-code-prettify convention.
    pub fn prettify() -> Self {
        Self::from_tokens([
            "str", "kwd", "com", "typ", "lit", "pun", "pln", "tag", "htm", "atn", "atv", "dec",
        ])
    }

    /// Terminal palette for light backgrounds.
    pub fn light() -> Self {
        Self::from_tokens([
            "brown", "darkblue", "lightgray", "teal", "teal", "darkred", "darkblue", "blue",
            "green", "blue", "green", "darkblue",
        ])
    }

    /// Terminal palette for dark backgrounds.
    pub fn dark() -> Self {
        Self::from_tokens([
            "brown", "blue", "darkgray", "turquoise", "turquoise", "red", "blue", "blue", "green",
            "blue", "green", "blue",
        ])
    }

    /// Resolve the style token for `kind`. Whitespace is never styled.
    pub fn style(&self, kind: Kind) -> &str {
        match kind {
            Kind::Whitespace => "",
            Kind::String => &self.string,
            Kind::Keyword => &self.keyword,
            Kind::Comment => &self.comment,
            Kind::Type => &self.r#type,
            Kind::Literal => &self.literal,
            Kind::Punctuation => &self.punctuation,
            Kind::Plaintext => &self.plaintext,
            Kind::Tag => &self.tag,
            Kind::HtmlTag => &self.html_tag,
            Kind::HtmlAttrName => &self.html_attr_name,
            Kind::HtmlAttrValue => &self.html_attr_value,
            Kind::Decimal => &self.decimal,
        }
    }

    fn slot_mut(&mut self, kind: Kind) -> Option<&mut String> {
        Some(match kind {
            Kind::Whitespace => return None,
            Kind::String => &mut self.string,
            Kind::Keyword => &mut self.keyword,
            Kind::Comment => &mut self.comment,
            Kind::Type => &mut self.r#type,
            Kind::Literal => &mut self.literal,
            Kind::Punctuation => &mut self.punctuation,
            Kind::Plaintext => &mut self.plaintext,
            Kind::Tag => &mut self.tag,
            Kind::HtmlTag => &mut self.html_tag,
            Kind::HtmlAttrName => &mut self.html_attr_name,
            Kind::HtmlAttrValue => &mut self.html_attr_value,
            Kind::Decimal => &mut self.decimal,
        })
    }

    /// Override the entry named `name` (a [`Kind`] name such as
    /// `"Keyword"`). Returns `false` and leaves the config untouched when the
    /// name is unknown or not styleable.
    pub fn set(&mut self, name: &str, value: &str) -> bool {
        let Ok(kind) = name.parse::<Kind>() else {
            return false;
        };
        match self.slot_mut(kind) {
            Some(slot) => {
                value.clone_into(slot);
                true
            }
            None => false,
        }
    }

    /// `(kind, style)` pairs in [`Kind::STYLED`] order.
    pub fn entries(&self) -> impl Iterator<Item = (Kind, &str)> + '_ {
        Kind::STYLED.into_iter().map(|kind| (kind, self.style(kind)))
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::prettify()
    }
}

impl fmt::Display for StyleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<(&str, &str)> =
            self.entries().map(|(kind, style)| (kind.name(), style)).collect();
        entries.sort_unstable();
        for (i, (name, style)) in entries.into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}={style}")?;
        }
        Ok(())
    }
}
