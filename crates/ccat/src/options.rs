//! Resolved run configuration.

use std::path::PathBuf;

use ccat_highlight::StyleConfig;

/// Path that means "read standard input".
pub const STDIN: &str = "-";

/// When to colour terminal output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    /// Colour only when standard output is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// For `Auto`, `is_tty` decides; the other modes ignore it.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Terminal background the palette is chosen for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Background {
    #[default]
    Light,
    Dark,
}

impl Background {
    pub fn palette(self) -> StyleConfig {
        match self {
            Background::Light => StyleConfig::light(),
            Background::Dark => StyleConfig::dark(),
        }
    }
}

/// What each input is rendered as.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// ANSI colours, subject to [`ColorMode`].
    #[default]
    Ansi,
    /// HTML spans named after the palette colours.
    Html,
    /// The structured line document, as JSON.
    Json,
}

#[derive(Clone, Debug)]
pub struct Options {
    /// Inputs in order; [`STDIN`] reads standard input.
    pub files: Vec<PathBuf>,
    pub palette: StyleConfig,
    pub color: ColorMode,
    pub output: OutputMode,
    /// Refuse inputs larger than this many bytes.
    pub max_size: Option<u64>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            files: vec![PathBuf::from(STDIN)],
            palette: StyleConfig::light(),
            color: ColorMode::Auto,
            output: OutputMode::Ansi,
            max_size: None,
        }
    }
}
