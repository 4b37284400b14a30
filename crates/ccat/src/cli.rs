//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::options::{Background, ColorMode, Options, OutputMode, STDIN};
use crate::CliError;

#[derive(Debug, Parser)]
#[command(
    name = "ccat",
    version,
    about = "Concatenate FILE(s), or standard input, to standard output with colorized output.",
    disable_version_flag = true
)]
pub struct Cli {
    /// Files to print; `-` or none reads standard input
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Set to "light" or "dark" depending on the terminal's background
    #[arg(long, value_enum, default_value_t = Background::Light)]
    pub bg: Background,

    /// When to colorize output
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Output HTML instead of ANSI escapes
    #[arg(long, conflicts_with = "json")]
    pub html: bool,

    /// Output the highlighted line document as JSON
    #[arg(long)]
    pub json: bool,

    /// Set a color code, e.g. `-G String=blue -G Keyword="*red*"`
    #[arg(short = 'G', long = "color-code", value_name = "KIND=COLOR", value_parser = parse_color_code)]
    pub color_codes: Vec<(String, String)>,

    /// Print the effective palette and exit
    #[arg(long)]
    pub palette: bool,

    /// Refuse inputs larger than BYTES
    #[arg(long, value_name = "BYTES")]
    pub max_size: Option<u64>,

    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    pub version: Option<bool>,
}

impl Cli {
    /// Resolve flags into [`Options`], applying `-G` overrides to the
    /// background palette.
    pub fn into_options(self) -> Result<Options, CliError> {
        let mut palette = self.bg.palette();
        for (name, value) in &self.color_codes {
            if !palette.set(name, value) {
                return Err(CliError::BadColorCode { name: name.clone() });
            }
        }

        let output = if self.json {
            OutputMode::Json
        } else if self.html {
            OutputMode::Html
        } else {
            OutputMode::Ansi
        };

        let files = if self.files.is_empty() {
            vec![PathBuf::from(STDIN)]
        } else {
            self.files
        };

        Ok(Options {
            files,
            palette,
            color: self.color,
            output,
            max_size: self.max_size,
        })
    }
}

/// Split `KIND=COLOR` at the first `=`.
fn parse_color_code(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((name, value)) => Ok((name.to_owned(), value.to_owned())),
        None => Err("flag should be in the format of <name>=<value>".to_owned()),
    }
}

#[cfg(test)]
mod tests;
