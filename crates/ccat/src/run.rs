//! Reading inputs and writing them out highlighted.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use ccat_highlight::{
    ansi, build_document, html, print, AnsiPrinter, HtmlColorPrinter, Kind,
};
use ccat_lexer_core::{Scanner, SourceBuffer};

use crate::options::{Options, OutputMode, STDIN};
use crate::CliError;

/// Process every input in order, stopping at the first failure.
pub fn run<R, W>(options: &Options, stdin: &mut R, out: &mut W, is_tty: bool) -> Result<(), CliError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    for path in &options.files {
        ccat_file(path, options, stdin, out, is_tty)?;
    }
    out.flush()?;
    Ok(())
}

/// Read one input and write it in the configured output mode.
///
/// In ANSI mode without colour (`--color never`, or `auto` off a terminal)
/// the input is copied verbatim.
#[tracing::instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn ccat_file<R, W>(
    path: &Path,
    options: &Options,
    stdin: &mut R,
    out: &mut W,
    is_tty: bool,
) -> Result<(), CliError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let buf = read_input(path, stdin, options.max_size)?;
    match options.output {
        OutputMode::Ansi if options.color.should_use_colors(is_tty) => {
            print(Scanner::new(&buf), out, &AnsiPrinter::new(&options.palette))?;
        }
        OutputMode::Ansi => out.write_all(buf.as_bytes())?,
        OutputMode::Html => {
            let printer = HtmlColorPrinter::new(options.palette.clone());
            print(Scanner::new(&buf), out, &printer)?;
        }
        OutputMode::Json => {
            let doc = build_document(buf.as_bytes(), 0);
            serde_json::to_writer_pretty(&mut *out, &doc)?;
            out.write_all(b"\n")?;
        }
    }
    Ok(())
}

/// Read `path` (or standard input for `-`) in full, enforcing `max_size`.
///
/// Files are checked against the limit before they are opened; standard
/// input can only be checked after it has been read.
fn read_input<R: Read + ?Sized>(
    path: &Path,
    stdin: &mut R,
    max_size: Option<u64>,
) -> Result<SourceBuffer, CliError> {
    let name = path.display().to_string();
    let read_error = |source| CliError::Read {
        path: name.clone(),
        source,
    };

    if path.as_os_str() == STDIN {
        let buf = SourceBuffer::from_reader(&mut *stdin).map_err(read_error)?;
        check_size(&name, u64::from(buf.len()), max_size)?;
        return Ok(buf);
    }

    if max_size.is_some() {
        let len = fs::metadata(path).map_err(read_error)?.len();
        check_size(&name, len, max_size)?;
    }
    let file = File::open(path).map_err(read_error)?;
    let buf = SourceBuffer::from_reader(file).map_err(read_error)?;
    tracing::debug!(bytes = buf.len(), "read input");
    Ok(buf)
}

fn check_size(name: &str, len: u64, max_size: Option<u64>) -> Result<(), CliError> {
    match max_size {
        Some(limit) if len > limit => Err(CliError::TooLarge {
            path: name.to_owned(),
            limit,
        }),
        _ => Ok(()),
    }
}

/// Write the effective palette, one `Kind=colour` line per kind sorted by
/// name with the colour rendered in itself, then every available colour.
pub fn write_palette<W: Write + ?Sized>(options: &Options, out: &mut W) -> Result<(), CliError> {
    let html_output = options.output == OutputMode::Html;
    let mut entries: Vec<(Kind, &str)> = options.palette.entries().collect();
    entries.sort_unstable_by_key(|(kind, _)| kind.name());

    for (kind, style) in entries {
        let shown = if html_output {
            html::htmlize(style, &html::escape_to_string(style.as_bytes()))
        } else {
            ansi::colorize(style, style)
        };
        writeln!(out, "{kind}={shown}")?;
    }
    let available = if html_output {
        html::describe()
    } else {
        ansi::describe()
    };
    writeln!(out, "\nAvailable colors: {available}")?;
    out.flush()?;
    Ok(())
}
