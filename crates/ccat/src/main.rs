//! ccat command-line entry point.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use ccat::{init_tracing, run, write_palette, Cli, CliError};
use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match ccat(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_broken_pipe() => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ccat: {e}");
            ExitCode::FAILURE
        }
    }
}

fn ccat(cli: Cli) -> Result<(), CliError> {
    let show_palette = cli.palette;
    let options = cli.into_options()?;

    let stdout = io::stdout();
    let is_tty = stdout.is_terminal();
    let mut out = io::BufWriter::new(stdout.lock());

    if show_palette {
        return write_palette(&options, &mut out);
    }
    run(&options, &mut io::stdin().lock(), &mut out, is_tty)
}
