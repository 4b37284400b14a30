//! `ccat`: `cat` with syntax highlighting.
//!
//! The binary is a thin shell over this library: [`Cli`] parses flags into
//! [`Options`], and [`run`] reads each input and writes it through one of
//! the `ccat_highlight` printers.

mod cli;
mod error;
mod options;
mod run;

use std::sync::Once;

pub use cli::Cli;
pub use error::CliError;
pub use options::{Background, ColorMode, Options, OutputMode, STDIN};
pub use run::{ccat_file, run, write_palette};

/// Environment variable holding the tracing filter, e.g. `CCAT_LOG=debug`.
pub const LOG_ENV: &str = "CCAT_LOG";

static TRACING_INIT: Once = Once::new();

/// Install a hierarchical tracing subscriber on stderr, only when
/// [`LOG_ENV`] is set. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var_os(LOG_ENV).is_some() {
            tracing_subscriber::registry()
                .with(EnvFilter::from_env(LOG_ENV))
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_writer(std::io::stderr)
                        .with_targets(true),
                )
                .init();
        }
    });
}
