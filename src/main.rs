//! markdown2html CLI - convert a Markdown file to an HTML file
//!
//! Usage: `markdown2html <input.md> <output.html>`

use std::path::PathBuf;
use std::process::ExitCode;

use markdown2html::{convert_file, ConvertError};
use tracing_subscriber::EnvFilter;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("Usage: ./markdown2html.py README.md README.html")]
    Usage,

    #[error(transparent)]
    Convert(#[from] ConvertError),
}

impl CliError {
    /// Usage and missing-input errors print their bare message; anything
    /// else gets an `Error:` prefix.
    fn report(&self) -> String {
        match self {
            Self::Usage | Self::Convert(ConvertError::MissingInput { .. }) => self.to_string(),
            Self::Convert(_) => format!("Error: {self}"),
        }
    }
}

fn main() -> ExitCode {
    // RUST_LOG overrides; the default keeps the success path silent.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err.report());
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    // Arguments past the second are ignored.
    let mut args = std::env::args_os().skip(1);
    let (Some(input), Some(output)) = (args.next(), args.next()) else {
        return Err(CliError::Usage);
    };

    convert_file(&PathBuf::from(input), &PathBuf::from(output))?;
    Ok(())
}
