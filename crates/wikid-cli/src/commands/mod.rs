//! CLI command implementations.

pub(crate) mod ast;
pub(crate) mod render;
pub(crate) mod tokens;

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

pub(crate) use ast::AstArgs;
pub(crate) use render::RenderArgs;
pub(crate) use tokens::TokensArgs;

use crate::error::CliError;

/// Read markup from a file, or from stdin when the path is absent or `-`.
pub(crate) fn read_input(input: Option<&Path>) -> Result<String, CliError> {
    match input {
        Some(path) if path != Path::new("-") => {
            std::fs::read_to_string(path).map_err(|source| CliError::ReadInput {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Write text to a file, or to stdout when no path is given.
pub(crate) fn write_output(output: Option<&Path>, text: &str) -> Result<(), CliError> {
    match output {
        Some(path) => std::fs::write(path, text).map_err(|source| CliError::WriteOutput {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.write_all(b"\n")?;
            stdout.flush()?;
            Ok(())
        }
    }
}

/// Pretty-print a value as JSON to stdout.
pub(crate) fn write_json<T: serde::Serialize>(value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value)?;
    write_output(None, &json)
}

/// Input argument shared by all commands.
#[derive(clap::Args)]
pub(crate) struct InputArg {
    /// Markup file to read (default: stdin, also `-`).
    pub(crate) input: Option<PathBuf>,
}
