//! `wikid ast` command implementation.

use clap::Args;

use super::{InputArg, read_input, write_json};
use crate::error::CliError;

/// Arguments for the ast command.
#[derive(Args)]
pub(crate) struct AstArgs {
    #[command(flatten)]
    input: InputArg,
}

impl AstArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let text = read_input(self.input.input.as_deref())?;
        let article = wikid::parse_text(&text);
        write_json(&article)
    }
}
