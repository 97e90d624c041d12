//! `wikid tokens` command implementation.

use clap::Args;

use super::{InputArg, read_input, write_json};
use crate::error::CliError;

/// Arguments for the tokens command.
#[derive(Args)]
pub(crate) struct TokensArgs {
    #[command(flatten)]
    input: InputArg,
}

impl TokensArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let text = read_input(self.input.input.as_deref())?;
        let tokens = wikid::tokenize(&text);
        tracing::debug!(count = tokens.len(), "Tokenized input");
        write_json(&tokens)
    }
}
