//! wikid CLI - wiki markup to HTML.
//!
//! Provides commands for:
//! - `render`: Convert markup to an HTML fragment
//! - `tokens`: Dump the lexer's token stream as JSON
//! - `ast`: Dump the parsed article as JSON

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{AstArgs, RenderArgs, TokensArgs};
use output::Output;

/// wikid - wiki markup to sanitized HTML.
#[derive(Parser)]
#[command(name = "wikid", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert markup to HTML.
    Render(RenderArgs),
    /// Print the token stream as JSON.
    Tokens(TokensArgs),
    /// Print the parsed article as JSON.
    Ast(AstArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = matches!(&cli.command, Commands::Render(args) if args.verbose);

    // --verbose enables DEBUG level, otherwise use RUST_LOG
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Tokens(args) => args.execute(),
        Commands::Ast(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
