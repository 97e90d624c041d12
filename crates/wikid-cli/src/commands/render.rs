//! `wikid render` command implementation.

use std::path::PathBuf;

use clap::Args;
use wikid_config::{CliSettings, Config};

use super::{InputArg, read_input, write_output};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    #[command(flatten)]
    input: InputArg,

    /// Write HTML to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Base URL for relative image paths (overrides config).
    #[arg(long, env = "WIKID_IMAGE_PATH")]
    image_path: Option<String>,

    /// Base URL for attachment links (overrides config).
    #[arg(long, env = "WIKID_ATTACH_PATH")]
    attach_path: Option<String>,

    /// Path to configuration file (default: auto-discover wikid.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output (debug logs for parser and renderer decisions).
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            image_path: self.image_path,
            attach_path: self.attach_path,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        if let Some(warning) = override_warning(&config) {
            output.warning(&warning);
        }

        if self.verbose
            && let Some(path) = &config.config_path
        {
            output.info(&format!("Config: {}", path.display()));
        }

        let text = read_input(self.input.input.as_deref())?;
        let html = wikid::to_html(&text, &config.render_settings());

        if html.is_empty() && !text.trim().is_empty() {
            output.warning("Input produced no HTML");
        }

        write_output(self.output.as_deref(), &html)?;

        if let Some(path) = &self.output {
            output.success(&format!("Wrote {}", path.display()));
        }
        Ok(())
    }
}

/// Describe why CLI overrides leave the config invalid, if they do.
///
/// File values are validated on load. Overrides are applied afterwards and
/// are only reported, never rejected.
fn override_warning(config: &Config) -> Option<String> {
    config
        .validate()
        .err()
        .map(|err| format!("Warning: {err}"))
}
