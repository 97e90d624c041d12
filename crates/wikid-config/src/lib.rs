//! Configuration management for wikid.
//!
//! Parses `wikid.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [render]
//! image_path = "https://cdn.example.com/images"
//! attach_path = "${ATTACH_BASE:-https://files.example.com}"
//! ```
//!
//! ## Environment Variable Expansion
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields: `render.image_path`, `render.attach_path`.

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};
use wikid::RenderSettings;

/// CLI settings that override configuration file values.
///
/// Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override image base path.
    pub image_path: Option<String>,
    /// Override attachment base path.
    pub attach_path: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "wikid.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rendering configuration.
    pub render: RenderConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// `[render]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Base URL for relative image paths.
    pub image_path: Option<String>,
    /// Base URL for attachment links.
    pub attach_path: Option<String>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`render.image_path`").
        field: String,
        /// Error message (e.g., "${`CDN_URL`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a base path to be an absolute http(s)/ftp URL or protocol-relative.
fn require_base_url(url: &str, field: &str) -> Result<(), ConfigError> {
    const PREFIXES: [&str; 4] = ["http://", "https://", "ftp://", "//"];

    if !PREFIXES.iter().any(|prefix| url.starts_with(prefix)) {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http://, https://, ftp:// or //"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `wikid.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// CLI settings are applied after loading and take precedence over
    /// config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, or if reading,
    /// parsing, expansion or validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            tracing::debug!("No config file found, using defaults");
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Settings for the renderer.
    #[must_use]
    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            image_path: self.render.image_path.clone(),
            attach_path: self.render.attach_path.clone(),
        }
    }

    /// Validate configuration values.
    ///
    /// Configured base paths must be non-empty absolute URLs. Called
    /// automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref image_path) = self.render.image_path {
            require_non_empty(image_path, "render.image_path")?;
            require_base_url(image_path, "render.image_path")?;
        }
        if let Some(ref attach_path) = self.render.attach_path {
            require_non_empty(attach_path, "render.attach_path")?;
            require_base_url(attach_path, "render.attach_path")?;
        }
        Ok(())
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(image_path) = &settings.image_path {
            self.render.image_path = Some(image_path.clone());
        }
        if let Some(attach_path) = &settings.attach_path {
            self.render.attach_path = Some(attach_path.clone());
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        tracing::debug!(path = %path.display(), "Loading config");

        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());
        config.validate()?;

        Ok(config)
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.render.image_path {
            self.render.image_path = Some(expand::expand_env(path, "render.image_path")?);
        }
        if let Some(ref path) = self.render.attach_path {
            self.render.attach_path = Some(expand::expand_env(path, "render.attach_path")?);
        }
        Ok(())
    }
}
