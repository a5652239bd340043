//! Site configuration management for `tola.toml`.
//!
//! # Sections
//!
//! | Section    | Purpose                                         |
//! |------------|-------------------------------------------------|
//! | `[build]`  | Content and output directories                  |
//! | `[styles]` | Which signals the stylesheet handlers join      |

mod error;
mod section;
mod util;

pub use error::ConfigError;
pub use section::{BuildConfig, StylesConfig};
pub use util::normalize_path;

use util::find_config_file;

use crate::{cli::Cli, debug, log};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Root configuration structure representing tola.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Build paths
    #[serde(default)]
    pub build: BuildConfig,

    /// Stylesheet handler settings
    #[serde(default)]
    pub styles: StylesConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file; without one, defaults
    /// are used and the project root is the current directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        crate::logger::set_verbose(cli.verbose);
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let (mut config, root) = match find_config_file(&cli.config) {
            Some(path) => {
                let root = path.parent().map(Path::to_path_buf).unwrap_or_default();
                debug!("config"; "using {}", normalize_path(&path).display());
                (Self::from_path(&path)?, root)
            }
            None => {
                log!("config"; "`{}` not found, using defaults", cli.config.display());
                (Self::default(), cwd)
            }
        };

        Self::update_option(&mut config.build.content, cli.content.as_ref());
        Self::update_option(&mut config.build.output, cli.output.as_ref());
        config.normalize_paths(&root);
        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring: {}", display_path, fields.join(", "));
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Resolve build directories against `root` to absolute paths.
    pub fn normalize_paths(&mut self, root: &Path) {
        let root = normalize_path(root);
        self.build.content = normalize_path(&root.join(&self.build.content));
        self.build.output = normalize_path(&root.join(&self.build.output));
    }

    /// Validate configuration.
    ///
    /// The output directory may not exist yet; content must.
    pub fn validate(&self) -> Result<()> {
        if !self.build.content.is_dir() {
            bail!(ConfigError::Validation(format!(
                "content directory `{}` does not exist",
                self.build.content.display()
            )));
        }
        if self.build.output == self.build.content {
            bail!(ConfigError::Validation(
                "content and output directories must differ".into()
            ));
        }
        Ok(())
    }
}
