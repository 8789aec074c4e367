use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use promerge_rules::export::ExportOptions;
use promerge_rules::loader::LoaderOptions;

use crate::cli::{CliArgs, OutputFormat};

/// CLI configuration loaded from TOML file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Descend into subdirectories of input directories
    #[serde(default)]
    pub recursive: bool,

    /// Leave override directives out of the output
    #[serde(default)]
    pub drop_directives: bool,

    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,

    /// File extensions picked up from input directories
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_extensions() -> Vec<String> {
    LoaderOptions::default().extensions
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            recursive: false,
            drop_directives: false,
            format: OutputFormat::default(),
            extensions: default_extensions(),
        }
    }
}

impl CliConfig {
    /// Return the default config file path: ~/.config/promerge/config.toml
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("could not determine user config directory")?
            .join("promerge");
        Ok(config_dir.join("config.toml"))
    }

    /// Load config from the given path, or the default path.
    /// Returns default config if the default file does not exist; an explicit
    /// path that does not exist is an error.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config_path = match path {
            Some(p) => PathBuf::from(p),
            None => match Self::default_config_path() {
                Ok(p) if p.exists() => p,
                _ => {
                    debug!("No config file, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        debug!(?config_path, "Loading config");
        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config: {}", config_path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("failed to parse config: {}", config_path.display()))?;
        Ok(config)
    }

    /// Loader settings; a `--recursive` flag wins over the file.
    pub fn loader_options(&self, args: &CliArgs) -> LoaderOptions {
        LoaderOptions {
            recursive: args.recursive || self.recursive,
            extensions: self.extensions.clone(),
        }
    }

    pub fn export_options(&self, args: &CliArgs) -> ExportOptions {
        ExportOptions {
            drop_directives: args.drop_directives || self.drop_directives,
        }
    }

    pub fn resolve_format(&self, args: &CliArgs) -> OutputFormat {
        args.format.unwrap_or(self.format)
    }
}

/// Module arguments passed as a JSON file by an Ansible-style caller.
#[derive(Debug, Clone, Deserialize)]
pub struct ModuleArgs {
    #[serde(alias = "RulesPath")]
    pub rules_path: String,
}

impl ModuleArgs {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("could not read configuration file: {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("configuration file not valid JSON: {}", path.display()))
    }
}
