use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// Merge Prometheus rule files and apply override directives.
///
/// Inputs may be rule files, directories of rule files, or glob patterns.
/// The merged rule set is written to stdout.
#[derive(Parser, Debug)]
#[command(name = "promerge", version, about)]
pub struct CliArgs {
    /// Rule files, directories, or glob patterns, merged in the order given
    #[arg(env = "PROMERGE_INPUTS", value_delimiter = ',')]
    pub inputs: Vec<String>,

    /// JSON module-args file carrying a `rules_path` (Ansible module calling convention)
    #[arg(long)]
    pub args_file: Option<String>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Also write the merged rules to this file (replaces stdout in yaml format)
    #[arg(long, short)]
    pub output: Option<String>,

    /// Descend into subdirectories of input directories
    #[arg(long)]
    pub recursive: bool,

    /// Leave override directive rules out of the output entirely
    #[arg(long)]
    pub drop_directives: bool,

    /// Path to config file (default: ~/.config/promerge/config.toml)
    #[arg(long, env = "PROMERGE_CONFIG")]
    pub config: Option<String>,
}

/// How the result is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The merged rule file
    #[default]
    Yaml,
    /// A `{msg, alerts, changed, failed}` response envelope
    Json,
}
