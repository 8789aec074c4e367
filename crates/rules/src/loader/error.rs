//! Error types and load result structures.

use std::path::PathBuf;

use crate::schema::RuleSet;
use crate::selector::SelectorError;

/// Errors that can occur while loading, overriding, or exporting rules.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// Filesystem I/O error.
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parse/deserialization error.
    #[error("YAML parse error in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// YAML serialization of the exported rule set failed.
    #[error("YAML serialization error: {0}")]
    Serialize(#[source] serde_yaml::Error),

    /// Input glob pattern could not be compiled or walked.
    #[error("invalid glob pattern '{pattern}': {reason}")]
    Glob { pattern: String, reason: String },

    /// Input path does not exist or a glob matched nothing.
    #[error("no rule files found for input '{0}'")]
    InputNotFound(String),

    /// An override target pattern is not a valid regular expression.
    #[error("override directive '{directive}' has invalid target pattern '{pattern}': {source}")]
    InvalidPattern {
        directive: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A rewriting directive whose expression has no `{...}` block.
    #[error("override directive '{directive}' has no label selector in expr {expr:?}")]
    MissingSelector { directive: String, expr: String },

    /// A rule that cannot take part in overriding as written.
    #[error("malformed rule '{rule}': {reason}")]
    MalformedRule { rule: String, reason: String },
}

impl RuleError {
    pub(crate) fn malformed(rule: &str, err: SelectorError) -> Self {
        RuleError::MalformedRule {
            rule: rule.to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result alias for rule operations.
pub type Result<T> = std::result::Result<T, RuleError>;

/// Outcome of loading a single rule file.
#[derive(Debug)]
pub struct LoadResult {
    /// Path to the file that was loaded.
    pub path: PathBuf,
    /// Status of the load attempt.
    pub status: LoadStatus,
}

/// Status of a single file load attempt.
#[derive(Debug)]
pub enum LoadStatus {
    /// File parsed into a non-empty rule set.
    Loaded { rule_set: RuleSet },
    /// File parsed but had nothing to merge.
    Skipped { reason: String },
    /// Read or parse error occurred.
    Failed { error: RuleError },
}
