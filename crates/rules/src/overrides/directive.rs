//! Compiled, read-only view of an override directive rule.

use regex::Regex;

use crate::loader::{Result, RuleError};
use crate::schema::Rule;

/// Whole-word matcher for one `override` entry.
///
/// The entry is a regular expression bounded by `\b` on both sides, so
/// `HighCPU` matches `HighCPU` but neither `HighCPUWarning` nor `NotHighCPU`.
#[derive(Debug, Clone)]
pub struct TargetPattern {
    source: String,
    regex: Regex,
}

impl TargetPattern {
    pub fn new(pattern: &str) -> std::result::Result<Self, regex::Error> {
        let regex = Regex::new(&format!(r"\b(?:{pattern})\b"))?;
        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}

/// An override directive detached from the rule set it was found in.
///
/// Holds its own copy of the directive's fields so the rule set can be
/// borrowed mutably while the directive is applied.
#[derive(Debug, Clone)]
pub struct Directive {
    pub name: String,
    pub expr: String,
    pub enabled: Option<bool>,
    pub targets: Vec<TargetPattern>,
}

impl Directive {
    /// Compile every target pattern of `rule`.
    pub fn compile(rule: &Rule) -> Result<Self> {
        let targets = rule
            .override_targets
            .iter()
            .map(|pattern| {
                TargetPattern::new(pattern).map_err(|source| RuleError::InvalidPattern {
                    directive: rule.display_name().to_string(),
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            name: rule.alert.clone(),
            expr: rule.expr.clone(),
            enabled: rule.enabled,
            targets,
        })
    }

    /// First target pattern matching `name`, if any.
    pub fn matching_target(&self, name: &str) -> Option<&TargetPattern> {
        self.targets.iter().find(|t| t.matches(name))
    }

    /// Whether this directive only switches `target_expr` off.
    ///
    /// True when the directive is explicitly `enabled: false` and its expr
    /// is empty or identical to the target's.
    pub fn disables(&self, target_expr: &str) -> bool {
        self.enabled == Some(false) && (self.expr.is_empty() || self.expr == target_expr)
    }
}
