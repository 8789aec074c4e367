//! YAML schema types for Prometheus-style rule files.
//!
//! - `RuleSet`: top-level `groups` list, one per file or merged
//! - `Group`: named, ordered rule list
//! - `Rule`: alerting/recording rule plus the input-only override fields

mod rule;
mod rule_set;

pub use rule::*;
pub use rule_set::*;
