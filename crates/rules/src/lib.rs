//! Prometheus rule-file merging with override directives.
//!
//! This crate provides:
//! - YAML schema for rule files (`groups` → `rules`)
//! - Filesystem loader for files, directories, and glob patterns
//! - Label-selector negation and injection on query expressions
//! - Override directives that rewrite or disable the rules they target
//! - Merging and export of the consolidated rule set

pub mod export;
pub mod loader;
pub mod merge;
pub mod overrides;
pub mod pipeline;
pub mod schema;
pub mod selector;
