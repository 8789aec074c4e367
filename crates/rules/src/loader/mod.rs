//! Filesystem rule loader.
//!
//! Resolves files, directories, and glob patterns into an ordered list of
//! rule files and parses each one into a [`RuleSet`](crate::schema::RuleSet).

mod core;
mod error;

#[cfg(test)]
mod tests;

pub use self::core::{parse_rule_set, LoaderOptions, RuleLoader};
pub use self::error::{LoadResult, LoadStatus, Result, RuleError};
