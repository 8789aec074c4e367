//! End-to-end run: load, merge, apply overrides, export.

use tracing::info;

use crate::export::{export, ExportOptions};
use crate::loader::{LoadResult, LoadStatus, Result, RuleLoader};
use crate::merge::merge;
use crate::overrides::apply_all;
use crate::schema::RuleSet;

/// Merge `rule_sets`, apply every override directive, and serialize.
pub fn run<I>(rule_sets: I, options: &ExportOptions) -> Result<String>
where
    I: IntoIterator<Item = RuleSet>,
{
    let mut merged = merge(rule_sets);
    info!(groups = merged.groups.len(), rules = merged.rules().count(), "merged rule sets");
    apply_all(&mut merged)?;
    export(merged, options)
}

/// Keep loaded rule sets in order; the first failed file aborts.
pub fn collect_loaded(results: Vec<LoadResult>) -> Result<Vec<RuleSet>> {
    let mut sets = Vec::with_capacity(results.len());
    for result in results {
        match result.status {
            LoadStatus::Loaded { rule_set } => sets.push(rule_set),
            LoadStatus::Skipped { .. } => {}
            LoadStatus::Failed { error } => return Err(error),
        }
    }
    Ok(sets)
}

/// Resolve `inputs`, load every file, and run the merge.
pub fn run_inputs<S: AsRef<str>>(
    loader: &RuleLoader,
    inputs: &[S],
    options: &ExportOptions,
) -> Result<String> {
    let paths = loader.resolve_inputs(inputs)?;
    info!(files = paths.len(), "resolved rule files");
    let sets = collect_loaded(loader.load_all(&paths))?;
    run(sets, options)
}
