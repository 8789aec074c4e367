//! Final pruning and serialization of an overridden rule set.

use tracing::debug;

use crate::loader::{Result, RuleError};
use crate::schema::RuleSet;

/// Knobs for the export pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportOptions {
    /// Remove override directives entirely instead of keeping them as plain rules.
    pub drop_directives: bool,
}

/// Remove disabled rules and override-only fields, then empty groups.
///
/// Relative order of the surviving groups and rules is unchanged.
pub fn prune(mut rule_set: RuleSet, options: &ExportOptions) -> RuleSet {
    for group in &mut rule_set.groups {
        let before = group.rules.len();
        group
            .rules
            .retain(|r| !r.is_disabled() && !(options.drop_directives && r.is_directive()));
        for rule in &mut group.rules {
            rule.strip_override_fields();
        }
        if group.rules.len() != before {
            debug!(group = %group.name, removed = before - group.rules.len(), "pruned rules");
        }
    }
    rule_set.groups.retain(|g| !g.rules.is_empty());
    rule_set
}

/// Prune `rule_set` and serialize it as a rule file.
pub fn export(rule_set: RuleSet, options: &ExportOptions) -> Result<String> {
    let pruned = prune(rule_set, options);
    serde_yaml::to_string(&pruned).map_err(RuleError::Serialize)
}
