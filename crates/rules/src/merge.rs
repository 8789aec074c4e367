//! Concatenation of rule sets loaded from several files.

use crate::schema::RuleSet;

/// Concatenate the groups of every input, in input order.
///
/// Groups are neither deduplicated nor merged by name: two files that both
/// define a `node` group yield two `node` groups.
pub fn merge<I>(rule_sets: I) -> RuleSet
where
    I: IntoIterator<Item = RuleSet>,
{
    let groups = rule_sets.into_iter().flat_map(|set| set.groups).collect();
    RuleSet { groups }
}
