//! Rule files: a top-level `groups` list of named rule groups.

use serde::{Deserialize, Serialize};

use super::Rule;

/// Contents of one rule file, or of several files after merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RuleSet {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<Group>,
}

/// A named, ordered collection of rules evaluated together.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Group {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl RuleSet {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate every rule in group order, then rule order.
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.groups.iter().flat_map(|g| g.rules.iter())
    }

    pub fn rules_mut(&mut self) -> impl Iterator<Item = &mut Rule> {
        self.groups.iter_mut().flat_map(|g| g.rules.iter_mut())
    }

    /// Override directives in traversal order.
    pub fn directives(&self) -> impl Iterator<Item = &Rule> {
        self.rules().filter(|r| r.is_directive())
    }
}
