//! A single alerting or recording rule.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One entry of a group's `rules` list.
///
/// `enabled` and `override` are input-only: they drive the override engine
/// and are cleared by the exporter before serialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Rule {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub alert: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub record: String,
    #[serde(default)]
    pub expr: String,
    #[serde(default, rename = "for", skip_serializing_if = "Option::is_none")]
    pub for_duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_firing_for: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,

    /// Unset and `true` both mean "emit"; `false` drops the rule on export.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Target-name patterns. Non-empty makes this rule an override directive.
    #[serde(default, rename = "override", skip_serializing_if = "Vec::is_empty")]
    pub override_targets: Vec<String>,
}

impl Rule {
    /// Whether this rule rewrites or disables other rules.
    pub fn is_directive(&self) -> bool {
        !self.override_targets.is_empty()
    }

    /// Whether this rule has been explicitly switched off.
    pub fn is_disabled(&self) -> bool {
        self.enabled == Some(false)
    }

    /// Alert name, falling back to the record name, for log and error messages.
    pub fn display_name(&self) -> &str {
        if !self.alert.is_empty() {
            &self.alert
        } else if !self.record.is_empty() {
            &self.record
        } else {
            "<unnamed>"
        }
    }

    /// Drop the override-only fields so they never reach the output.
    pub(crate) fn strip_override_fields(&mut self) {
        self.enabled = None;
        self.override_targets.clear();
    }
}
