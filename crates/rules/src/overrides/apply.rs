//! Applying override directives to a rule set in place.

use tracing::{debug, info};

use crate::loader::{Result, RuleError};
use crate::schema::{Rule, RuleSet};
use crate::selector::{append_selector, extract_selector_block, negate_selector};

use super::Directive;

/// Counts of rules touched by one or more directives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyReport {
    pub directives: usize,
    pub rewritten: usize,
    pub disabled: usize,
}

impl ApplyReport {
    fn absorb(&mut self, other: ApplyReport) {
        self.directives += other.directives;
        self.rewritten += other.rewritten;
        self.disabled += other.disabled;
    }
}

/// Whether `rule` may be targeted by `directive` at all.
fn is_candidate(rule: &Rule, directive: &Directive) -> bool {
    !rule.alert.is_empty()
        && rule.alert != directive.name
        && !rule.is_directive()
        && !rule.is_disabled()
}

/// Apply one directive to every matching rule of `rule_set`.
///
/// Matched rules are either disabled or have the directive's negated
/// selector injected into their expression. The directive rule itself and
/// other directives are never modified, and no rule is removed here.
pub fn apply(rule_set: &mut RuleSet, directive: &Directive) -> Result<ApplyReport> {
    let mut report = ApplyReport {
        directives: 1,
        ..Default::default()
    };
    // Computed on first rewrite; a disable-only directive needs no selector.
    let mut negated: Option<String> = None;

    for rule in rule_set.rules_mut() {
        if !is_candidate(rule, directive) {
            continue;
        }
        let Some(pattern) = directive.matching_target(&rule.alert) else {
            continue;
        };

        if directive.disables(&rule.expr) {
            debug!(directive = %directive.name, rule = %rule.alert, pattern = pattern.as_str(), "disabled rule");
            rule.enabled = Some(false);
            report.disabled += 1;
            continue;
        }

        if negated.is_none() {
            let body = extract_selector_block(&directive.expr).ok_or_else(|| {
                RuleError::MissingSelector {
                    directive: directive.name.clone(),
                    expr: directive.expr.clone(),
                }
            })?;
            negated = Some(negate_selector(body));
        }
        let terms = negated.as_deref().unwrap_or_default();

        rule.expr = append_selector(terms, &rule.expr)
            .map_err(|e| RuleError::malformed(&rule.alert, e))?;
        debug!(directive = %directive.name, rule = %rule.alert, expr = %rule.expr, "rewrote rule");
        report.rewritten += 1;
    }

    Ok(report)
}

/// Apply every directive found in `rule_set`, in traversal order.
///
/// Directives are snapshotted before any of them runs. Since directives are
/// never targets, later directives still observe earlier rewrites and
/// disablements on the rules they match.
pub fn apply_all(rule_set: &mut RuleSet) -> Result<ApplyReport> {
    let directives = rule_set
        .directives()
        .map(Directive::compile)
        .collect::<Result<Vec<_>>>()?;

    let mut total = ApplyReport::default();
    for directive in &directives {
        total.absorb(apply(rule_set, directive)?);
    }

    info!(
        directives = total.directives,
        rewritten = total.rewritten,
        disabled = total.disabled,
        "applied override directives"
    );
    Ok(total)
}
