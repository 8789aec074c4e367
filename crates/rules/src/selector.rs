//! String-level label-selector operations on query expressions.
//!
//! Only the span from the first `{` to the last `}` is ever considered, and
//! selector bodies are split on bare commas. An expression with two vector
//! selectors (e.g. `a{x="1"} / b{y="2"}`) is therefore treated as a single
//! block crossing both, and quoted values containing commas are split.

/// Failures of the pure expression transforms.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    /// Target expression has no tokens to attach a selector to.
    #[error("expression is empty")]
    EmptyExpression,

    /// Expression opens a selector block that is never closed.
    #[error("unterminated label selector in {0:?}")]
    Unterminated(String),
}

/// Comparison operators in the order they must be checked.
///
/// `!=` and `!~` come first because plain `=` is a substring of `!=` and
/// `=~`; `=~` comes before `=` for the same reason.
const NEGATIONS: [(&str, &str); 4] = [("!=", "="), ("!~", "=~"), ("=~", "!~"), ("=", "!=")];

/// Body of the selector block: text between the first `{` and the last `}`.
pub fn extract_selector_block(expr: &str) -> Option<&str> {
    let open = expr.find('{')?;
    let close = expr.rfind('}')?;
    if close < open {
        return None;
    }
    Some(&expr[open + 1..close])
}

/// Flip the first operator found in `term`, checking in [`NEGATIONS`] order.
pub fn negate_term(term: &str) -> String {
    for (from, to) in NEGATIONS {
        if term.contains(from) {
            return term.replacen(from, to, 1);
        }
    }
    term.to_string()
}

/// Negate every comma-separated term of a selector body.
pub fn negate_selector(body: &str) -> String {
    body.split(',').map(negate_term).collect::<Vec<_>>().join(",")
}

/// Inject `terms` into the first selector block of `target`.
///
/// A target without any braces gets an empty `{}` appended to its first
/// whitespace-separated token. The terms go right before the first `}`,
/// comma-separated unless the expression contains an empty `{}`.
pub fn append_selector(terms: &str, target: &str) -> Result<String, SelectorError> {
    let mut expr = target.to_string();

    if !expr.contains('{') && !expr.contains('}') {
        let mut words: Vec<String> = expr.split_whitespace().map(str::to_string).collect();
        let first = words.first_mut().ok_or(SelectorError::EmptyExpression)?;
        first.push_str("{}");
        expr = words.join(" ");
    }

    let separator = if expr.contains("{}") { "" } else { "," };

    let close = expr
        .find('}')
        .ok_or_else(|| SelectorError::Unterminated(target.to_string()))?;
    expr.insert_str(close, &format!("{separator}{terms}"));
    Ok(expr)
}
