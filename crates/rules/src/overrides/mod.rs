//! Override directives: rules carrying an `override:` list of target names.
//!
//! A directive either disables the rules it targets or narrows them by
//! injecting its own label selector, negated, into their expressions.

mod apply;
mod directive;


pub use self::apply::{apply, apply_all, ApplyReport};
pub use self::directive::{Directive, TargetPattern};
