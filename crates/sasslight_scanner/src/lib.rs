//! sasslight_scanner: Rule-driven lexical scanner for Sass stylesheets.
//!
//! Produces an ordered, gapless stream of classified tokens from a bound
//! window of source text, suitable for feeding a syntax-highlighting theme
//! engine. Classifications are TextMate-style dotted scope strings
//! (`entity.name.tag.sass`, `constant.numeric.sass`, ...).
//!
//! Invariants:
//! - concatenating the returned token spans reproduces the scanned range
//!   exactly, with no gaps and no overlaps;
//! - whitespace is its own token, never merged with neighbors;
//! - input that matches no rule degrades to one-character unclassified
//!   tokens, so scanning never fails on malformed text.

mod chars;
mod rules;
mod scanner;
mod scope;
mod token;

pub use rules::{sass_rules, ContextMask, Rule, RuleKind};
pub use scanner::{ScanError, Scanner};
pub use scope::Scope;
pub use token::{ScannedToken, ScopeFactory, TokenFactory};
