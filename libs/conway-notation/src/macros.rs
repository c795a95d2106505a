//! # Macro Rewriting
//!
//! Shorthand operator letters (`e`, `b`, `o`, `m`, `t`, `j`, `s`) are not
//! operators in their own right. They expand into chains of primitive
//! operators before parsing, and a few reduction rules then simplify
//! combinations that cancel (`dd`) or collapse (`ad`, `gd`).
//!
//! Rules run in table order and the whole table is reapplied until a pass
//! changes nothing, so substitutions exposed by earlier rules are caught.
//!
//! ## Example
//!
//! ```rust
//! use conway_notation::macros::expand;
//!
//! // truncate = dual-kis-dual
//! assert_eq!(expand("tC"), "dkdC");
//! // expand = ambo of ambo
//! assert_eq!(expand("eC"), "aaC");
//! ```

use config::constants::MAX_REWRITE_PASSES;

// =============================================================================
// REWRITE RULES
// =============================================================================

/// A single text rewrite applied across the whole notation string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteRule {
    /// Replace every occurrence of `from` with `to`, scanning left to right.
    Literal {
        /// Text to find.
        from: &'static str,
        /// Replacement text.
        to: &'static str,
    },
    /// Replace `letter` and any digits right after it with
    /// `prefix` + digits + `suffix`.
    WithDigits {
        /// Letter that triggers the rule.
        letter: char,
        /// Text emitted before the digits.
        prefix: &'static str,
        /// Text emitted after the digits.
        suffix: &'static str,
    },
}

impl RewriteRule {
    /// Applies the rule to every non-overlapping match in `notation`.
    pub fn apply(&self, notation: &str) -> String {
        match *self {
            RewriteRule::Literal { from, to } => notation.replace(from, to),
            RewriteRule::WithDigits {
                letter,
                prefix,
                suffix,
            } => {
                let mut out = String::with_capacity(notation.len() + 4);
                let mut chars = notation.chars().peekable();
                while let Some(c) = chars.next() {
                    if c != letter {
                        out.push(c);
                        continue;
                    }
                    out.push_str(prefix);
                    while let Some(&digit) = chars.peek() {
                        if !digit.is_ascii_digit() {
                            break;
                        }
                        out.push(digit);
                        chars.next();
                    }
                    out.push_str(suffix);
                }
                out
            }
        }
    }
}

/// The rewrite table, in application order.
pub const REWRITE_RULES: &[RewriteRule] = &[
    RewriteRule::Literal { from: "e", to: "aa" },
    RewriteRule::Literal { from: "b", to: "ta" },
    RewriteRule::Literal { from: "o", to: "jj" },
    RewriteRule::Literal { from: "m", to: "kj" },
    RewriteRule::WithDigits {
        letter: 't',
        prefix: "dk",
        suffix: "d",
    },
    RewriteRule::Literal { from: "j", to: "dad" },
    RewriteRule::Literal { from: "s", to: "dgd" },
    RewriteRule::Literal { from: "dd", to: "" },
    RewriteRule::Literal { from: "ad", to: "a" },
    RewriteRule::Literal { from: "gd", to: "g" },
    RewriteRule::Literal { from: "aO", to: "aC" },
    RewriteRule::Literal { from: "aI", to: "aD" },
    RewriteRule::Literal { from: "gO", to: "gC" },
    RewriteRule::Literal { from: "gI", to: "gD" },
];

// =============================================================================
// EXPANSION
// =============================================================================

/// Runs the rewrite table over `notation` until it reaches a fixed point.
///
/// The result is idempotent: expanding an already expanded string returns it
/// unchanged.
pub fn expand(notation: &str) -> String {
    expand_with(notation, REWRITE_RULES)
}

/// Same as [`expand`] with a caller-supplied rule table.
pub fn expand_with(notation: &str, rules: &[RewriteRule]) -> String {
    let mut current = notation.to_string();
    for pass in 0..MAX_REWRITE_PASSES {
        let next = rules.iter().fold(current.clone(), |text, rule| rule.apply(&text));
        if next == current {
            tracing::trace!(passes = pass + 1, "notation rewrite settled");
            return current;
        }
        current = next;
    }
    tracing::warn!(
        notation,
        passes = MAX_REWRITE_PASSES,
        "notation rewrite did not settle"
    );
    current
}

// =============================================================================
// TESTS
// =============================================================================
