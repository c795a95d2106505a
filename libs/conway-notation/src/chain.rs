//! # Operator Chains
//!
//! Parsed opspecs and their arrangement into a seed plus an ordered list of
//! operators. Notation is written outermost-first (`dkC` is the dual of kis
//! of a cube), so the rightmost opspec is the seed and the rest apply from
//! right to left.

use serde::{Deserialize, Serialize};

use crate::error::{ParseError, ParseErrorKind};
use crate::span::Span;

/// One letter of notation together with its numeric arguments.
///
/// ## Example
///
/// ```rust
/// use conway_notation::{OpSpec, Span};
///
/// let spec = OpSpec::new('k', vec![4.0], Span::new(0, 2));
/// assert_eq!(spec.arg(0), Some(4.0));
/// assert_eq!(spec.arg(1), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpSpec {
    /// Operator or seed letter.
    pub code: char,
    /// Numeric arguments, possibly empty.
    pub args: Vec<f64>,
    /// Location of the opspec in the expanded notation.
    pub span: Span,
}

impl OpSpec {
    /// Create a new opspec.
    pub fn new(code: char, args: Vec<f64>, span: Span) -> Self {
        Self { code, args, span }
    }

    /// Argument at `index`, if present.
    pub fn arg(&self, index: usize) -> Option<f64> {
        self.args.get(index).copied()
    }
}

impl std::fmt::Display for OpSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)?;
        match self.args.as_slice() {
            [] => Ok(()),
            [single] => write!(f, "{single}"),
            many => {
                let joined: Vec<String> = many.iter().map(|a| a.to_string()).collect();
                write!(f, "({})", joined.join(","))
            }
        }
    }
}

/// A seed opspec plus the operators to fold over it, in application order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpChain {
    /// Notation after macro expansion; spans index into this text.
    pub expanded: String,
    /// Rightmost opspec, naming the seed solid.
    pub seed: OpSpec,
    /// Remaining opspecs, nearest-seed first.
    pub operators: Vec<OpSpec>,
}

impl OpChain {
    /// Arranges opspecs as written (outermost first) into a chain.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use conway_notation::{parser::parse_opspecs, OpChain};
    ///
    /// let specs = parse_opspecs("dk3C").expect("valid notation");
    /// let chain = OpChain::from_written("dk3C".to_string(), specs).expect("non-empty");
    /// assert_eq!(chain.seed.code, 'C');
    /// assert_eq!(chain.operators[0].code, 'k');
    /// assert_eq!(chain.operators[1].code, 'd');
    /// ```
    pub fn from_written(expanded: String, mut specs: Vec<OpSpec>) -> Result<Self, ParseError> {
        let seed = specs.pop().ok_or_else(|| {
            ParseError::new(ParseErrorKind::EmptyNotation, Span::new(0, expanded.len()))
        })?;
        specs.reverse();
        Ok(Self {
            expanded,
            seed,
            operators: specs,
        })
    }

    /// Iterates opspecs in evaluation order, seed first.
    pub fn iter(&self) -> impl Iterator<Item = &OpSpec> {
        std::iter::once(&self.seed).chain(self.operators.iter())
    }
}
