//! # Opspec Parser
//!
//! Recursive-descent parser for the notation grammar:
//!
//! ```text
//! notation := opspec+
//! opspec   := letter ( number | '(' number ( ','? number )* ','? ')' )?
//! letter   := [a-zA-Z]
//! number   := [0-9.-]+
//! ```
//!
//! Whitespace is not part of the grammar.

use crate::cursor::Cursor;
use crate::error::{ParseError, ParseErrorKind};
use crate::span::Span;
use crate::OpSpec;

/// Characters that may appear in a numeric argument.
fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == '-'
}

/// Parses a (macro-expanded) notation string into opspecs, as written.
///
/// ## Example
///
/// ```rust
/// use conway_notation::parser::parse_opspecs;
///
/// let specs = parse_opspecs("n(3,0.25)P5").expect("valid notation");
/// assert_eq!(specs.len(), 2);
/// assert_eq!(specs[0].args, vec![3.0, 0.25]);
/// assert_eq!(specs[1].args, vec![5.0]);
/// ```
pub fn parse_opspecs(notation: &str) -> Result<Vec<OpSpec>, ParseError> {
    let mut parser = Parser::new(notation);
    parser.parse()
}

/// Parser state over a single notation string.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    /// Create a parser for `notation`.
    pub fn new(notation: &'a str) -> Self {
        Self {
            cursor: Cursor::new(notation),
        }
    }

    /// Parse every opspec until the end of input.
    pub fn parse(&mut self) -> Result<Vec<OpSpec>, ParseError> {
        let mut specs = Vec::new();
        while !self.cursor.is_eof() {
            specs.push(self.parse_opspec()?);
        }
        if specs.is_empty() {
            return Err(ParseError::new(ParseErrorKind::EmptyNotation, Span::new(0, 0)));
        }
        Ok(specs)
    }

    fn parse_opspec(&mut self) -> Result<OpSpec, ParseError> {
        let start = self.cursor.position();
        let code = match self.cursor.advance() {
            Some(c) if c.is_ascii_alphabetic() => c,
            Some(c) => {
                return Err(ParseError::unexpected_character(
                    c,
                    "operator or seed letter",
                    Span::new(start, self.cursor.position()),
                ))
            }
            None => return Err(ParseError::unexpected_end("operator or seed letter", start)),
        };

        let args = match self.cursor.peek() {
            Some('(') => self.parse_argument_list()?,
            Some(c) if is_number_char(c) => vec![self.parse_number()?],
            _ => Vec::new(),
        };

        Ok(OpSpec::new(code, args, Span::new(start, self.cursor.position())))
    }

    fn parse_argument_list(&mut self) -> Result<Vec<f64>, ParseError> {
        let open = self.cursor.position();
        self.cursor.advance();
        let mut args = Vec::new();
        loop {
            match self.cursor.peek() {
                Some(')') => {
                    self.cursor.advance();
                    break;
                }
                Some(c) if is_number_char(c) => {
                    args.push(self.parse_number()?);
                    self.cursor.eat(',');
                }
                Some(c) => {
                    let at = self.cursor.position();
                    return Err(ParseError::unexpected_character(
                        c,
                        "number or ')'",
                        Span::new(at, at + c.len_utf8()),
                    ));
                }
                None => return Err(ParseError::unexpected_end("')'", self.cursor.position())),
            }
        }
        if args.is_empty() {
            return Err(ParseError::new(
                ParseErrorKind::EmptyArgumentList,
                Span::new(open, self.cursor.position()),
            ));
        }
        Ok(args)
    }

    fn parse_number(&mut self) -> Result<f64, ParseError> {
        let start = self.cursor.position();
        let text = self.cursor.advance_while(is_number_char);
        text.parse::<f64>()
            .map_err(|_| ParseError::invalid_number(text, Span::new(start, self.cursor.position())))
    }
}

// =============================================================================
// TESTS
// =============================================================================
