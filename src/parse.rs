//! String-to-chain parser.
//!
//! A thin boundary: scans the symbols right to left and builds the chain
//! tail-to-head, inferring subtractive pairs on the way. A symbol that
//! precedes the digit of the chain built so far is folded into that chain's
//! head as its subtrahend ("IV" scans as V, then I-before-V, giving the
//! single subtractive term IV); otherwise it becomes a new head term.
//!
//! Input is assumed well-formed. The two detectable contract violations —
//! an empty string and a character outside the seven symbols — surface as
//! `ParseError` rather than a silently wrong numeral. Malformed-but-parsable
//! strings (e.g. "IIII") produce the best-effort chain their spelling
//! denotes; validating them is a non-goal.

use crate::digit::Digit;
use crate::numeral::Numeral;
use std::fmt;
use std::str::FromStr;

/// Error type for numeral parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input string was empty.
    Empty,
    /// The input contained a character outside I, V, X, L, C, D, M.
    InvalidSymbol(char),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "empty numeral string"),
            ParseError::InvalidSymbol(c) => write!(f, "invalid numeral symbol {c:?}"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parses a Roman numeral string into a chain.
///
/// Guarantees that for well-formed input the rendered chain equals the
/// input string (round-trip with the `Display` renderer).
pub fn parse(s: &str) -> Result<Numeral, ParseError> {
    let mut symbols = Vec::with_capacity(s.len());
    for c in s.chars() {
        symbols.push(Digit::from_char(c).ok_or(ParseError::InvalidSymbol(c))?);
    }
    Numeral::from_symbols(&symbols).ok_or(ParseError::Empty)
}

impl FromStr for Numeral {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
