//! Raw addition and the full addition pipeline.
//!
//! Raw addition merges two chains into one descending chain of plain
//! digits, expanding subtractive heads lazily as they surface. It is the
//! merge step of a merge sort: always take from the chain whose head digit
//! is not lower in the order, recurse on the remainder. The result denotes
//! the sum of both inputs but is not yet in minimal form; canonicalization
//! collapses it.

use crate::expand::expand_head;
use crate::numeral::Numeral;
use crate::parse::{parse, ParseError};
use crate::rewrite::canonicalize;

/// Merges two chains into one descending, purely additive chain, without
/// normalization.
///
/// Both heads are expanded before comparison; if the first chain's head
/// digit is lower in the order the operands are swapped (ties are not
/// swapped), so the merge always proceeds with the no-lower chain first.
/// Terminates because every step removes one term of the bounded fully
/// expanded input.
pub fn raw_add(a: &Numeral, b: &Numeral) -> Numeral {
    raw_add_expanded(expand_head(a), expand_head(b))
}

fn raw_add_expanded(a: Numeral, b: Numeral) -> Numeral {
    if a.digit.before(b.digit) {
        return raw_add_expanded(b, a);
    }
    let Numeral {
        digit,
        subtrahend,
        next,
    } = a;
    let next = match next {
        None => b,
        Some(rest) => raw_add_expanded(expand_head(&rest), expand_head(&b)),
    };
    Numeral {
        digit,
        subtrahend,
        next: Some(Box::new(next)),
    }
}

/// Adds two numeral chains, returning the canonical sum.
pub fn add_numerals(a: &Numeral, b: &Numeral) -> Numeral {
    canonicalize(&raw_add(a, b))
}

/// Adds two Roman numeral strings, returning the canonical rendered sum.
///
/// The only failure mode is a string the parser rejects; see
/// [`ParseError`].
pub fn add(a: &str, b: &str) -> Result<String, ParseError> {
    let sum = add_numerals(&parse(a)?, &parse(b)?);
    Ok(sum.to_string())
}
