//! Expansion of subtractive notation.
//!
//! Raw addition merges chains by comparing head digits, which only works on
//! plain terms. `expand_head` rewrites a subtractive head into the spelled
//! run it abbreviates — IV becomes IIII, XL becomes XXXX, IX becomes V,IV —
//! leaving the rest of the chain untouched. Deeper subtractive terms are
//! expanded lazily when they surface as heads during the merge.
//!
//! The spelling is rebuilt through the same subtractive-pair fold the parser
//! uses, so an expansion like IX's V,IV keeps the chain's denoted value; its
//! inner IV expands in turn when the merge reaches it.

use crate::numeral::Numeral;
use crate::replacement::for_subtractive;

/// Expands the first term of a chain if it is subtractive; returns the chain
/// unchanged otherwise.
///
/// # Panics
/// Panics if the head's subtractive pair has no entry in the replacement
/// table. The six legal pairs all have entries, so this is unreachable for
/// any chain built by this crate's parser or arithmetic; hitting it means a
/// hand-built chain violated the subtractive-pair invariant.
pub fn expand_head(n: &Numeral) -> Numeral {
    let Some(subtrahend) = n.subtrahend else {
        return n.clone();
    };
    let pattern = for_subtractive(n.digit, subtrahend).unwrap_or_else(|| {
        panic!(
            "no replacement pattern for subtractive pair {}{}",
            subtrahend, n.digit
        )
    });
    // Non-empty by the table invariant.
    let expanded = Numeral::from_symbols(&pattern.low).unwrap();
    match &n.next {
        Some(next) => expanded.append((**next).clone()),
        None => expanded,
    }
}
