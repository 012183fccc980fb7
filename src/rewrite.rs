//! The replacement engine and canonicalization sweep.
//!
//! Canonicalization is a small term-rewriting system: each of the twelve
//! fixed patterns replaces a spelled-out run of symbols by its compact
//! equivalent, and one deterministic sweep of all patterns in ascending
//! tier order reduces any sum of two canonical numerals to normal form.
//!
//! Matching is symbol-by-symbol against the chain's spelled form: a plain
//! term spells its digit, a subtractive term spells its subtrahend then its
//! digit and must be consumed whole. A match replaces the consumed terms
//! only when the pattern is fully spent at a term boundary; a partial match
//! leaves the chain untouched. The explicit length-and-boundary check makes
//! the no-progress case structurally impossible instead of detecting it
//! after the fact.
//!
//! # Citations
//! - Term rewriting and normal forms: Baader & Nipkow, "Term Rewriting and
//!   All That", Chapters 2 and 6 (1998)

use crate::digit::Digit;
use crate::numeral::Numeral;
use crate::replacement::{replacements, Replacement};

/// Applies one pattern once, rooted at the head of the chain.
///
/// If `pattern.low` matches the chain's spelling as a prefix ending on a
/// term boundary, the matched terms are replaced by a fresh copy of
/// `pattern.high` with whatever followed the run reattached. Otherwise the
/// chain is returned unchanged.
pub fn replace_head(pattern: &Replacement, n: &Numeral) -> Numeral {
    match match_run(&pattern.low, n) {
        Some(Some(tail)) => pattern.high.clone().with_next(tail.clone()),
        Some(None) => pattern.high.clone(),
        None => n.clone(),
    }
}

/// Matches `low` against the spelled prefix of the chain rooted at `term`.
///
/// On a full match returns the chain following the consumed run (`None` if
/// the run consumed the whole chain). Returns `None` for any mismatch,
/// including a pattern that runs out mid-term or a chain shorter than the
/// pattern.
fn match_run<'a>(low: &[Digit], term: &'a Numeral) -> Option<Option<&'a Numeral>> {
    let remaining = match term.subtrahend {
        // A subtractive term spells two symbols and is consumed whole.
        Some(sub) => {
            let (&first, rest) = low.split_first()?;
            if first != sub {
                return None;
            }
            let (&second, rest) = rest.split_first()?;
            if second != term.digit {
                return None;
            }
            rest
        }
        None => {
            let (&first, rest) = low.split_first()?;
            if first != term.digit {
                return None;
            }
            rest
        }
    };
    if remaining.is_empty() {
        Some(term.next.as_deref())
    } else {
        match_run(remaining, term.next.as_deref()?)
    }
}

/// Sweeps one pattern once over the entire chain, left to right.
///
/// Each position gets exactly one replacement attempt; after a replacement
/// the sweep continues from the replaced term's successor.
pub fn replace_recursively(pattern: &Replacement, n: &Numeral) -> Numeral {
    let Numeral {
        digit,
        subtrahend,
        next,
    } = replace_head(pattern, n);
    Numeral {
        digit,
        subtrahend,
        next: next.map(|rest| Box::new(replace_recursively(pattern, &rest))),
    }
}

/// Canonicalizes a chain with a single sweep of all twelve patterns in
/// ascending tier order.
///
/// One sweep suffices for the output of raw addition over two canonical
/// numerals: each tier's roll-ups complete before the patterns that consume
/// their output run (ten I's become VV under the I-tier patterns, and VV
/// becomes X when the V-tier run collapse fires later in the same pass).
/// For chains with larger excess runs see [`canonicalize_full`].
pub fn canonicalize(n: &Numeral) -> Numeral {
    replacements()
        .iter()
        .fold(n.clone(), |acc, pattern| replace_recursively(pattern, &acc))
}

/// Canonicalizes an arbitrarily denormalized chain by iterating the sweep
/// to a fixed point.
///
/// Terminates because every replacement strictly shortens the chain's
/// spelled length, so the number of productive sweeps is bounded.
pub fn canonicalize_full(n: &Numeral) -> Numeral {
    let mut current = n.clone();
    loop {
        let swept = canonicalize(&current);
        if swept == current {
            return current;
        }
        current = swept;
    }
}
