//! The fixed replacement pattern table.
//!
//! Twelve local rewrite rules drive canonicalization: for each power-of-ten
//! tier, a run collapse (five units roll up into the quinary digit, two
//! quinary digits roll up into the next unit) and a subtractive fold (four
//! units fold into the subtractive pair, a quinary digit followed by the
//! spelled pair folds into the next tier's subtractive pair).
//!
//! Each pattern pairs a `low` symbol sequence — the spelled-out form — with
//! a `high` single term of equal value. The table doubles as the expansion
//! table: a subtractive term expands into the `low` spelling of the unique
//! pattern whose `high` is that pair.
//!
//! The table is ordered for the canonicalization sweep: tiers ascend, and
//! within a tier the run collapse precedes the subtractive fold, so that
//! lower roll-ups complete before the patterns that consume their output.

use crate::digit::Digit;
use crate::numeral::Numeral;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// A replacement rule: a spelled `low` run equivalent to a compact `high` term.
///
/// # Invariants
/// - `low` is non-empty and `high` has no successor.
/// - Read as a spelling (with subtractive pairs folded), `low` denotes the
///   same value as `high`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    /// The spelled-out symbol sequence to be matched and consumed.
    pub low: Vec<Digit>,
    /// The single term that replaces a matched run.
    pub high: Numeral,
}

impl Replacement {
    fn run(low: &[Digit], high: Digit) -> Self {
        Self {
            low: low.to_vec(),
            high: Numeral::atom(high),
        }
    }

    fn fold(low: &[Digit], high: Digit, subtrahend: Digit) -> Self {
        Self {
            low: low.to_vec(),
            high: Numeral::subtractive(high, subtrahend),
        }
    }
}

/// The twelve replacement patterns in canonicalization sweep order.
static REPLACEMENTS: LazyLock<[Replacement; 12]> = LazyLock::new(|| {
    use Digit::*;
    [
        Replacement::run(&[I, I, I, I, I], V),
        Replacement::fold(&[I, I, I, I], V, I),
        Replacement::run(&[V, V], X),
        Replacement::fold(&[V, I, V], X, I),
        Replacement::run(&[X, X, X, X, X], L),
        Replacement::fold(&[X, X, X, X], L, X),
        Replacement::run(&[L, L], C),
        Replacement::fold(&[L, X, L], C, X),
        Replacement::run(&[C, C, C, C, C], D),
        Replacement::fold(&[C, C, C, C], D, C),
        Replacement::run(&[D, D], M),
        Replacement::fold(&[D, C, D], M, C),
    ]
});

/// Returns the replacement table in sweep order.
#[inline]
pub fn replacements() -> &'static [Replacement] {
    &*REPLACEMENTS
}

/// Looks up the unique pattern whose `high` term is the given subtractive
/// pair, ignoring successors. Every legal subtractive form (IV, IX, XL, XC,
/// CD, CM) has exactly one entry.
pub fn for_subtractive(digit: Digit, subtrahend: Digit) -> Option<&'static Replacement> {
    replacements()
        .iter()
        .find(|r| r.high.digit == digit && r.high.subtrahend == Some(subtrahend))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digit::Digit::*;

    #[test]
    fn table_has_twelve_patterns_with_unique_highs() {
        let table = replacements();
        assert_eq!(table.len(), 12);
        for (i, a) in table.iter().enumerate() {
            assert!(a.high.next.is_none());
            assert!(!a.low.is_empty());
            for b in &table[i + 1..] {
                assert!(
                    a.high.digit != b.high.digit || a.high.subtrahend != b.high.subtrahend,
                    "duplicate high {}",
                    a.high
                );
            }
        }
    }

    /// Each `low`, read as a spelling, denotes the same value as its `high`.
    #[test]
    fn low_spelling_matches_high_value() {
        for r in replacements() {
            let spelled = Numeral::from_symbols(&r.low).unwrap();
            assert_eq!(spelled.value(), r.high.value(), "pattern for {}", r.high);
        }
    }

    #[test]
    fn lookup_finds_all_six_subtractive_pairs() {
        for (digit, sub, low_len) in [
            (V, I, 4),
            (X, I, 3),
            (L, X, 4),
            (C, X, 3),
            (D, C, 4),
            (M, C, 3),
        ] {
            let r = for_subtractive(digit, sub).unwrap();
            assert_eq!(r.low.len(), low_len);
        }
        assert!(for_subtractive(X, V).is_none());
        assert!(for_subtractive(M, I).is_none());
    }

    /// Sweep order: tiers ascend by the value of the replacement output, and
    /// within a tier the run collapse comes before the subtractive fold.
    #[test]
    fn sweep_order_is_ascending_by_tier() {
        let highs: Vec<_> = replacements().iter().map(|r| r.high.clone()).collect();
        assert_eq!(highs[0], Numeral::atom(V));
        assert_eq!(highs[1], Numeral::subtractive(V, I));
        assert_eq!(highs[2], Numeral::atom(X));
        assert_eq!(highs[3], Numeral::subtractive(X, I));
        assert_eq!(highs[10], Numeral::atom(M));
        assert_eq!(highs[11], Numeral::subtractive(M, C));
    }
}
