//! The recursive numeral chain and its renderer.
//!
//! A numeral is a singly-linked chain of terms, each term exclusively owning
//! its successor. A term is either a plain digit or a subtractive pair
//! (`digit` minus `subtrahend`, e.g. IV, XC). The chain denotes the sum of
//! its terms.
//!
//! Chains are values: every transformation in this crate builds a fresh
//! chain and never mutates one in place. Equality is structural and
//! length-sensitive — two chains denoting the same integer are equal only if
//! they have the same shape. All algorithms here operate on canonical or
//! expanded forms, where value equality and structural equality coincide by
//! construction.

use crate::digit::Digit;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A term in a numeral chain, owning the rest of the chain.
///
/// # Invariants
/// - `subtrahend`, when present, strictly precedes `digit` in the order
///   table, and the pair is one of the six standard subtractive forms
///   (IV, IX, XL, XC, CD, CM) for any chain produced by this crate.
/// - The chain is tree-shaped: no sharing, no cycles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Numeral {
    /// The primary digit of this term.
    pub digit: Digit,
    /// Optional subtracted digit; the term is worth `digit - subtrahend`.
    pub subtrahend: Option<Digit>,
    /// The remaining chain, denoting values added after this term.
    pub next: Option<Box<Numeral>>,
}

impl Numeral {
    /// Creates a single plain term with no successor.
    #[inline]
    pub fn atom(digit: Digit) -> Self {
        Self {
            digit,
            subtrahend: None,
            next: None,
        }
    }

    /// Creates a single subtractive term with no successor.
    #[inline]
    pub fn subtractive(digit: Digit, subtrahend: Digit) -> Self {
        Self {
            digit,
            subtrahend: Some(subtrahend),
            next: None,
        }
    }

    /// Returns `self` with the given chain attached as its successor.
    #[inline]
    pub fn with_next(mut self, next: Numeral) -> Self {
        self.next = Some(Box::new(next));
        self
    }

    /// Builds a chain from a spelled-out symbol sequence, right to left,
    /// folding subtractive pairs exactly like the string parser: a symbol
    /// that precedes the digit built so far becomes that term's subtrahend.
    ///
    /// So `[I,I,I,I]` builds the plain run IIII, while `[V,I,V]` builds the
    /// two-term chain V,IV.
    ///
    /// Returns `None` for an empty sequence.
    pub fn from_symbols(symbols: &[Digit]) -> Option<Numeral> {
        let mut built: Option<Numeral> = None;
        for &digit in symbols.iter().rev() {
            built = Some(match built {
                None => Numeral::atom(digit),
                Some(rest) => {
                    if digit.before(rest.digit) && rest.subtrahend.is_none() {
                        Numeral {
                            subtrahend: Some(digit),
                            ..rest
                        }
                    } else {
                        Numeral::atom(digit).with_next(rest)
                    }
                }
            });
        }
        built
    }

    /// Returns a fresh chain equal to `self` with `tail` spliced onto the end.
    pub fn append(&self, tail: Numeral) -> Numeral {
        match &self.next {
            None => Numeral {
                digit: self.digit,
                subtrahend: self.subtrahend,
                next: Some(Box::new(tail)),
            },
            Some(next) => Numeral {
                digit: self.digit,
                subtrahend: self.subtrahend,
                next: Some(Box::new(next.append(tail))),
            },
        }
    }

    /// Returns the number of terms in the chain.
    pub fn len(&self) -> usize {
        1 + self.next.as_deref().map_or(0, Numeral::len)
    }

    /// A chain always has at least one term.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the integer this chain denotes.
    ///
    /// `value(chain) = value(term) + value(next)`, where a subtractive term
    /// is worth `digit - subtrahend` and an absent `next` contributes 0.
    pub fn value(&self) -> u32 {
        let term = match self.subtrahend {
            Some(sub) => self.digit.value() - sub.value(),
            None => self.digit.value(),
        };
        term + self.next.as_deref().map_or(0, Numeral::value)
    }

    /// Returns an iterator over the terms of the chain, head to tail.
    pub fn terms(&self) -> Terms<'_> {
        Terms {
            current: Some(self),
        }
    }
}

/// Iterator over the terms of a chain.
pub struct Terms<'a> {
    current: Option<&'a Numeral>,
}

impl<'a> Iterator for Terms<'a> {
    type Item = &'a Numeral;

    fn next(&mut self) -> Option<Self::Item> {
        let term = self.current?;
        self.current = term.next.as_deref();
        Some(term)
    }
}

/// The renderer: linearizes a chain back to text, inverse of the parser.
///
/// Emits `subtrahend` (if any), then `digit`, then the rest of the chain.
impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(sub) = self.subtrahend {
            write!(f, "{sub}")?;
        }
        write!(f, "{}", self.digit)?;
        match &self.next {
            Some(next) => write!(f, "{next}"),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digit::Digit::*;

    fn run(digits: &[Digit]) -> Numeral {
        Numeral::from_symbols(digits).unwrap()
    }

    #[test]
    fn render_plain_and_subtractive() {
        assert_eq!(Numeral::atom(I).to_string(), "I");
        assert_eq!(run(&[I, I]).to_string(), "II");
        assert_eq!(Numeral::subtractive(V, I).to_string(), "IV");
        assert_eq!(
            Numeral::atom(X).with_next(Numeral::subtractive(V, I)).to_string(),
            "XIV"
        );
    }

    #[test]
    fn from_symbols_folds_subtractive_pairs() {
        assert_eq!(run(&[V, I, V]), Numeral::atom(V).with_next(Numeral::subtractive(V, I)));
        assert_eq!(run(&[L, X, L]), Numeral::atom(L).with_next(Numeral::subtractive(L, X)));
        assert_eq!(run(&[I, I, I, I]).to_string(), "IIII");
        assert!(Numeral::from_symbols(&[]).is_none());
    }

    /// Structural equality distinguishes chains of different shape even when
    /// they would denote related values.
    #[test]
    fn equality_is_structural() {
        let one = Numeral::atom(I);
        let two = run(&[I, I]);
        assert_eq!(one, one.clone());
        assert_ne!(one, two);
        assert_ne!(Numeral::subtractive(V, I), Numeral::atom(V));
        assert_eq!(Numeral::subtractive(V, I), Numeral::subtractive(V, I));
    }

    #[test]
    fn append_splices_at_tail() {
        let head = run(&[X, X]);
        let joined = head.append(Numeral::atom(I));
        assert_eq!(joined.to_string(), "XXI");
        assert_eq!(joined.len(), 3);
        // The original is untouched (fresh chains, no mutation).
        assert_eq!(head.to_string(), "XX");
    }

    #[test]
    fn value_of_terms_and_chains() {
        assert_eq!(Numeral::atom(M).value(), 1000);
        assert_eq!(Numeral::subtractive(M, C).value(), 900);
        assert_eq!(run(&[X, I, I]).value(), 12);
        // Spelled subtractive chains keep their denoted value.
        assert_eq!(run(&[V, I, V]).value(), 9);
        assert_eq!(run(&[D, C, D]).value(), 900);
    }

    #[test]
    fn terms_walks_head_to_tail() {
        let n = run(&[X, I, I]);
        let digits: Vec<_> = n.terms().map(|t| t.digit).collect();
        assert_eq!(digits, vec![X, I, I]);
        assert_eq!(n.terms().count(), n.len());
    }

    #[test]
    fn serde_round_trip() {
        let n = Numeral::atom(X).with_next(Numeral::subtractive(V, I));
        let json = serde_json::to_string(&n).unwrap();
        let back: Numeral = serde_json::from_str(&json).unwrap();
        assert_eq!(n, back);
    }
}
