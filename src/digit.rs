//! The seven Roman digits and their total order.
//!
//! Everything downstream — parsing, merging, pattern matching — reduces to
//! comparisons in the fixed order I < V < X < L < C < D < M. The enum is
//! declared in that order so the derived `Ord` *is* the order table; `ORDER`
//! restates it as data and a test pins the two against each other.
//!
//! # Citations
//! - Cajori, "A History of Mathematical Notations", Vol. 1 §§46-61 (1928)
//! - Menninger, "Number Words and Number Symbols" (1969)

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the seven standard Roman numeral symbols.
///
/// Declaration order is ascending value, so the derived `Ord` coincides with
/// the numeral order table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Digit {
    /// 1
    I,
    /// 5
    V,
    /// 10
    X,
    /// 50
    L,
    /// 100
    C,
    /// 500
    D,
    /// 1000
    M,
}

/// The digit order table, ascending.
pub const ORDER: [Digit; 7] = [
    Digit::I,
    Digit::V,
    Digit::X,
    Digit::L,
    Digit::C,
    Digit::D,
    Digit::M,
];

impl Digit {
    /// Returns true iff `self` strictly precedes `other` in the order table.
    #[inline]
    pub fn before(self, other: Digit) -> bool {
        self < other
    }

    /// Returns the integer value this digit denotes.
    #[inline]
    pub const fn value(self) -> u32 {
        match self {
            Digit::I => 1,
            Digit::V => 5,
            Digit::X => 10,
            Digit::L => 50,
            Digit::C => 100,
            Digit::D => 500,
            Digit::M => 1000,
        }
    }

    /// Converts a character to a digit, if it is one of the seven symbols.
    #[inline]
    pub const fn from_char(c: char) -> Option<Digit> {
        match c {
            'I' => Some(Digit::I),
            'V' => Some(Digit::V),
            'X' => Some(Digit::X),
            'L' => Some(Digit::L),
            'C' => Some(Digit::C),
            'D' => Some(Digit::D),
            'M' => Some(Digit::M),
            _ => None,
        }
    }

    /// Returns the symbol character.
    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Digit::I => 'I',
            Digit::V => 'V',
            Digit::X => 'X',
            Digit::L => 'L',
            Digit::C => 'C',
            Digit::D => 'D',
            Digit::M => 'M',
        }
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Digit::I => "I",
            Digit::V => "V",
            Digit::X => "X",
            Digit::L => "L",
            Digit::C => "C",
            Digit::D => "D",
            Digit::M => "M",
        })
    }
}
