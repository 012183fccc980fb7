//! Calculi: structural Roman numeral arithmetic via chain rewriting.
//!
//! This crate adds Roman numerals as structured values, not strings. A
//! numeral string is parsed into a recursive digit chain, two chains are
//! merged under correct subtractive-notation rules, and the denormalized
//! result is reduced to canonical minimal form by a deterministic sweep of
//! twelve local replacement patterns — a small confluent term-rewriting
//! system — before being rendered back to text.
//!
//! # Name Origin: "Calculi"
//!
//! *Calculi* are the counting pebbles moved across the grooves of a Roman
//! abacus, the device on which Roman numeral arithmetic was actually
//! performed. Like the abacus, this crate never computes with the numeral's
//! integer value: it shuffles and exchanges symbol tokens until the board
//! is in canonical position.
//!
//! # Pipeline
//!
//! `add(a, b)` = render ∘ canonicalize ∘ raw_add ∘ (parse × parse):
//! - [`parse`] builds a chain right to left, inferring subtractive pairs.
//! - [`raw_add`] expands subtractive heads lazily and merges both chains
//!   into one descending run of plain digits.
//! - [`canonicalize`] applies the replacement table once, in ascending tier
//!   order, collapsing repeated runs and folding subtractive spellings.
//! - The `Display` renderer linearizes the chain, inverse of the parser.
//!
//! # References
//!
//! - Baader & Nipkow, "Term Rewriting and All That" (1998) — normal forms,
//!   confluence of rewriting systems
//! - Cajori, "A History of Mathematical Notations", Vol. 1 (1928) —
//!   subtractive notation and its history
//!
//! # Example
//!
//! ```
//! use calculi::prelude::*;
//!
//! assert_eq!(add("CX", "LXII").unwrap(), "CLXXII");
//!
//! let nine: Numeral = "IX".parse().unwrap();
//! assert_eq!(nine.value(), 9);
//! assert_eq!(add_numerals(&nine, &nine).to_string(), "XVIII");
//! ```

pub mod add;
pub mod digit;
pub mod expand;
pub mod numeral;
pub mod parse;
pub mod replacement;
pub mod rewrite;

pub use crate::add::{add, add_numerals, raw_add};
pub use crate::digit::{Digit, ORDER};
pub use crate::expand::expand_head;
pub use crate::numeral::Numeral;
pub use crate::parse::{parse, ParseError};
pub use crate::replacement::{replacements, Replacement};
pub use crate::rewrite::{canonicalize, canonicalize_full, replace_head, replace_recursively};

/// Prelude for convenient usage.
pub mod prelude {
    pub use crate::add::{add, add_numerals, raw_add};
    pub use crate::digit::{Digit, ORDER};
    pub use crate::expand::expand_head;
    pub use crate::numeral::Numeral;
    pub use crate::parse::{parse, ParseError};
    pub use crate::replacement::{replacements, Replacement};
    pub use crate::rewrite::{canonicalize, canonicalize_full};
}
