//! Deterministic key sets for driving the map.
//!
//! Text keys are built by repeating a two-character unit, so key `i` is the
//! unit repeated `i` times and every key in a set is distinct under ordinal
//! comparison. The collision unit is a caseless non-ASCII pair: it keeps the
//! keys distinct under every comparer while forcing the case-insensitive
//! comparer off its ASCII path and giving all comparers long keys that share
//! a common prefix.

use alloc::string::String;
use alloc::string::ToString;
use alloc::vec::Vec;

/// The two-character unit a text key set is built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyUnit {
    /// `"aa"`.
    Ascii,
    /// `"\u{A0A2}\u{A0A2}"`, a Yi syllable with no case mapping.
    Colliding,
}

impl KeyUnit {
    /// Picks the unit for a collision flag.
    pub fn for_collisions(collisions: bool) -> Self {
        if collisions {
            KeyUnit::Colliding
        } else {
            KeyUnit::Ascii
        }
    }

    /// The unit's text.
    pub fn as_str(self) -> &'static str {
        match self {
            KeyUnit::Ascii => "aa",
            KeyUnit::Colliding => "\u{A0A2}\u{A0A2}",
        }
    }
}

/// Generates `n` keys: the unit selected by `collisions` repeated `0..n`
/// times, in that order.
///
/// # Examples
///
/// ```rust
/// # use chain_dict::workload::generate;
/// #
/// assert_eq!(generate(3, false), ["", "aa", "aaaa"]);
/// assert_eq!(generate(2, true)[1], "\u{A0A2}\u{A0A2}");
/// ```
pub fn generate(n: usize, collisions: bool) -> Vec<String> {
    let unit = KeyUnit::for_collisions(collisions).as_str();
    (0..n).map(|i| unit.repeat(i)).collect()
}

/// Decimal strings `"0"` through `n - 1`.
///
/// Keys from [`generate`] are empty or contain no digits, so every one of
/// these misses a generated map.
pub fn absent_keys(n: usize) -> Vec<String> {
    (0..n).map(|i| i.to_string()).collect()
}

/// Integer keys `1..=n`.
pub fn int_keys(n: i32) -> Vec<i32> {
    (1..=n).collect()
}

/// Integer keys `-1..=-n`, disjoint from [`int_keys`].
pub fn negated_int_keys(n: i32) -> Vec<i32> {
    (1..=n).map(|i| -i).collect()
}
