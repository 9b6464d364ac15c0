#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// Key equality and hashing strategies.
///
/// This module provides the [`Comparator`] trait, the three text strategies
/// and the runtime-selectable [`StringComparer`].
pub mod comparator;

mod error;

/// A HashMap bound to a comparator.
///
/// This module provides a `HashMap` that wraps the chaining `HashTable` and
/// asks its comparator for every hash and key comparison.
pub mod hash_map;

pub mod hash_table;

pub mod scenario;

pub mod workload;

pub use comparator::Comparator;
pub use comparator::ComparerKind;
pub use comparator::DefaultComparator;
pub use comparator::Ordinal;
pub use comparator::OrdinalIgnoreCase;
pub use comparator::StringComparer;
pub use error::Error;
pub use hash_map::Entry;
pub use hash_map::HashMap;
pub use hash_table::HashTable;
