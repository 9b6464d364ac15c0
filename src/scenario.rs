//! Benchmark scenarios: which comparer, how many keys, and whether the keys
//! use the colliding unit.
//!
//! A [`Scenario`] is plain configuration. [`Scenario::setup`] is the hook a
//! harness runs once before timing; the returned [`Prepared`] owns the
//! populated map and the probe keys, and its measured operations only read.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::comparator::ComparerKind;
use crate::comparator::DefaultComparator;
use crate::comparator::StringComparer;
use crate::hash_map::HashMap;
use crate::workload;

/// Text-keyed map used by every [`Scenario`].
pub type StringMap = HashMap<String, String, StringComparer>;

/// One point of the comparer × size × collisions sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Scenario {
    /// Comparer the map is built with.
    pub comparer: ComparerKind,
    /// Number of keys in the map, and of miss keys probed.
    pub n: usize,
    /// Whether keys use the colliding unit.
    pub collisions: bool,
}

impl Scenario {
    /// Map sizes covered by [`Scenario::sweep`]. 90 and 110 straddle the
    /// point where short keys stop fitting a small table.
    pub const SIZES: [usize; 6] = [1, 10, 90, 110, 1_000, 10_000];

    /// Creates a scenario.
    pub fn new(comparer: ComparerKind, n: usize, collisions: bool) -> Self {
        Self {
            comparer,
            n,
            collisions,
        }
    }

    /// Every combination of [`ComparerKind::ALL`], [`Scenario::SIZES`] and
    /// both collision flags.
    pub fn sweep() -> impl Iterator<Item = Scenario> {
        ComparerKind::ALL.into_iter().flat_map(|comparer| {
            Self::SIZES.into_iter().flat_map(move |n| {
                [false, true]
                    .into_iter()
                    .map(move |collisions| Scenario::new(comparer, n, collisions))
            })
        })
    }

    /// An empty map bound to this scenario's comparer.
    pub fn construct(&self) -> StringMap {
        HashMap::with_comparator(self.comparer.comparer())
    }

    /// Builds the populated map, with each generated key bound to itself, and
    /// the miss keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_dict::ComparerKind;
    /// # use chain_dict::scenario::Scenario;
    /// #
    /// let prepared = Scenario::new(ComparerKind::Ordinal, 10, false).setup();
    /// assert_eq!(prepared.map().len(), 10);
    /// assert_eq!(prepared.count_present(), 10);
    /// assert_eq!(prepared.count_absent(), 0);
    /// ```
    pub fn setup(&self) -> Prepared {
        let keys = workload::generate(self.n, self.collisions);
        let map = HashMap::from_iter_with_comparator(
            keys.into_iter().map(|key| (key.clone(), key)),
            self.comparer.comparer(),
        );

        Prepared {
            map,
            misses: workload::absent_keys(self.n),
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/N={}/Collisions={}",
            self.comparer, self.n, self.collisions
        )
    }
}

/// State built by [`Scenario::setup`].
#[derive(Clone, Debug)]
pub struct Prepared {
    map: StringMap,
    misses: Vec<String>,
}

impl Prepared {
    /// The populated map.
    pub fn map(&self) -> &StringMap {
        &self.map
    }

    /// Keys known to be absent from the map.
    pub fn misses(&self) -> &[String] {
        &self.misses
    }

    /// Looks up every stored key and counts the hits.
    pub fn count_present(&self) -> usize {
        self.map
            .keys()
            .filter(|key| self.map.contains_key(key.as_str()))
            .count()
    }

    /// Looks up every miss key and counts the hits.
    pub fn count_absent(&self) -> usize {
        self.misses
            .iter()
            .filter(|key| self.map.contains_key(key.as_str()))
            .count()
    }

    /// The comparer the map is bound to.
    pub fn comparer(&self) -> &StringComparer {
        self.map.comparator()
    }
}

/// The integer-keyed workload: keys `1..=n` bound to themselves, probed with
/// their negations for misses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntScenario {
    /// Number of keys.
    pub n: i32,
}

impl Default for IntScenario {
    fn default() -> Self {
        Self { n: 100 }
    }
}

impl IntScenario {
    /// An empty map with the default comparator.
    pub fn construct(&self) -> HashMap<i32, i32> {
        HashMap::new()
    }

    /// Builds the populated map and the miss keys.
    pub fn setup(&self) -> PreparedInts {
        let map = workload::int_keys(self.n).into_iter().map(|i| (i, i)).collect();

        PreparedInts {
            map,
            misses: workload::negated_int_keys(self.n),
        }
    }
}

/// State built by [`IntScenario::setup`].
#[derive(Clone, Debug)]
pub struct PreparedInts {
    map: HashMap<i32, i32>,
    misses: Vec<i32>,
}

impl PreparedInts {
    /// The populated map.
    pub fn map(&self) -> &HashMap<i32, i32> {
        &self.map
    }

    /// Looks up every stored value as a key and counts the hits.
    pub fn count_present(&self) -> usize {
        self.map
            .values()
            .filter(|value| self.map.contains_key(*value))
            .count()
    }

    /// Looks up every miss key and counts the hits.
    pub fn count_absent(&self) -> usize {
        self.misses
            .iter()
            .filter(|key| self.map.contains_key(*key))
            .count()
    }

    /// The comparator the map is bound to.
    pub fn comparator(&self) -> &DefaultComparator {
        self.map.comparator()
    }
}
