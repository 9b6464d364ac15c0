//! A raw separate-chaining hash table.
//!
//! The table never hashes or compares anything itself: every operation takes
//! the precomputed hash of the key and an equality predicate. This is the
//! layer the comparator-aware [`HashMap`](crate::HashMap) is built on.

use alloc::alloc::handle_alloc_error;
use alloc::vec;
use alloc::vec::Vec;
use core::alloc::Layout;
use core::fmt::Debug;

use crate::error::Error;

/// Marks the end of a chain, or an empty bucket.
const NIL: usize = usize::MAX;

/// Smallest non-zero bucket count. Keeps `target_load_factor` exact, since
/// every bucket count is a power of two that is a multiple of four.
const MIN_BUCKETS: usize = 4;

/// Number of entries a table with `buckets` buckets holds before it grows
/// (load factor 3/4).
#[inline(always)]
fn target_load_factor(buckets: usize) -> usize {
    buckets / 4 * 3
}

#[inline(always)]
fn target_load_factor_inverse(capacity: usize) -> Option<usize> {
    capacity.checked_mul(4).map(|scaled| scaled.div_ceil(3))
}

fn bucket_count_for(capacity: usize) -> Result<usize, Error> {
    if capacity == 0 {
        return Ok(0);
    }

    target_load_factor_inverse(capacity)
        .and_then(|buckets| buckets.max(MIN_BUCKETS).checked_next_power_of_two())
        .ok_or(Error::CapacityOverflow)
}

fn alloc_error<T>(count: usize) -> Error {
    match Layout::array::<T>(count) {
        Ok(layout) => Error::AllocError { layout },
        Err(_) => Error::CapacityOverflow,
    }
}

#[derive(Clone)]
struct Slot<V> {
    hash: u64,
    next: usize,
    value: V,
}

/// Chain statistics for hash table analysis.
#[cfg(any(test, feature = "stats"))]
#[derive(Debug, Clone)]
pub struct DebugStats {
    /// Number of elements currently in the table
    pub populated: usize,
    /// Maximum load before the bucket array doubles
    pub capacity: usize,
    /// Number of buckets allocated
    pub buckets: usize,
    /// Number of buckets heading a non-empty chain
    pub occupied_buckets: usize,
    /// Length of the longest chain
    pub longest_chain: usize,
    /// Load factor (populated / buckets)
    pub load_factor: f64,
    /// Mean chain length over occupied buckets
    pub average_chain: f64,
    /// Bytes reserved for buckets and entries
    pub total_bytes: usize,
}

#[cfg(any(test, feature = "stats"))]
impl DebugStats {
    /// Pretty-print the debug statistics.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        println!("=== Hash Table Debug Statistics ===");
        println!(
            "Population: {}/{} ({:.2}% load factor)",
            self.populated,
            self.buckets,
            self.load_factor * 100.0
        );
        println!("Growth threshold: {}", self.capacity);
        println!(
            "Chains: {} occupied buckets, longest {}, average {:.2}",
            self.occupied_buckets, self.longest_chain, self.average_chain
        );
        println!("Total Allocated: {} bytes", self.total_bytes);
    }
}

/// A hash table that resolves collisions by chaining.
///
/// `HashTable<V>` stores values of type `V` next to their 64-bit hash. Each
/// bucket heads a singly linked chain threaded through a dense entries array,
/// so lookups walk the chain and confirm each candidate with the caller's
/// equality predicate. Correctness never depends on hash quality: keys that
/// all share one hash end up in one long chain and are still found.
///
/// Entries are stored in insertion order, which is also iteration order.
///
/// ## Performance Characteristics
///
/// - **Memory**: one `usize` per bucket, plus a `u64` hash and a `usize` link
///   per entry alongside `V`.
/// - **Growth**: the bucket array doubles once the load factor would exceed
///   3/4, and every entry is relinked from its cached hash.
///
/// ## Example
///
/// ```rust
/// # use core::hash::Hash;
/// # use core::hash::Hasher;
/// #
/// # use chain_dict::hash_table::HashTable;
/// # use siphasher::sip::SipHasher;
/// #
/// # #[derive(Debug, PartialEq)]
/// # struct Person {
/// #     id: u64,
/// #     name: String,
/// # }
/// #
/// # fn hash_id(id: u64) -> u64 {
/// #     let mut hasher = SipHasher::new();
/// #     id.hash(&mut hasher);
/// #     hasher.finish()
/// # }
///
/// let mut table = HashTable::with_capacity(100);
/// let hash = hash_id(123);
///
/// match table.entry(hash, |p: &Person| p.id == 123) {
///     chain_dict::hash_table::Entry::Vacant(entry) => {
///         entry.insert(Person {
///             id: 123,
///             name: "Alice".to_string(),
///         });
///     }
///     chain_dict::hash_table::Entry::Occupied(_) => {
///         println!("Person already exists");
///     }
/// }
///
/// assert_eq!(table.find(hash, |p| p.id == 123).map(|p| p.name.as_str()), Some("Alice"));
/// ```
#[derive(Clone)]
pub struct HashTable<V> {
    buckets: Vec<usize>,
    entries: Vec<Slot<V>>,
    max_pop: usize,
}

impl<V> Debug for HashTable<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HashTable")
            .field("populated", &self.entries.len())
            .field("capacity", &self.max_pop)
            .field("buckets", &self.buckets.len())
            .field("chains", &self.chain_lengths())
            .finish()
    }
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> HashTable<V> {
    /// Creates an empty table. Does not allocate.
    pub const fn new() -> Self {
        Self {
            buckets: Vec::new(),
            entries: Vec::new(),
            max_pop: 0,
        }
    }

    /// Creates a new hash table with the specified capacity.
    ///
    /// The actual capacity may be larger than requested since the bucket
    /// count is always a power of two.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_dict::hash_table::HashTable;
    /// #
    /// // Create a table that can hold at least 100 items without resizing
    /// let table: HashTable<String> = HashTable::with_capacity(100);
    /// assert!(table.capacity() >= 100);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        let mut table = Self::new();
        table.reserve(capacity);
        table
    }

    /// Returns the number of elements in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table contains no elements.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of elements the table can hold before the bucket
    /// array grows.
    pub fn capacity(&self) -> usize {
        self.max_pop
    }

    /// Removes all elements, keeping the allocated buckets and entry storage.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.buckets.fill(NIL);
    }

    /// Reserves capacity for at least `additional` more elements.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows `usize`, and aborts through the
    /// global allocation error handler if the allocation fails.
    pub fn reserve(&mut self, additional: usize) {
        match self.try_reserve(additional) {
            Ok(()) => {}
            Err(Error::AllocError { layout }) => handle_alloc_error(layout),
            Err(_) => panic!("capacity overflow"),
        }
    }

    /// Tries to reserve capacity for at least `additional` more elements.
    ///
    /// On failure the table is left untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_dict::Error;
    /// # use chain_dict::hash_table::HashTable;
    /// #
    /// let mut table: HashTable<u64> = HashTable::new();
    /// assert!(table.try_reserve(10).is_ok());
    /// assert_eq!(table.try_reserve(usize::MAX), Err(Error::CapacityOverflow));
    /// ```
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), Error> {
        let required = self
            .len()
            .checked_add(additional)
            .ok_or(Error::CapacityOverflow)?;
        if required <= self.max_pop {
            return Ok(());
        }

        let bucket_count = bucket_count_for(required)?;
        let max_pop = target_load_factor(bucket_count);

        let mut buckets = Vec::new();
        buckets
            .try_reserve_exact(bucket_count)
            .map_err(|_| alloc_error::<usize>(bucket_count))?;
        self.entries
            .try_reserve_exact(max_pop - self.entries.len())
            .map_err(|_| alloc_error::<Slot<V>>(max_pop))?;

        buckets.resize(bucket_count, NIL);
        self.relink(buckets);
        self.max_pop = max_pop;

        Ok(())
    }

    /// Threads every entry into `buckets` and swaps it in. `buckets` must be a
    /// power-of-two sized array of `NIL`.
    fn relink(&mut self, mut buckets: Vec<usize>) {
        debug_assert!(buckets.len().is_power_of_two());
        let mask = buckets.len() - 1;

        for (index, slot) in self.entries.iter_mut().enumerate() {
            let bucket = slot.hash as usize & mask;
            slot.next = buckets[bucket];
            buckets[bucket] = index;
        }

        self.buckets = buckets;
    }

    #[inline(always)]
    fn bucket_index(&self, hash: u64) -> usize {
        hash as usize & (self.buckets.len() - 1)
    }

    fn find_index(&self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<usize> {
        if self.buckets.is_empty() {
            return None;
        }

        let mut index = self.buckets[self.bucket_index(hash)];
        while index != NIL {
            let slot = &self.entries[index];
            if slot.hash == hash && eq(&slot.value) {
                return Some(index);
            }
            index = slot.next;
        }

        None
    }

    /// Finds a value by hash and equality predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_dict::hash_table::HashTable;
    /// #
    /// let mut table: HashTable<(u64, &str)> = HashTable::new();
    /// table.entry(7, |&(k, _)| k == 1).or_insert((1, "one"));
    ///
    /// assert_eq!(table.find(7, |&(k, _)| k == 1), Some(&(1, "one")));
    /// assert_eq!(table.find(7, |&(k, _)| k == 2), None);
    /// ```
    pub fn find(&self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<&V> {
        self.find_index(hash, eq)
            .map(|index| &self.entries[index].value)
    }

    /// Finds a value by hash and equality predicate, returning a mutable
    /// reference.
    pub fn find_mut(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<&mut V> {
        self.find_index(hash, eq)
            .map(|index| &mut self.entries[index].value)
    }

    /// Gets the entry for the given hash and equality predicate.
    ///
    /// A vacant entry grows the table, if needed, only when it is inserted
    /// into.
    pub fn entry(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Entry<'_, V> {
        match self.find_index(hash, eq) {
            Some(index) => Entry::Occupied(OccupiedEntry { table: self, index }),
            None => Entry::Vacant(VacantEntry { table: self, hash }),
        }
    }

    fn insert_new(&mut self, hash: u64, value: V) -> usize {
        if self.entries.len() >= self.max_pop {
            self.reserve(1);
        }

        let index = self.entries.len();
        let bucket = self.bucket_index(hash);
        self.entries.push(Slot {
            hash,
            next: self.buckets[bucket],
            value,
        });
        self.buckets[bucket] = index;

        index
    }

    /// Returns an iterator over the values in insertion order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Removes every value, yielding them in insertion order. The allocation
    /// is kept.
    pub fn drain(&mut self) -> Drain<'_, V> {
        self.buckets.fill(NIL);
        Drain {
            inner: self.entries.drain(..),
        }
    }

    fn chain_lengths(&self) -> Vec<usize> {
        let mut lengths = vec![0; self.buckets.len()];
        for (bucket, &head) in self.buckets.iter().enumerate() {
            let mut index = head;
            while index != NIL {
                lengths[bucket] += 1;
                index = self.entries[index].next;
            }
        }
        lengths
    }

    /// Returns how many buckets hold chains of each length: element `i` is
    /// the number of buckets whose chain has exactly `i` entries.
    #[cfg(any(test, feature = "stats"))]
    pub fn chain_histogram(&self) -> Vec<usize> {
        let lengths = self.chain_lengths();
        let longest = lengths.iter().copied().max().unwrap_or(0);

        let mut histogram = vec![0; longest + 1];
        for length in lengths {
            histogram[length] += 1;
        }
        histogram
    }

    /// Collects chain statistics for the current table.
    #[cfg(any(test, feature = "stats"))]
    pub fn debug_stats(&self) -> DebugStats {
        let lengths = self.chain_lengths();
        let occupied_buckets = lengths.iter().filter(|&&len| len > 0).count();
        let populated = self.len();

        DebugStats {
            populated,
            capacity: self.max_pop,
            buckets: self.buckets.len(),
            occupied_buckets,
            longest_chain: lengths.iter().copied().max().unwrap_or(0),
            load_factor: if self.buckets.is_empty() {
                0.0
            } else {
                populated as f64 / self.buckets.len() as f64
            },
            average_chain: if occupied_buckets == 0 {
                0.0
            } else {
                populated as f64 / occupied_buckets as f64
            },
            total_bytes: self.buckets.capacity() * core::mem::size_of::<usize>()
                + self.entries.capacity() * core::mem::size_of::<Slot<V>>(),
        }
    }
}

/// A view into a single entry in the table, which may either be vacant or
/// occupied.
pub enum Entry<'a, V> {
    /// A vacant entry.
    Vacant(VacantEntry<'a, V>),
    /// An occupied entry.
    Occupied(OccupiedEntry<'a, V>),
}

impl<'a, V> Entry<'a, V> {
    /// Inserts `default` if the entry is vacant and returns a mutable
    /// reference to the stored value.
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Inserts the result of `default` if the entry is vacant.
    pub fn or_insert_with(self, default: impl FnOnce() -> V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }

    /// Runs `f` on an occupied value. Returns the value if it was occupied.
    pub fn and_modify(self, f: impl FnOnce(&mut V)) -> Option<&'a mut V> {
        match self {
            Entry::Occupied(entry) => {
                let value = entry.into_mut();
                f(value);
                Some(value)
            }
            Entry::Vacant(_) => None,
        }
    }

    /// Inserts `V::default()` if the entry is vacant.
    pub fn or_default(self) -> &'a mut V
    where
        V: Default,
    {
        self.or_insert_with(V::default)
    }
}

/// A view into a vacant entry in the table.
pub struct VacantEntry<'a, V> {
    table: &'a mut HashTable<V>,
    hash: u64,
}

impl<'a, V> VacantEntry<'a, V> {
    /// Inserts `value` under the hash this entry was looked up with.
    pub fn insert(self, value: V) -> &'a mut V {
        let index = self.table.insert_new(self.hash, value);
        &mut self.table.entries[index].value
    }
}

/// A view into an occupied entry in the table.
pub struct OccupiedEntry<'a, V> {
    table: &'a mut HashTable<V>,
    index: usize,
}

impl<'a, V> OccupiedEntry<'a, V> {
    /// Gets a reference to the value in the entry.
    pub fn get(&self) -> &V {
        &self.table.entries[self.index].value
    }

    /// Gets a mutable reference to the value in the entry.
    pub fn get_mut(&mut self) -> &mut V {
        &mut self.table.entries[self.index].value
    }

    /// Converts the entry into a mutable reference bound to the table.
    pub fn into_mut(self) -> &'a mut V {
        &mut self.table.entries[self.index].value
    }
}

/// An iterator over the values of a `HashTable`, in insertion order.
pub struct Iter<'a, V> {
    inner: core::slice::Iter<'a, Slot<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|slot| &slot.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

/// A draining iterator over the values of a `HashTable`.
pub struct Drain<'a, V> {
    inner: alloc::vec::Drain<'a, Slot<V>>,
}

impl<V> Iterator for Drain<'_, V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|slot| slot.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Drain<'_, V> {}
