use core::borrow::Borrow;
use core::fmt::Debug;
use core::ops::Index;

use crate::comparator::Comparator;
use crate::comparator::DefaultComparator;
use crate::error::Error;
use crate::hash_table::Entry as TableEntry;
use crate::hash_table::HashTable;

/// A hash map whose key equality and hashing come from a [`Comparator`].
///
/// `HashMap<K, V, C>` stores key-value pairs in a chaining
/// [`HashTable`] and asks the comparator `C` for every hash and every key
/// comparison. The comparator is fixed when the map is built; there is no way
/// to swap it afterwards, so the map's notion of "same key" cannot change
/// under it.
///
/// Lookups accept any borrowed form of the key the comparator also
/// understands, so a `HashMap<String, _, Ordinal>` can be queried with `&str`.
///
/// # Performance Characteristics
///
/// - **Lookups**: one hash plus a walk of a single chain. Keys that collide
///   only lengthen the chain; they never produce wrong answers.
/// - **Memory**: one `usize` per bucket, plus `(K, V)`, a `u64` hash and a
///   `usize` link per entry.
///
/// # Examples
///
/// ```rust
/// # use chain_dict::HashMap;
/// # use chain_dict::OrdinalIgnoreCase;
/// #
/// let mut map = HashMap::with_comparator(OrdinalIgnoreCase);
/// map.insert("XY".to_string(), 1);
///
/// assert!(map.contains_key("xy"));
/// assert!(!map.contains_key("xz"));
/// ```
#[derive(Clone)]
pub struct HashMap<K, V, C = DefaultComparator> {
    table: HashTable<(K, V)>,
    comparator: C,
}

impl<K, V, C> Debug for HashMap<K, V, C>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut map = f.debug_map();
        for (k, v) in self.table.iter() {
            map.entry(k, v);
        }
        map.finish()
    }
}

impl<K, V, C> HashMap<K, V, C>
where
    C: Comparator<K>,
{
    /// Creates an empty map bound to `comparator`. Does not allocate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_dict::HashMap;
    /// # use chain_dict::Ordinal;
    /// #
    /// let map: HashMap<String, String, _> = HashMap::with_comparator(Ordinal);
    /// assert!(map.is_empty());
    /// assert_eq!(map.capacity(), 0);
    /// ```
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            table: HashTable::new(),
            comparator,
        }
    }

    /// Creates an empty map bound to `comparator` that holds at least
    /// `capacity` entries before it grows.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_dict::DefaultComparator;
    /// # use chain_dict::HashMap;
    /// #
    /// let map: HashMap<i32, i32, _> =
    ///     HashMap::with_capacity_and_comparator(1000, DefaultComparator);
    /// assert!(map.capacity() >= 1000);
    /// ```
    pub fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Self {
        Self {
            table: HashTable::with_capacity(capacity),
            comparator,
        }
    }

    /// Builds a map from `(key, value)` pairs using `comparator`. Later pairs
    /// overwrite the values of earlier comparator-equal keys.
    pub fn from_iter_with_comparator<I>(iter: I, comparator: C) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut map = Self::with_comparator(comparator);
        map.extend(iter);
        map
    }

    /// Returns the number of distinct keys in the map.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the map contains no elements.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the number of entries the map holds before it grows.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Returns the comparator the map was built with.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_dict::ComparerKind;
    /// # use chain_dict::HashMap;
    /// #
    /// let map: HashMap<String, String, _> =
    ///     HashMap::with_comparator(ComparerKind::OrdinalIgnoreCase.comparer());
    /// assert_eq!(map.comparator().kind(), ComparerKind::OrdinalIgnoreCase);
    /// ```
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Removes all elements from the map.
    ///
    /// This operation preserves the map's allocated capacity and its
    /// comparator.
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Reserves capacity for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.table.reserve(additional);
    }

    /// Tries to reserve capacity for at least `additional` more elements,
    /// reporting overflow or allocation failure instead of aborting.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), Error> {
        self.table.try_reserve(additional)
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map did not have this key present, `None` is returned.
    /// If the map did have a comparator-equal key present, the value is
    /// updated, and the old value is returned. The key already stored is kept;
    /// `key` is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_dict::HashMap;
    /// # use chain_dict::OrdinalIgnoreCase;
    /// #
    /// let mut map = HashMap::with_comparator(OrdinalIgnoreCase);
    /// assert_eq!(map.insert("aa".to_string(), 1), None);
    /// assert_eq!(map.insert("AA".to_string(), 2), Some(1));
    /// assert_eq!(map.len(), 1);
    /// assert_eq!(map.keys().next().map(String::as_str), Some("aa"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let comparator = &self.comparator;
        let hash = comparator.hash(&key);
        match self.table.entry(hash, |(k, _)| comparator.equals(k, &key)) {
            TableEntry::Occupied(mut entry) => {
                let old_value = core::mem::replace(&mut entry.get_mut().1, value);
                Some(old_value)
            }
            TableEntry::Vacant(entry) => {
                entry.insert((key, value));
                None
            }
        }
    }

    fn find<Q>(&self, key: &Q) -> Option<&(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        let hash = Comparator::<Q>::hash(&self.comparator, key);
        self.table.find(hash, |(k, _)| {
            Comparator::<Q>::equals(&self.comparator, k.borrow(), key)
        })
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_dict::HashMap;
    /// #
    /// let mut map: HashMap<i32, &str> = HashMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.find(key).map(|(_, v)| v)
    }

    /// Returns the value corresponding to the key, or
    /// [`Error::KeyNotFound`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_dict::Error;
    /// # use chain_dict::HashMap;
    /// #
    /// let mut map: HashMap<i32, i32> = HashMap::with_capacity(1000);
    /// for i in 1..=1000 {
    ///     map.insert(i, i * 10);
    /// }
    /// assert_eq!(map.try_get(&500), Ok(&5000));
    /// assert_eq!(map.try_get(&-1), Err(Error::KeyNotFound));
    /// ```
    pub fn try_get<Q>(&self, key: &Q) -> Result<&V, Error>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.get(key).ok_or(Error::KeyNotFound)
    }

    /// Returns the stored key and its value.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.find(key).map(|(k, v)| (k, v))
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        let comparator = &self.comparator;
        let hash = Comparator::<Q>::hash(comparator, key);
        self.table
            .find_mut(hash, |(k, _)| {
                Comparator::<Q>::equals(comparator, k.borrow(), key)
            })
            .map(|(_, v)| v)
    }

    /// Returns `true` if the map contains a comparator-equal key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_dict::HashMap;
    /// # use chain_dict::Ordinal;
    /// #
    /// let mut map = HashMap::with_comparator(Ordinal);
    /// map.insert("aa".to_string(), ());
    /// assert!(map.contains_key("aa"));
    /// assert!(!map.contains_key("AA"));
    /// ```
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparator<Q>,
    {
        self.find(key).is_some()
    }

    /// Gets the given key's corresponding entry in the map for in-place
    /// manipulation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_dict::HashMap;
    /// #
    /// let mut map: HashMap<i32, &str> = HashMap::new();
    ///
    /// map.entry(1).or_insert("a");
    /// map.entry(2).or_insert("b");
    ///
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), Some(&"b"));
    /// ```
    pub fn entry(&mut self, key: K) -> Entry<'_, K, V> {
        let comparator = &self.comparator;
        let hash = comparator.hash(&key);
        match self.table.entry(hash, |(k, _)| comparator.equals(k, &key)) {
            TableEntry::Occupied(entry) => Entry::Occupied(OccupiedEntry { entry }),
            TableEntry::Vacant(entry) => Entry::Vacant(VacantEntry { entry, key }),
        }
    }

    /// Returns an iterator over the key-value pairs in insertion order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.table.iter(),
        }
    }

    /// Returns an iterator over the keys in insertion order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Returns an iterator over the values in insertion order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Returns an iterator that removes and yields all key-value pairs from the
    /// map.
    ///
    /// After calling `drain()`, the map will be empty.
    pub fn drain(&mut self) -> Drain<'_, K, V> {
        Drain {
            inner: self.table.drain(),
        }
    }

    /// Chain statistics of the underlying table.
    #[cfg(feature = "stats")]
    pub fn debug_stats(&self) -> crate::hash_table::DebugStats {
        self.table.debug_stats()
    }

    /// Chain-length histogram of the underlying table.
    #[cfg(feature = "stats")]
    pub fn chain_histogram(&self) -> alloc::vec::Vec<usize> {
        self.table.chain_histogram()
    }
}

impl<K, V, C> HashMap<K, V, C>
where
    C: Comparator<K> + Default,
{
    /// Creates a new hash map using the default comparator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_dict::HashMap;
    /// #
    /// let map: HashMap<i32, String> = HashMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_comparator(C::default())
    }

    /// Creates a new hash map with the specified capacity using the default
    /// comparator.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, C::default())
    }
}

impl<K, V, C> Default for HashMap<K, V, C>
where
    C: Comparator<K> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> Extend<(K, V)> for HashMap<K, V, C>
where
    C: Comparator<K>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        // Duplicates are likely once the map already holds data; only count on
        // half of the hint then.
        let additional = if self.is_empty() {
            iter.size_hint().0
        } else {
            iter.size_hint().0.div_ceil(2)
        };
        self.reserve(additional);

        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K, V, C> FromIterator<(K, V)> for HashMap<K, V, C>
where
    C: Comparator<K> + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_iter_with_comparator(iter, C::default())
    }
}

impl<K, Q, V, C> Index<&Q> for HashMap<K, V, C>
where
    K: Borrow<Q>,
    Q: ?Sized,
    C: Comparator<K> + Comparator<Q>,
{
    type Output = V;

    /// # Panics
    ///
    /// Panics if the key is not present in the map.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("key not found")
    }
}

impl<'a, K, V, C> IntoIterator for &'a HashMap<K, V, C>
where
    C: Comparator<K>,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A view into a single entry in the map, which may either be vacant or
/// occupied.
///
/// This enum is constructed from the [`entry`] method on [`HashMap`].
///
/// [`entry`]: HashMap::entry
pub enum Entry<'a, K, V> {
    /// A vacant entry.
    Vacant(VacantEntry<'a, K, V>),
    /// An occupied entry.
    Occupied(OccupiedEntry<'a, K, V>),
}

impl<'a, K, V> Entry<'a, K, V> {
    /// Inserts a default value if the entry is vacant and returns a mutable
    /// reference.
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Inserts a value computed from a closure if the entry is vacant and
    /// returns a mutable reference.
    pub fn or_insert_with<F>(self, default: F) -> &'a mut V
    where
        F: FnOnce() -> V,
    {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }

    /// Provides in-place mutable access to an occupied entry before any
    /// potential inserts.
    pub fn and_modify<F>(self, f: F) -> Self
    where
        F: FnOnce(&mut V),
    {
        match self {
            Entry::Occupied(mut entry) => {
                f(entry.get_mut());
                Entry::Occupied(entry)
            }
            Entry::Vacant(entry) => Entry::Vacant(entry),
        }
    }

    /// Returns a reference to this entry's key. For an occupied entry this is
    /// the key already stored, which may differ from the one passed to
    /// [`HashMap::entry`] while still comparing equal.
    pub fn key(&self) -> &K {
        match self {
            Entry::Occupied(entry) => entry.key(),
            Entry::Vacant(entry) => entry.key(),
        }
    }
}

impl<'a, K, V> Entry<'a, K, V>
where
    V: Default,
{
    /// Inserts the default value if the entry is vacant and returns a mutable
    /// reference.
    pub fn or_default(self) -> &'a mut V {
        self.or_insert_with(Default::default)
    }
}

/// A view into a vacant entry in the map.
pub struct VacantEntry<'a, K, V> {
    entry: crate::hash_table::VacantEntry<'a, (K, V)>,
    key: K,
}

impl<'a, K, V> VacantEntry<'a, K, V> {
    /// Gets a reference to the key that would be used when inserting a value.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Take ownership of the key.
    pub fn into_key(self) -> K {
        self.key
    }

    /// Inserts the value into the map and returns a mutable reference to it.
    pub fn insert(self, value: V) -> &'a mut V {
        &mut self.entry.insert((self.key, value)).1
    }
}

/// A view into an occupied entry in the map.
pub struct OccupiedEntry<'a, K, V> {
    entry: crate::hash_table::OccupiedEntry<'a, (K, V)>,
}

impl<'a, K, V> OccupiedEntry<'a, K, V> {
    /// Gets a reference to the stored key.
    pub fn key(&self) -> &K {
        &self.entry.get().0
    }

    /// Gets a reference to the value in the entry.
    pub fn get(&self) -> &V {
        &self.entry.get().1
    }

    /// Gets a mutable reference to the value in the entry.
    pub fn get_mut(&mut self) -> &mut V {
        &mut self.entry.get_mut().1
    }

    /// Converts the entry into a mutable reference to the value.
    pub fn into_mut(self) -> &'a mut V {
        &mut self.entry.into_mut().1
    }

    /// Replaces the value and returns the old one. The stored key is kept.
    pub fn insert(&mut self, value: V) -> V {
        core::mem::replace(&mut self.entry.get_mut().1, value)
    }
}

/// An iterator over the key-value pairs of a `HashMap`.
pub struct Iter<'a, K, V> {
    inner: crate::hash_table::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

/// An iterator over the keys of a `HashMap`.
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

/// An iterator over the values of a `HashMap`.
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

/// A draining iterator over the key-value pairs of a `HashMap`.
pub struct Drain<'a, K, V> {
    inner: crate::hash_table::Drain<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Drain<'a, K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::String;
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::hash::Hash;
    use core::hash::Hasher;

    use rand::TryRngCore;
    use rand::rngs::OsRng;
    use siphasher::sip::SipHasher;

    use super::*;
    use crate::comparator::Ordinal;
    use crate::comparator::OrdinalIgnoreCase;

    /// Natural equality, hashed with randomly keyed SipHash.
    #[derive(Clone)]
    struct SipComparator {
        k1: u64,
        k2: u64,
    }

    impl<K: Hash + Eq + ?Sized> Comparator<K> for SipComparator {
        fn equals(&self, a: &K, b: &K) -> bool {
            a == b
        }

        fn hash(&self, key: &K) -> u64 {
            let mut hasher = SipHasher::new_with_keys(self.k1, self.k2);
            key.hash(&mut hasher);
            hasher.finish()
        }
    }

    impl Default for SipComparator {
        fn default() -> Self {
            let mut rng = OsRng;
            Self {
                k1: rng.try_next_u64().unwrap_or(0),
                k2: rng.try_next_u64().unwrap_or(0),
            }
        }
    }

    /// Natural equality, but every key lands in the same chain.
    #[derive(Clone, Copy, Default)]
    struct ConstantHash;

    impl<K: Eq + ?Sized> Comparator<K> for ConstantHash {
        fn equals(&self, a: &K, b: &K) -> bool {
            a == b
        }

        fn hash(&self, _: &K) -> u64 {
            0x2a
        }
    }

    #[test]
    fn test_new_and_with_comparator() {
        let map: HashMap<i32, String, SipComparator> = HashMap::new();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
        assert_eq!(map.capacity(), 0);

        let map2 = HashMap::<i32, String, _>::with_comparator(SipComparator::default());
        assert!(map2.is_empty());
        assert_eq!(map2.len(), 0);
    }

    #[test]
    fn test_with_capacity() {
        let map: HashMap<i32, String, SipComparator> = HashMap::with_capacity(100);
        assert!(map.capacity() >= 100);
        assert!(map.is_empty());

        let map2 =
            HashMap::<i32, String, _>::with_capacity_and_comparator(200, SipComparator::default());
        assert!(map2.capacity() >= 200);
        assert!(map2.is_empty());
    }

    #[test]
    fn test_insert_and_get() {
        let mut map = HashMap::with_comparator(SipComparator::default());

        assert_eq!(map.insert(1, "hello".to_string()), None);
        assert_eq!(map.len(), 1);
        assert!(!map.is_empty());

        assert_eq!(map.get(&1), Some(&"hello".to_string()));
        assert_eq!(map.get(&2), None);

        assert_eq!(
            map.insert(1, "world".to_string()),
            Some("hello".to_string())
        );
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&1), Some(&"world".to_string()));
    }

    #[test]
    fn test_try_get() {
        let mut map = HashMap::with_capacity_and_comparator(1000, SipComparator::default());
        for i in 1..=1000i32 {
            map.insert(i, i * 3);
        }

        assert_eq!(map.try_get(&500), Ok(&1500));
        assert_eq!(map.try_get(&-1), Err(Error::KeyNotFound));
        assert_eq!(map.try_get(&1001), Err(Error::KeyNotFound));
    }

    #[test]
    fn test_get_mut() {
        let mut map = HashMap::with_comparator(SipComparator::default());
        map.insert(1, "hello".to_string());

        if let Some(value) = map.get_mut(&1) {
            value.push_str(" world");
        }

        assert_eq!(map.get(&1), Some(&"hello world".to_string()));
        assert_eq!(map.get_mut(&2), None);
    }

    #[test]
    fn test_contains_key() {
        let mut map = HashMap::with_comparator(SipComparator::default());
        assert!(!map.contains_key(&1));

        map.insert(1, "value".to_string());
        assert!(map.contains_key(&1));
        assert!(!map.contains_key(&2));
    }

    #[test]
    fn test_repeated_insert_is_idempotent() {
        let mut map = HashMap::with_comparator(Ordinal);
        for _ in 0..5 {
            map.insert("key".to_string(), 7);
            assert_eq!(map.len(), 1);
            assert_eq!(map.get("key"), Some(&7));
        }
    }

    #[test]
    fn test_overwrite_keeps_stored_key() {
        let mut map = HashMap::with_comparator(OrdinalIgnoreCase);
        map.insert("Key".to_string(), 1);
        assert_eq!(map.insert("KEY".to_string(), 2), Some(1));

        assert_eq!(map.len(), 1);
        assert_eq!(
            map.get_key_value("key"),
            Some((&"Key".to_string(), &2))
        );
        assert_eq!(map.entry("kEy".to_string()).key(), "Key");
    }

    #[test]
    fn test_comparator_isolation() {
        let mut ignore_case = HashMap::with_comparator(OrdinalIgnoreCase);
        ignore_case.insert("aa".to_string(), 1);
        assert!(ignore_case.contains_key("AA"));

        let mut ordinal = HashMap::with_comparator(Ordinal);
        ordinal.insert("aa".to_string(), 1);
        assert!(!ordinal.contains_key("AA"));
        assert!(ordinal.contains_key("aa"));
    }

    #[test]
    fn test_clear() {
        let mut map = HashMap::with_comparator(SipComparator::default());
        map.insert(1, "hello".to_string());
        map.insert(2, "world".to_string());

        assert_eq!(map.len(), 2);
        let capacity = map.capacity();
        map.clear();
        assert_eq!(map.len(), 0);
        assert!(map.is_empty());
        assert_eq!(map.capacity(), capacity);
        assert!(!map.contains_key(&1));
        assert!(!map.contains_key(&2));
    }

    #[test]
    fn test_reserve() {
        let mut map = HashMap::<i32, String, _>::with_comparator(SipComparator::default());
        let initial_capacity = map.capacity();

        map.reserve(1000);
        assert!(map.capacity() >= initial_capacity + 1000);

        assert!(map.try_reserve(10).is_ok());
        assert_eq!(map.try_reserve(usize::MAX), Err(Error::CapacityOverflow));
    }

    #[test]
    fn test_entry_api() {
        let mut map = HashMap::with_comparator(SipComparator::default());

        let value = map.entry(1).or_insert("hello".to_string());
        assert_eq!(value, &"hello".to_string());
        assert_eq!(map.len(), 1);

        let value = map.entry(1).or_insert("world".to_string());
        assert_eq!(value, &"hello".to_string());
        assert_eq!(map.len(), 1);

        map.entry(2).or_insert_with(|| "computed".to_string());
        assert_eq!(map.get(&2), Some(&"computed".to_string()));

        map.entry(1)
            .and_modify(|v| v.push_str(" world"))
            .or_insert("default".to_string());
        assert_eq!(map.get(&1), Some(&"hello world".to_string()));

        assert_eq!(map.entry(3).key(), &3);
    }

    #[test]
    fn test_entry_or_default() {
        let mut map: HashMap<i32, Vec<i32>, SipComparator> =
            HashMap::with_comparator(SipComparator::default());

        map.entry(1).or_default().push(42);
        assert_eq!(map.get(&1), Some(&vec![42]));

        map.entry(1).or_default().push(24);
        assert_eq!(map.get(&1), Some(&vec![42, 24]));
    }

    #[test]
    fn test_occupied_entry() {
        let mut map = HashMap::with_comparator(SipComparator::default());
        map.insert(1, "hello".to_string());

        match map.entry(1) {
            Entry::Occupied(mut entry) => {
                assert_eq!(entry.key(), &1);
                assert_eq!(entry.get(), &"hello".to_string());

                *entry.get_mut() = "world".to_string();
                assert_eq!(entry.get(), &"world".to_string());

                let old_value = entry.insert("new".to_string());
                assert_eq!(old_value, "world".to_string());
                assert_eq!(entry.get(), &"new".to_string());
            }
            Entry::Vacant(_) => panic!("Expected occupied entry"),
        }

        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&1), Some(&"new".to_string()));
    }

    #[test]
    fn test_vacant_entry() {
        let mut map = HashMap::with_comparator(SipComparator::default());

        match map.entry(1) {
            Entry::Vacant(entry) => {
                assert_eq!(entry.key(), &1);

                let value = entry.insert("hello".to_string());
                assert_eq!(value, &"hello".to_string());
            }
            Entry::Occupied(_) => panic!("Expected vacant entry"),
        }

        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&1), Some(&"hello".to_string()));

        match map.entry(2) {
            Entry::Vacant(entry) => assert_eq!(entry.into_key(), 2),
            Entry::Occupied(_) => panic!("Expected vacant entry"),
        }
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_iterators_follow_insertion_order() {
        let mut map = HashMap::with_comparator(SipComparator::default());
        map.insert(3, "three".to_string());
        map.insert(1, "one".to_string());
        map.insert(2, "two".to_string());
        map.insert(1, "uno".to_string());

        let pairs: Vec<(i32, String)> = map.iter().map(|(k, v)| (*k, v.clone())).collect();
        assert_eq!(
            pairs,
            vec![
                (3, "three".to_string()),
                (1, "uno".to_string()),
                (2, "two".to_string())
            ]
        );

        let keys: Vec<i32> = map.keys().copied().collect();
        assert_eq!(keys, vec![3, 1, 2]);

        let values: Vec<&str> = map.values().map(String::as_str).collect();
        assert_eq!(values, vec!["three", "uno", "two"]);

        assert_eq!((&map).into_iter().len(), 3);
    }

    #[test]
    fn test_drain() {
        let mut map = HashMap::with_comparator(SipComparator::default());
        map.insert(1, "one".to_string());
        map.insert(2, "two".to_string());
        map.insert(3, "three".to_string());

        let drained: Vec<(i32, String)> = map.drain().collect();
        assert_eq!(drained.len(), 3);
        assert!(map.is_empty());
        assert!(!map.contains_key(&1));

        assert_eq!(drained[0], (1, "one".to_string()));
        assert_eq!(drained[2], (3, "three".to_string()));
    }

    #[test]
    fn test_multiple_insertions() {
        let mut map = HashMap::with_comparator(SipComparator::default());

        for i in 0..100 {
            map.insert(i, format!("value_{}", i));
        }

        assert_eq!(map.len(), 100);

        for i in 0..100 {
            assert_eq!(map.get(&i), Some(&format!("value_{}", i)));
        }
    }

    #[test]
    fn test_collision_handling() {
        let mut map = HashMap::with_comparator(ConstantHash);

        for i in 0..1000 {
            map.insert(i, i * 2);
        }

        assert_eq!(map.len(), 1000);

        for i in 0..1000 {
            assert!(map.contains_key(&i));
            assert_eq!(map.get(&i), Some(&(i * 2)));
        }
        for i in 1000..2000 {
            assert!(!map.contains_key(&i));
        }

        for i in (0..1000).step_by(2) {
            map.insert(i, -i);
        }
        assert_eq!(map.len(), 1000);
        assert_eq!(map.get(&998), Some(&-998));
        assert_eq!(map.get(&999), Some(&1998));
    }

    #[test]
    fn test_string_keys() {
        let mut map = HashMap::with_comparator(SipComparator::default());

        map.insert("hello".to_string(), 1);
        map.insert("world".to_string(), 2);
        map.insert("rust".to_string(), 3);

        assert_eq!(map.get("hello"), Some(&1));
        assert_eq!(map.get(&"world".to_string()), Some(&2));
        assert_eq!(map["rust"], 3);
        assert_eq!(map.get("missing"), None);
    }

    #[test]
    #[should_panic(expected = "key not found")]
    fn test_index_missing_key_panics() {
        let map: HashMap<i32, i32> = HashMap::new();
        let value: i32 = map[&1];
        assert_eq!(value, 0);
    }

    #[test]
    fn test_default_trait() {
        let map: HashMap<i32, String, SipComparator> = HashMap::default();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
    }

    #[test]
    fn test_extend_and_from_iter() {
        let map: HashMap<i32, i32> = (1..=10).map(|i| (i, i * i)).collect();
        assert_eq!(map.len(), 10);
        assert_eq!(map.get(&7), Some(&49));

        let mut words = HashMap::from_iter_with_comparator(
            ["a", "B", "A"].map(|w| (w.to_string(), w.len())),
            OrdinalIgnoreCase,
        );
        assert_eq!(words.len(), 2);

        words.extend([("c".to_string(), 1), ("b".to_string(), 9)]);
        assert_eq!(words.len(), 3);
        assert_eq!(words.get("B"), Some(&9));
    }

    #[test]
    fn test_complex_values() {
        let mut map = HashMap::with_comparator(SipComparator::default());

        let vec1 = vec![1, 2, 3];
        let vec2 = vec![4, 5, 6];

        map.insert("first".to_string(), vec1.clone());
        map.insert("second".to_string(), vec2.clone());

        assert_eq!(map.get("first"), Some(&vec1));
        assert_eq!(map.get("second"), Some(&vec2));

        if let Some(v) = map.get_mut("first") {
            v.push(4);
        }

        assert_eq!(map.get("first"), Some(&vec![1, 2, 3, 4]));
    }

    #[test]
    fn test_debug_format() {
        let mut map = HashMap::with_comparator(Ordinal);
        map.insert("b".to_string(), 2);
        map.insert("a".to_string(), 1);
        assert_eq!(format!("{map:?}"), r#"{"b": 2, "a": 1}"#);
    }
}
