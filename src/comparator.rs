use core::fmt;
use core::hash::BuildHasher;
use core::hash::Hash;
use core::hash::Hasher;

cfg_if::cfg_if! {
    if #[cfg(feature = "foldhash")] {
        type FixedBuildHasher = foldhash::fast::FixedState;

        const HASH_SEED: u64 = 0x5eed_c0de_0bad_f00d;

        #[inline(always)]
        fn fixed_build_hasher() -> FixedBuildHasher {
            foldhash::fast::FixedState::with_seed(HASH_SEED)
        }
    } else if #[cfg(feature = "std")] {
        type FixedBuildHasher = core::hash::BuildHasherDefault<std::hash::DefaultHasher>;

        #[inline(always)]
        fn fixed_build_hasher() -> FixedBuildHasher {
            FixedBuildHasher::default()
        }
    } else {
        compile_error!("either the `foldhash` or the `std` feature must be enabled");
    }
}

/// Key equality and hashing strategy for a [`HashMap`](crate::HashMap).
///
/// Implementations must keep the two operations consistent: whenever
/// `equals(a, b)` holds, `hash(a) == hash(b)` must hold as well. Equality must
/// be an equivalence relation. Both functions are total, including on empty
/// keys.
///
/// A map that looks keys up through a borrowed form `Q` (for example `str`
/// for `String` keys) needs `Comparator<Q>` to agree with `Comparator<K>` on
/// `k.borrow()`.
pub trait Comparator<K: ?Sized> {
    /// Returns `true` if `a` and `b` are the same key under this strategy.
    fn equals(&self, a: &K, b: &K) -> bool;

    /// Returns the hash code of `key`.
    fn hash(&self, key: &K) -> u64;
}

/// Uses the key type's own `Eq` and `Hash`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DefaultComparator;

impl<K> Comparator<K> for DefaultComparator
where
    K: Hash + Eq + ?Sized,
{
    #[inline]
    fn equals(&self, a: &K, b: &K) -> bool {
        a == b
    }

    #[inline]
    fn hash(&self, key: &K) -> u64 {
        fixed_build_hasher().hash_one(key)
    }
}

/// Exact comparison of UTF-8 text, byte by byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ordinal;

impl Comparator<str> for Ordinal {
    #[inline]
    fn equals(&self, a: &str, b: &str) -> bool {
        a.as_bytes() == b.as_bytes()
    }

    #[inline]
    fn hash(&self, key: &str) -> u64 {
        let mut hasher = fixed_build_hasher().build_hasher();
        hasher.write(key.as_bytes());
        hasher.finish()
    }
}

/// Text comparison after simple, locale-independent upper-case folding.
///
/// Each `char` folds to its Unicode default upper-case mapping when that
/// mapping is a single `char`, and to itself otherwise. Two strings are equal
/// when their folded `char` sequences are equal, so the fold never depends on
/// the environment the program runs in.
///
/// # Examples
///
/// ```rust
/// # use chain_dict::Comparator;
/// # use chain_dict::OrdinalIgnoreCase;
/// #
/// assert!(OrdinalIgnoreCase.equals("Straße", "STRAßE"));
/// assert_eq!(OrdinalIgnoreCase.hash("xy"), OrdinalIgnoreCase.hash("XY"));
/// assert!(!OrdinalIgnoreCase.equals("xy", "xz"));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OrdinalIgnoreCase;

#[inline]
fn fold_char(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_uppercase();
    }

    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

impl Comparator<str> for OrdinalIgnoreCase {
    fn equals(&self, a: &str, b: &str) -> bool {
        if a.is_ascii() && b.is_ascii() {
            return a.eq_ignore_ascii_case(b);
        }
        a.chars().map(fold_char).eq(b.chars().map(fold_char))
    }

    fn hash(&self, key: &str) -> u64 {
        let mut hasher = fixed_build_hasher().build_hasher();
        for c in key.chars() {
            hasher.write_u32(fold_char(c) as u32);
        }
        hasher.finish()
    }
}

macro_rules! string_comparator {
    ($($comparator:ty),*) => {
        $(
            impl Comparator<alloc::string::String> for $comparator {
                #[inline]
                fn equals(&self, a: &alloc::string::String, b: &alloc::string::String) -> bool {
                    Comparator::<str>::equals(self, a.as_str(), b.as_str())
                }

                #[inline]
                fn hash(&self, key: &alloc::string::String) -> u64 {
                    Comparator::<str>::hash(self, key.as_str())
                }
            }
        )*
    };
}

string_comparator!(Ordinal, OrdinalIgnoreCase, StringComparer);

/// Names one of the three text comparison strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComparerKind {
    /// Natural `str` equality.
    Default,
    /// Byte-exact comparison.
    Ordinal,
    /// Comparison after simple upper-case folding.
    OrdinalIgnoreCase,
}

impl ComparerKind {
    /// Every kind, in the order benchmarks report them.
    pub const ALL: [ComparerKind; 3] = [
        ComparerKind::Default,
        ComparerKind::Ordinal,
        ComparerKind::OrdinalIgnoreCase,
    ];

    /// The strategy this kind names.
    pub fn comparer(self) -> StringComparer {
        match self {
            ComparerKind::Default => StringComparer::Default(DefaultComparator),
            ComparerKind::Ordinal => StringComparer::Ordinal(Ordinal),
            ComparerKind::OrdinalIgnoreCase => StringComparer::OrdinalIgnoreCase(OrdinalIgnoreCase),
        }
    }
}

impl fmt::Display for ComparerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ComparerKind::Default => "Default",
            ComparerKind::Ordinal => "Ordinal",
            ComparerKind::OrdinalIgnoreCase => "OrdinalIgnoreCase",
        })
    }
}

/// A text comparer picked at runtime.
///
/// Use this when the strategy is only known once a configuration has been
/// read; when it is known statically, prefer the concrete comparator type so
/// the map is monomorphized over it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StringComparer {
    /// See [`DefaultComparator`].
    Default(DefaultComparator),
    /// See [`Ordinal`].
    Ordinal(Ordinal),
    /// See [`OrdinalIgnoreCase`].
    OrdinalIgnoreCase(OrdinalIgnoreCase),
}

impl StringComparer {
    /// Which strategy this comparer applies.
    pub fn kind(&self) -> ComparerKind {
        match self {
            StringComparer::Default(_) => ComparerKind::Default,
            StringComparer::Ordinal(_) => ComparerKind::Ordinal,
            StringComparer::OrdinalIgnoreCase(_) => ComparerKind::OrdinalIgnoreCase,
        }
    }
}

impl Default for StringComparer {
    fn default() -> Self {
        StringComparer::Default(DefaultComparator)
    }
}

impl From<ComparerKind> for StringComparer {
    fn from(kind: ComparerKind) -> Self {
        kind.comparer()
    }
}

impl Comparator<str> for StringComparer {
    #[inline]
    fn equals(&self, a: &str, b: &str) -> bool {
        match self {
            StringComparer::Default(c) => c.equals(a, b),
            StringComparer::Ordinal(c) => c.equals(a, b),
            StringComparer::OrdinalIgnoreCase(c) => c.equals(a, b),
        }
    }

    #[inline]
    fn hash(&self, key: &str) -> u64 {
        match self {
            StringComparer::Default(c) => c.hash(key),
            StringComparer::Ordinal(c) => c.hash(key),
            StringComparer::OrdinalIgnoreCase(c) => c.hash(key),
        }
    }
}
