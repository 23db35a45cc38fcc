//! Cache key derivation.
//!
//! A [`CacheKey`] is a deterministic digest of a call's arguments. Key
//! derivation is fallible: a value that cannot identify a cache slot
//! deterministically (a float `NaN`, which never compares equal to itself)
//! is rejected with [`UnhashableArgumentError`] before the wrapped function
//! is ever invoked.

use std::fmt;
use std::hash::{DefaultHasher, Hash, Hasher};

/// A deterministic, hashable identifier derived from a call's arguments.
///
/// Keys are opaque; equal argument values always derive equal keys within
/// one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CacheKey(u64);

impl CacheKey {
    #[inline]
    fn from_hasher(hasher: DefaultHasher) -> Self {
        Self(hasher.finish())
    }

    #[inline]
    const fn raw(self) -> u64 {
        self.0
    }
}

static_assertions::assert_impl_all!(CacheKey: Copy, Eq, Hash, Send, Sync);

/// Error returned when an argument cannot contribute to a cache key.
///
/// Most hashability is settled at compile time by the [`ToCacheKey`] impls;
/// the runtime failure case is a float `NaN`, which never compares equal to
/// itself and so cannot name a cache slot.
///
/// # Examples
///
/// ```rust
/// use funky::memo::ToCacheKey;
///
/// let error = f64::NAN.to_cache_key().unwrap_err();
/// assert_eq!(error.argument, "f64");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnhashableArgumentError {
    /// The type of the offending argument.
    pub argument: &'static str,
    /// Why the argument cannot form a key.
    pub reason: &'static str,
}

impl fmt::Display for UnhashableArgumentError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{} argument cannot form a cache key: {}",
            self.argument, self.reason
        )
    }
}

impl std::error::Error for UnhashableArgumentError {}

/// Fallible derivation of a [`CacheKey`] from a value.
///
/// Implemented for the primitive types, strings, floats (with `NaN`
/// rejected), `Option`, slices, `Vec`, references, and tuples up to arity
/// six — so a call's positional arguments are modelled as a tuple.
///
/// # Examples
///
/// ```rust
/// use funky::memo::ToCacheKey;
///
/// let key = (1, "x").to_cache_key().unwrap();
/// assert_eq!(key, (1, "x").to_cache_key().unwrap());
/// assert_ne!(key, (2, "x").to_cache_key().unwrap());
/// ```
pub trait ToCacheKey {
    /// Feeds this value into the key hasher.
    ///
    /// # Errors
    ///
    /// Returns [`UnhashableArgumentError`] when the value cannot identify a
    /// cache slot deterministically.
    fn write_key(&self, hasher: &mut DefaultHasher) -> Result<(), UnhashableArgumentError>;

    /// Derives the cache key for this value.
    ///
    /// # Errors
    ///
    /// Returns [`UnhashableArgumentError`] when the value cannot identify a
    /// cache slot deterministically.
    fn to_cache_key(&self) -> Result<CacheKey, UnhashableArgumentError> {
        let mut hasher = DefaultHasher::new();
        self.write_key(&mut hasher)?;
        Ok(CacheKey::from_hasher(hasher))
    }
}

macro_rules! cache_key_via_hash {
    ($($name:ty),+ $(,)?) => {$(
        impl ToCacheKey for $name {
            #[inline]
            fn write_key(
                &self,
                hasher: &mut DefaultHasher,
            ) -> Result<(), UnhashableArgumentError> {
                self.hash(hasher);
                Ok(())
            }
        }
    )+};
}

cache_key_via_hash!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    str,
    String,
);

macro_rules! cache_key_for_float {
    ($($float:ty),+ $(,)?) => {$(
        impl ToCacheKey for $float {
            fn write_key(
                &self,
                hasher: &mut DefaultHasher,
            ) -> Result<(), UnhashableArgumentError> {
                if self.is_nan() {
                    return Err(UnhashableArgumentError {
                        argument: stringify!($float),
                        reason: "NaN never compares equal to itself",
                    });
                }
                // collapse -0.0 into 0.0: they compare equal, so they must
                // derive the same key
                let bits = if *self == 0.0 { 0 } else { self.to_bits() };
                bits.hash(hasher);
                Ok(())
            }
        }
    )+};
}

cache_key_for_float!(f32, f64);

impl<T: ToCacheKey> ToCacheKey for Option<T> {
    fn write_key(&self, hasher: &mut DefaultHasher) -> Result<(), UnhashableArgumentError> {
        match self {
            None => 0_u8.hash(hasher),
            Some(value) => {
                1_u8.hash(hasher);
                value.write_key(hasher)?;
            }
        }
        Ok(())
    }
}

impl<T: ToCacheKey> ToCacheKey for [T] {
    fn write_key(&self, hasher: &mut DefaultHasher) -> Result<(), UnhashableArgumentError> {
        self.len().hash(hasher);
        for item in self {
            item.write_key(hasher)?;
        }
        Ok(())
    }
}

impl<T: ToCacheKey> ToCacheKey for Vec<T> {
    #[inline]
    fn write_key(&self, hasher: &mut DefaultHasher) -> Result<(), UnhashableArgumentError> {
        self.as_slice().write_key(hasher)
    }
}

impl<T: ToCacheKey + ?Sized> ToCacheKey for &T {
    #[inline]
    fn write_key(&self, hasher: &mut DefaultHasher) -> Result<(), UnhashableArgumentError> {
        (**self).write_key(hasher)
    }
}

macro_rules! cache_key_for_tuple {
    ($($name:ident : $index:tt),+) => {
        impl<$($name: ToCacheKey),+> ToCacheKey for ($($name,)+) {
            fn write_key(
                &self,
                hasher: &mut DefaultHasher,
            ) -> Result<(), UnhashableArgumentError> {
                $(self.$index.write_key(hasher)?;)+
                Ok(())
            }
        }
    };
}

cache_key_for_tuple!(A: 0);
cache_key_for_tuple!(A: 0, B: 1);
cache_key_for_tuple!(A: 0, B: 1, C: 2);
cache_key_for_tuple!(A: 0, B: 1, C: 2, D: 3);
cache_key_for_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4);
cache_key_for_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5);

/// Builds a [`CacheKey`] from positional and keyword arguments.
///
/// Keyword arguments are sorted by name before hashing, so the derived key
/// does not depend on the order in which they were supplied.
///
/// # Examples
///
/// ```rust
/// use funky::memo::CallKeyBuilder;
///
/// let forward = CallKeyBuilder::new()
///     .positional(&1)
///     .unwrap()
///     .keyword("a", &true)
///     .unwrap()
///     .keyword("b", &"x")
///     .unwrap()
///     .finish();
///
/// let reversed = CallKeyBuilder::new()
///     .positional(&1)
///     .unwrap()
///     .keyword("b", &"x")
///     .unwrap()
///     .keyword("a", &true)
///     .unwrap()
///     .finish();
///
/// assert_eq!(forward, reversed);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CallKeyBuilder {
    positional: Vec<u64>,
    keyword: Vec<(String, u64)>,
}

impl CallKeyBuilder {
    /// Creates an empty builder.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a positional argument.
    ///
    /// # Errors
    ///
    /// Returns [`UnhashableArgumentError`] when the value cannot form a key.
    pub fn positional<T: ToCacheKey + ?Sized>(
        mut self,
        value: &T,
    ) -> Result<Self, UnhashableArgumentError> {
        self.positional.push(value.to_cache_key()?.raw());
        Ok(self)
    }

    /// Appends a keyword argument.
    ///
    /// # Errors
    ///
    /// Returns [`UnhashableArgumentError`] when the value cannot form a key.
    pub fn keyword<T: ToCacheKey + ?Sized>(
        mut self,
        name: &str,
        value: &T,
    ) -> Result<Self, UnhashableArgumentError> {
        self.keyword.push((name.to_owned(), value.to_cache_key()?.raw()));
        Ok(self)
    }

    /// Combines the collected arguments into the final key.
    pub fn finish(mut self) -> CacheKey {
        self.keyword.sort();
        let mut hasher = DefaultHasher::new();
        self.positional.len().hash(&mut hasher);
        for sub_key in &self.positional {
            sub_key.hash(&mut hasher);
        }
        for (name, sub_key) in &self.keyword {
            name.hash(&mut hasher);
            sub_key.hash(&mut hasher);
        }
        CacheKey::from_hasher(hasher)
    }
}
