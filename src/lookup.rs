//! Borrowed lookup keys.
//!
//! Read and remove operations on a [`CaseInsensitiveDict`](crate::CaseInsensitiveDict)
//! accept anything implementing [`Lookup`]. Borrowed text and bytes are
//! searched for without building an owned key; a lowercase copy is only made
//! when the key has uppercase letters.

use crate::dict_key::{BYTES_TAG, DictKey, Key, TEXT_TAG};
use crate::key::CaseInsensitiveKey;
use crate::util::{lowercase_bytes_if_needed, lowercase_text_if_needed};
use indexmap::Equivalent;
use std::borrow::Cow;
use std::hash::{Hash, Hasher};

/// A value a dictionary keyed by `K` can be searched with.
pub trait Lookup<K: DictKey> {
    /// Hashes and compares like the stored key it should find.
    type Query: Hash + Equivalent<K::Mapped>;

    fn query(self) -> Self::Query;
}

/// Lowercased text or bytes, borrowed when the key had nothing to lower.
pub struct Lowered<'a, T: ?Sized + ToOwned> {
    lowered: Cow<'a, T>,
}

impl<'a> Lowered<'a, str> {
    fn text(value: &'a str) -> Self {
        let lowered = match lowercase_text_if_needed(value) {
            Some(lowered) => Cow::Owned(lowered),
            None => Cow::Borrowed(value),
        };
        Self { lowered }
    }

    fn owned_text(value: String) -> Self {
        let lowered = lowercase_text_if_needed(&value).unwrap_or(value);
        Self {
            lowered: Cow::Owned(lowered),
        }
    }
}

impl<'a> Lowered<'a, [u8]> {
    fn bytes(value: &'a [u8]) -> Self {
        let lowered = match lowercase_bytes_if_needed(value) {
            Some(lowered) => Cow::Owned(lowered),
            None => Cow::Borrowed(value),
        };
        Self { lowered }
    }

    fn owned_bytes(value: Vec<u8>) -> Self {
        let lowered = lowercase_bytes_if_needed(&value).unwrap_or(value);
        Self {
            lowered: Cow::Owned(lowered),
        }
    }
}

impl<T: ?Sized + ToOwned + Hash> Hash for Lowered<'_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (*self.lowered).hash(state);
    }
}

impl Equivalent<CaseInsensitiveKey<String>> for Lowered<'_, str> {
    fn equivalent(&self, key: &CaseInsensitiveKey<String>) -> bool {
        *self.lowered == *key.normalized().as_str()
    }
}

impl Equivalent<CaseInsensitiveKey<Vec<u8>>> for Lowered<'_, [u8]> {
    fn equivalent(&self, key: &CaseInsensitiveKey<Vec<u8>>) -> bool {
        *self.lowered == *key.normalized().as_slice()
    }
}

/// Borrowed text or bytes looked up in a dictionary keyed by [`Key`].
///
/// Hashes exactly like the matching [`Key`] variant, and never matches
/// [`Key::Other`].
pub enum KeyQuery<'a> {
    Text(Lowered<'a, str>),
    Bytes(Lowered<'a, [u8]>),
}

impl Hash for KeyQuery<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Text(text) => {
                state.write_u8(TEXT_TAG);
                text.hash(state);
            }
            Self::Bytes(bytes) => {
                state.write_u8(BYTES_TAG);
                bytes.hash(state);
            }
        }
    }
}

impl<O> Equivalent<CaseInsensitiveKey<Key<O>>> for KeyQuery<'_> {
    fn equivalent(&self, key: &CaseInsensitiveKey<Key<O>>) -> bool {
        match (self, key.normalized()) {
            (Self::Text(needle), Key::Text(stored)) => *needle.lowered == *stored.as_str(),
            (Self::Bytes(needle), Key::Bytes(stored)) => *needle.lowered == *stored.as_slice(),
            _ => false,
        }
    }
}

impl<'a> Lookup<String> for &'a str {
    type Query = Lowered<'a, str>;

    fn query(self) -> Self::Query {
        Lowered::text(self)
    }
}

impl<'a> Lookup<String> for &'a String {
    type Query = Lowered<'a, str>;

    fn query(self) -> Self::Query {
        Lowered::text(self)
    }
}

impl Lookup<String> for String {
    type Query = Lowered<'static, str>;

    fn query(self) -> Self::Query {
        Lowered::owned_text(self)
    }
}

impl<'a> Lookup<Vec<u8>> for &'a [u8] {
    type Query = Lowered<'a, [u8]>;

    fn query(self) -> Self::Query {
        Lowered::bytes(self)
    }
}

impl<'a, const N: usize> Lookup<Vec<u8>> for &'a [u8; N] {
    type Query = Lowered<'a, [u8]>;

    fn query(self) -> Self::Query {
        Lowered::bytes(self)
    }
}

impl<'a> Lookup<Vec<u8>> for &'a Vec<u8> {
    type Query = Lowered<'a, [u8]>;

    fn query(self) -> Self::Query {
        Lowered::bytes(self)
    }
}

impl Lookup<Vec<u8>> for Vec<u8> {
    type Query = Lowered<'static, [u8]>;

    fn query(self) -> Self::Query {
        Lowered::owned_bytes(self)
    }
}

impl<'a, O: Hash + Eq> Lookup<Key<O>> for &'a str {
    type Query = KeyQuery<'a>;

    fn query(self) -> Self::Query {
        KeyQuery::Text(Lowered::text(self))
    }
}

impl<'a, O: Hash + Eq> Lookup<Key<O>> for &'a String {
    type Query = KeyQuery<'a>;

    fn query(self) -> Self::Query {
        KeyQuery::Text(Lowered::text(self))
    }
}

impl<O: Hash + Eq> Lookup<Key<O>> for String {
    type Query = KeyQuery<'static>;

    fn query(self) -> Self::Query {
        KeyQuery::Text(Lowered::owned_text(self))
    }
}

impl<'a, O: Hash + Eq> Lookup<Key<O>> for &'a [u8] {
    type Query = KeyQuery<'a>;

    fn query(self) -> Self::Query {
        KeyQuery::Bytes(Lowered::bytes(self))
    }
}

impl<'a, O: Hash + Eq, const N: usize> Lookup<Key<O>> for &'a [u8; N] {
    type Query = KeyQuery<'a>;

    fn query(self) -> Self::Query {
        KeyQuery::Bytes(Lowered::bytes(self))
    }
}

impl<O: Hash + Eq> Lookup<Key<O>> for Vec<u8> {
    type Query = KeyQuery<'static>;

    fn query(self) -> Self::Query {
        KeyQuery::Bytes(Lowered::owned_bytes(self))
    }
}

impl<O: Hash + Eq> Lookup<Key<O>> for Key<O> {
    type Query = CaseInsensitiveKey<Key<O>>;

    fn query(self) -> Self::Query {
        CaseInsensitiveKey::new(self)
    }
}

macro_rules! impl_pass_through_lookup {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Lookup<$ty> for $ty {
                type Query = $ty;

                fn query(self) -> Self::Query {
                    self
                }
            }
        )*
    };
}

impl_pass_through_lookup!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, (),
);

#[cfg(test)]
#[path = "lookup_test.rs"]
mod lookup_test;
