use crate::key::{CaseInsensitiveKey, Lowercase};
use crate::util::{lowercase_bytes_if_needed, lowercase_text_if_needed};
use std::hash::{Hash, Hasher};

/// Conversion between a caller-facing key and the representation a
/// [`CaseInsensitiveDict`](crate::CaseInsensitiveDict) stores.
///
/// Text and byte keys map to a [`CaseInsensitiveKey`]; every other key type
/// maps to itself and keeps its own equality.
pub trait DictKey: Sized {
    type Mapped: Hash + Eq;

    fn map_key(self) -> Self::Mapped;

    fn unmap_key(mapped: &Self::Mapped) -> &Self;

    fn into_unmapped(mapped: Self::Mapped) -> Self;
}

macro_rules! impl_normalized_key {
    ($($ty:ty),* $(,)?) => {
        $(
            impl DictKey for $ty {
                type Mapped = CaseInsensitiveKey<$ty>;

                fn map_key(self) -> Self::Mapped {
                    CaseInsensitiveKey::new(self)
                }

                fn unmap_key(mapped: &Self::Mapped) -> &Self {
                    mapped.original()
                }

                fn into_unmapped(mapped: Self::Mapped) -> Self {
                    mapped.into_inner()
                }
            }
        )*
    };
}

macro_rules! impl_pass_through_key {
    ($($ty:ty),* $(,)?) => {
        $(
            impl DictKey for $ty {
                type Mapped = $ty;

                fn map_key(self) -> Self::Mapped {
                    self
                }

                fn unmap_key(mapped: &Self::Mapped) -> &Self {
                    mapped
                }

                fn into_unmapped(mapped: Self::Mapped) -> Self {
                    mapped
                }
            }
        )*
    };
}

impl_normalized_key!(String, Vec<u8>);

impl_pass_through_key!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, (),
);

pub(crate) const TEXT_TAG: u8 = 0;
pub(crate) const BYTES_TAG: u8 = 1;
const OTHER_TAG: u8 = 2;

/// A key for dictionaries that mix text, byte and arbitrary keys.
///
/// `Text` and `Bytes` keys are matched case-insensitively, `Other` keys by
/// their own `Eq`. Keys of different variants never match each other, so
/// `Key::Other(42)` and `Key::from("42")` are separate entries.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Key<O> {
    Text(String),
    Bytes(Vec<u8>),
    Other(O),
}

impl<O> Key<O> {
    pub fn other(value: O) -> Self {
        Self::Other(value)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }

    pub fn as_other(&self) -> Option<&O> {
        match self {
            Self::Other(value) => Some(value),
            _ => None,
        }
    }

    /// Whether lookups with this key ignore case.
    pub fn is_case_insensitive(&self) -> bool {
        matches!(self, Self::Text(_) | Self::Bytes(_))
    }
}

// Borrowed lookups in `crate::lookup` rebuild this hash from a tag and a
// `str` or `[u8]`, so the layout must stay in sync with `KeyQuery`.
impl<O: Hash> Hash for Key<O> {
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
            Self::Other(value) => {
                state.write_u8(OTHER_TAG);
                value.hash(state);
            }
        }
    }
}

impl<O> From<&str> for Key<O> {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl<O> From<String> for Key<O> {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<O> From<&[u8]> for Key<O> {
    fn from(value: &[u8]) -> Self {
        Self::Bytes(value.to_vec())
    }
}

impl<O, const N: usize> From<&[u8; N]> for Key<O> {
    fn from(value: &[u8; N]) -> Self {
        Self::Bytes(value.to_vec())
    }
}

impl<O> From<Vec<u8>> for Key<O> {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl<O> Lowercase for Key<O> {
    fn lowercase_if_needed(&self) -> Option<Self> {
        match self {
            Self::Text(text) => lowercase_text_if_needed(text).map(Self::Text),
            Self::Bytes(bytes) => lowercase_bytes_if_needed(bytes).map(Self::Bytes),
            Self::Other(_) => None,
        }
    }
}

impl<O: Hash + Eq> DictKey for Key<O> {
    type Mapped = CaseInsensitiveKey<Key<O>>;

    fn map_key(self) -> Self::Mapped {
        CaseInsensitiveKey::new(self)
    }

    fn unmap_key(mapped: &Self::Mapped) -> &Self {
        mapped.original()
    }

    fn into_unmapped(mapped: Self::Mapped) -> Self {
        mapped.into_inner()
    }
}

#[cfg(test)]
#[path = "dict_key_test.rs"]
mod dict_key_test;
