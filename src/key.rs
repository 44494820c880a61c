use crate::util::{lowercase_bytes_if_needed, lowercase_text_if_needed};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Types with a notion of letter case.
///
/// `lowercase_if_needed` returns `None` when the value is already in its
/// lowercase form, which lets [`CaseInsensitiveKey`] skip the second copy.
pub trait Lowercase: Sized {
    fn lowercase_if_needed(&self) -> Option<Self>;
}

impl Lowercase for String {
    fn lowercase_if_needed(&self) -> Option<Self> {
        lowercase_text_if_needed(self)
    }
}

impl Lowercase for Vec<u8> {
    fn lowercase_if_needed(&self) -> Option<Self> {
        lowercase_bytes_if_needed(self)
    }
}

/// A text or byte string that compares and hashes by its lowercase form.
///
/// The lowercase form is computed once, on construction. A key only compares
/// equal to another `CaseInsensitiveKey`, never to a raw string.
#[derive(Clone)]
pub struct CaseInsensitiveKey<T> {
    original: T,
    lowered: Option<T>,
}

impl<T: Lowercase> CaseInsensitiveKey<T> {
    pub fn new(original: T) -> Self {
        let lowered = original.lowercase_if_needed();
        Self { original, lowered }
    }
}

impl<T> CaseInsensitiveKey<T> {
    /// The value as it was supplied.
    pub fn original(&self) -> &T {
        &self.original
    }

    /// The lowercase form used for equality and hashing.
    pub fn normalized(&self) -> &T {
        self.lowered.as_ref().unwrap_or(&self.original)
    }

    pub fn into_inner(self) -> T {
        self.original
    }
}

impl<T: PartialEq> PartialEq for CaseInsensitiveKey<T> {
    fn eq(&self, other: &Self) -> bool {
        self.normalized() == other.normalized()
    }
}

impl<T: Eq> Eq for CaseInsensitiveKey<T> {}

impl<T: Hash> Hash for CaseInsensitiveKey<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized().hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for CaseInsensitiveKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaseInsensitiveKey")
            .field("original", &self.original)
            .field("normalized", self.normalized())
            .finish()
    }
}

#[cfg(test)]
#[path = "key_test.rs"]
mod key_test;
