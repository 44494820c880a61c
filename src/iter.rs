//! Iterators over a [`CaseInsensitiveDict`](crate::CaseInsensitiveDict).
//!
//! Every iterator yields keys as they were first inserted, never the
//! lowercase form used internally.

use crate::dict_key::DictKey;
use indexmap::map;
use std::iter::FusedIterator;

macro_rules! delegate_iterator {
    ($name:ident<$lt:lifetime>, $item:ty, |$bind:pat_param| $map:expr) => {
        impl<$lt, K: DictKey + $lt, V> Iterator for $name<$lt, K, V> {
            type Item = $item;

            fn next(&mut self) -> Option<Self::Item> {
                self.inner.next().map(|$bind| $map)
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.inner.size_hint()
            }
        }

        impl<$lt, K: DictKey + $lt, V> DoubleEndedIterator for $name<$lt, K, V> {
            fn next_back(&mut self) -> Option<Self::Item> {
                self.inner.next_back().map(|$bind| $map)
            }
        }

        impl<$lt, K: DictKey + $lt, V> ExactSizeIterator for $name<$lt, K, V> {
            fn len(&self) -> usize {
                self.inner.len()
            }
        }

        impl<$lt, K: DictKey + $lt, V> FusedIterator for $name<$lt, K, V> {}
    };
}

/// Original keys in insertion order. Returned by
/// [`CaseInsensitiveDict::keys`](crate::CaseInsensitiveDict::keys).
pub struct Keys<'a, K: DictKey, V> {
    pub(crate) inner: map::Keys<'a, K::Mapped, V>,
}

delegate_iterator!(Keys<'a>, &'a K, |key| K::unmap_key(key));

impl<K: DictKey, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

pub struct Values<'a, K: DictKey, V> {
    pub(crate) inner: map::Values<'a, K::Mapped, V>,
}

delegate_iterator!(Values<'a>, &'a V, |value| value);

impl<K: DictKey, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

pub struct ValuesMut<'a, K: DictKey, V> {
    pub(crate) inner: map::ValuesMut<'a, K::Mapped, V>,
}

delegate_iterator!(ValuesMut<'a>, &'a mut V, |value| value);

/// `(key, value)` pairs in insertion order.
pub struct Iter<'a, K: DictKey, V> {
    pub(crate) inner: map::Iter<'a, K::Mapped, V>,
}

delegate_iterator!(Iter<'a>, (&'a K, &'a V), |(key, value)| (
    K::unmap_key(key),
    value
));

impl<K: DictKey, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

pub struct IterMut<'a, K: DictKey, V> {
    pub(crate) inner: map::IterMut<'a, K::Mapped, V>,
}

delegate_iterator!(IterMut<'a>, (&'a K, &'a mut V), |(key, value)| (
    K::unmap_key(key),
    value
));

/// Owning iterator; hands keys back in their original spelling.
pub struct IntoIter<K: DictKey, V> {
    pub(crate) inner: map::IntoIter<K::Mapped, V>,
}

impl<K: DictKey, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(key, value)| (K::into_unmapped(key), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K: DictKey, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|(key, value)| (K::into_unmapped(key), value))
    }
}

impl<K: DictKey, V> ExactSizeIterator for IntoIter<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K: DictKey, V> FusedIterator for IntoIter<K, V> {}
