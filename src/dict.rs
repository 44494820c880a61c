use crate::dict_key::DictKey;
use crate::iter::{IntoIter, Iter, IterMut, Keys, Values, ValuesMut};
use crate::lookup::Lookup;
use crate::result::{DictError, DictResult};
use indexmap::IndexMap;
use std::collections::hash_map::RandomState;
use std::fmt;
use std::hash::BuildHasher;

/// An insertion-ordered dictionary whose text and byte keys ignore case.
///
/// Keys are normalized through [`DictKey::map_key`] before every lookup,
/// insertion or removal. Re-assigning an existing key keeps both its position
/// and the spelling it was first inserted with; removing and re-inserting a
/// key moves it to the end.
///
/// The dictionary does no internal locking. Share it between threads behind
/// a `Mutex` or similar.
pub struct CaseInsensitiveDict<K: DictKey, V, S = RandomState> {
    entries: IndexMap<K::Mapped, V, S>,
}

impl<K: DictKey, V> CaseInsensitiveDict<K, V> {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }
}

impl<K: DictKey, V, S> CaseInsensitiveDict<K, V, S> {
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            entries: IndexMap::with_hasher(hash_builder),
        }
    }

    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            entries: IndexMap::with_capacity_and_hasher(capacity, hash_builder),
        }
    }

    /// Number of distinct keys after normalization.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Keys in insertion order, as originally spelled.
    ///
    /// Each call starts a fresh pass over the current contents.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys {
            inner: self.entries.keys(),
        }
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values {
            inner: self.entries.values(),
        }
    }

    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut {
            inner: self.entries.values_mut(),
        }
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            inner: self.entries.iter_mut(),
        }
    }
}

impl<K: DictKey, V, S: BuildHasher> CaseInsensitiveDict<K, V, S> {
    /// Builds a dictionary that maps every key to a clone of `value`.
    ///
    /// Keys that collide after normalization keep the first spelling and
    /// position.
    pub fn from_keys<I, Q>(keys: I, value: V) -> Self
    where
        I: IntoIterator<Item = Q>,
        Q: Into<K>,
        V: Clone,
        S: Default,
    {
        let mut dict = Self::default();
        for key in keys {
            dict.insert(key, value.clone());
        }
        dict
    }

    /// [`from_keys`](Self::from_keys) with `V::default()` as the shared value.
    pub fn from_keys_default<I, Q>(keys: I) -> Self
    where
        I: IntoIterator<Item = Q>,
        Q: Into<K>,
        V: Clone + Default,
        S: Default,
    {
        Self::from_keys(keys, V::default())
    }

    /// Inserts `value` under `key`, returning the value it replaced.
    ///
    /// New keys go to the end. An existing key keeps its position and its
    /// original spelling; only the value changes.
    pub fn insert(&mut self, key: impl Into<K>, value: V) -> Option<V> {
        self.entries.insert(K::map_key(key.into()), value)
    }

    /// Looks up `key` in any casing. Borrowed text and bytes are searched for
    /// without copying the key.
    pub fn get(&self, key: impl Lookup<K>) -> Option<&V> {
        self.entries.get(&key.query())
    }

    pub fn get_mut(&mut self, key: impl Lookup<K>) -> Option<&mut V> {
        self.entries.get_mut(&key.query())
    }

    /// Like [`get`](Self::get), but reports a missing key as [`DictError::KeyNotFound`].
    pub fn try_get(&self, key: impl Lookup<K>) -> DictResult<&V> {
        self.get(key).ok_or(DictError::KeyNotFound)
    }

    pub fn contains_key(&self, key: impl Lookup<K>) -> bool {
        self.entries.contains_key(&key.query())
    }

    /// Removes the entry for `key` and returns its value. The remaining
    /// entries keep their relative order.
    pub fn remove(&mut self, key: impl Lookup<K>) -> DictResult<V> {
        self.entries
            .shift_remove(&key.query())
            .ok_or(DictError::KeyNotFound)
    }

    /// Removes and returns the last entry, or the first one when `last` is false.
    pub fn pop_item(&mut self, last: bool) -> DictResult<(K, V)> {
        let entry = if last {
            self.entries.pop()
        } else {
            self.entries.shift_remove_index(0)
        };

        entry
            .map(|(key, value)| (K::into_unmapped(key), value))
            .ok_or(DictError::EmptyCollection)
    }

    /// Moves an existing entry to the end, or to the front when `last` is false.
    pub fn move_to_end(&mut self, key: impl Lookup<K>, last: bool) -> DictResult<()> {
        let from = self
            .entries
            .get_index_of(&key.query())
            .ok_or(DictError::KeyNotFound)?;
        let to = if last { self.entries.len() - 1 } else { 0 };
        self.entries.move_index(from, to);
        Ok(())
    }

    /// Returns the value for `key`, inserting `default()` first if it is missing.
    pub fn get_or_insert_with<F>(&mut self, key: impl Into<K>, default: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        self.entries
            .entry(K::map_key(key.into()))
            .or_insert_with(default)
    }

    /// Inserts every pair in order; later pairs overwrite earlier ones.
    pub fn update<I, Q>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (Q, V)>,
        Q: Into<K>,
    {
        for (key, value) in pairs {
            self.insert(key, value);
        }
    }
}

impl<K: DictKey, V, S: Default> Default for CaseInsensitiveDict<K, V, S> {
    fn default() -> Self {
        Self {
            entries: IndexMap::default(),
        }
    }
}

impl<K, V, S> Clone for CaseInsensitiveDict<K, V, S>
where
    K: DictKey,
    K::Mapped: Clone,
    V: Clone,
    S: Clone,
{
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<K, V, S> fmt::Debug for CaseInsensitiveDict<K, V, S>
where
    K: DictKey + fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Two dictionaries are equal when they hold the same keys, as originally
/// spelled, with equal values. Order is ignored, but `{"A": 1}` and
/// `{"a": 1}` are different dictionaries.
impl<K, V, S1, S2> PartialEq<CaseInsensitiveDict<K, V, S2>> for CaseInsensitiveDict<K, V, S1>
where
    K: DictKey + PartialEq,
    V: PartialEq,
    S1: BuildHasher,
    S2: BuildHasher,
{
    fn eq(&self, other: &CaseInsensitiveDict<K, V, S2>) -> bool {
        self.len() == other.len()
            && self.entries.iter().all(|(key, value)| {
                other
                    .entries
                    .get_key_value(key)
                    .is_some_and(|(other_key, other_value)| {
                        K::unmap_key(key) == K::unmap_key(other_key) && value == other_value
                    })
            })
    }
}

impl<K, V, S> Eq for CaseInsensitiveDict<K, V, S>
where
    K: DictKey + Eq,
    V: Eq,
    S: BuildHasher,
{
}

impl<K, V, S, Q> FromIterator<(Q, V)> for CaseInsensitiveDict<K, V, S>
where
    K: DictKey,
    Q: Into<K>,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (Q, V)>>(iter: I) -> Self {
        let mut dict = Self::default();
        dict.update(iter);
        dict
    }
}

impl<K, V, S, Q> Extend<(Q, V)> for CaseInsensitiveDict<K, V, S>
where
    K: DictKey,
    Q: Into<K>,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (Q, V)>>(&mut self, iter: I) {
        self.update(iter);
    }
}

impl<K: DictKey, V, S> IntoIterator for CaseInsensitiveDict<K, V, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.entries.into_iter(),
        }
    }
}

impl<'a, K: DictKey + 'a, V, S> IntoIterator for &'a CaseInsensitiveDict<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K: DictKey + 'a, V, S> IntoIterator for &'a mut CaseInsensitiveDict<K, V, S> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
#[path = "dict_test.rs"]
mod dict_test;
