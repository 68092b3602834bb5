use std::{
    iter::FusedIterator,
    marker::PhantomData,
    ops::{Index, IndexMut},
};

use super::EntityIndex;

/// A dense map from indices to values, backed by a vector.
///
/// Reading a key beyond the end of the map yields the default value instead of
/// panicking. Writing beyond the end grows the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseMap<K, V> {
    values: Vec<V>,
    default: V,
    phantom: PhantomData<K>,
}

impl<K: EntityIndex, V: Clone> DenseMap<K, V> {
    pub fn new() -> Self
    where
        V: Default,
    {
        Self::with_len(0)
    }

    /// Creates a map with `len` slots, each holding the default value.
    pub fn with_len(len: usize) -> Self
    where
        V: Default,
    {
        let default = V::default();
        Self {
            values: vec![default.clone(); len],
            default,
            phantom: PhantomData,
        }
    }

    pub fn resize(&mut self, new_len: usize) {
        self.values.resize(new_len, self.default.clone());
    }

    /// Number of allocated slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether `key` addresses an allocated slot.
    #[inline]
    pub fn contains(&self, key: K) -> bool {
        key.index() < self.values.len()
    }

    /// Iterates over all slots in key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.values.iter().enumerate(),
            phantom: PhantomData,
        }
    }
}

impl<K: EntityIndex, V: Default + Clone> Default for DenseMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: EntityIndex, V> Index<K> for DenseMap<K, V> {
    type Output = V;

    fn index(&self, index: K) -> &Self::Output {
        self.values.get(index.index()).unwrap_or(&self.default)
    }
}

impl<K: EntityIndex, V: Clone> IndexMut<K> for DenseMap<K, V> {
    fn index_mut(&mut self, index: K) -> &mut Self::Output {
        let index = index.index();

        if index >= self.values.len() {
            self.values.resize(index + 1, self.default.clone());
        }

        &mut self.values[index]
    }
}

pub struct Iter<'a, K, V> {
    inner: std::iter::Enumerate<std::slice::Iter<'a, V>>,
    phantom: PhantomData<K>,
}

impl<'a, K: EntityIndex, V> Iterator for Iter<'a, K, V> {
    type Item = (K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let (index, value) = self.inner.next()?;
        Some((K::new(index), value))
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K: EntityIndex, V> ExactSizeIterator for Iter<'a, K, V> {}
impl<'a, K: EntityIndex, V> FusedIterator for Iter<'a, K, V> {}
