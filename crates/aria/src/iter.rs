//! Iteration decorator
//!
//! `Iterable` wraps a map that already exposes `entries()` and makes it usable
//! in `for` loops and `collect()` without touching any of its other
//! operations (it derefs to the wrapped map).
//!
//! Iteration always reads the snapshot captured at decoration time, never the
//! live `entries()`. Each call to `iter()` starts over from the first entry.

use crate::map::StructuredKeyMap;
use serde::{Serialize, Serializer};
use std::fmt;
use std::iter::FusedIterator;
use std::ops::Deref;
use std::sync::Arc;

/// Anything exposing an ordered entry slice
pub trait Entries {
    type Key;
    type Value;

    fn entries(&self) -> &[(Self::Key, Self::Value)];

    /// Immutable copy (or shared handle) of the current entries
    fn snapshot(&self) -> Arc<[(Self::Key, Self::Value)]>;
}

impl<K, V> Entries for StructuredKeyMap<K, V> {
    type Key = K;
    type Value = V;

    fn entries(&self) -> &[(K, V)] {
        StructuredKeyMap::entries(self)
    }

    fn snapshot(&self) -> Arc<[(K, V)]> {
        StructuredKeyMap::snapshot(self)
    }
}

/// A map plus an iteration snapshot
#[derive(Clone)]
pub struct Iterable<M: Entries> {
    inner: M,
    snapshot: Arc<[(M::Key, M::Value)]>,
}

impl<M: Entries> Iterable<M> {
    /// Decorate `inner`, iterating over `snapshot`
    pub fn new(inner: M, snapshot: Arc<[(M::Key, M::Value)]>) -> Self {
        Self { inner, snapshot }
    }

    /// Decorate `inner` with a snapshot of its own entries
    pub fn decorate(inner: M) -> Self {
        let snapshot = inner.snapshot();
        Self::new(inner, snapshot)
    }

    pub fn iter(&self) -> Iter<'_, M::Key, M::Value> {
        Iter {
            inner: self.snapshot.iter(),
        }
    }

    pub fn inner(&self) -> &M {
        &self.inner
    }

    pub fn into_inner(self) -> M {
        self.inner
    }
}

impl<M> fmt::Debug for Iterable<M>
where
    M: Entries + fmt::Debug,
    M::Key: fmt::Debug,
    M::Value: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iterable")
            .field("inner", &self.inner)
            .field("snapshot", &self.snapshot)
            .finish()
    }
}

impl<M: Entries> Deref for Iterable<M> {
    type Target = M;

    fn deref(&self) -> &M {
        &self.inner
    }
}

impl<'a, M: Entries> IntoIterator for &'a Iterable<M> {
    type Item = (&'a M::Key, &'a M::Value);
    type IntoIter = Iter<'a, M::Key, M::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<M: Entries + Serialize> Serialize for Iterable<M> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.inner.serialize(serializer)
    }
}

/// Iterator over a snapshot, yielding `(key, value)` in order
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    inner: std::slice::Iter<'a, (K, V)>,
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

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, v)| (k, v))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}
