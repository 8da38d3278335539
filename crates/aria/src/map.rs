//! Ordered, read-only map with pluggable key matching
//!
//! Keys may be structured (element descriptors), so there is no hashing:
//! entries live in one shared slice in construction order and every lookup
//! is a linear scan for the first key that matches.
//!
//! ```text
//! Arc<[(K, V)]>   [(k0, v0)][(k1, v1)][(k2, v2)]...
//!                   ↑ get(q) = first i where k_i.key_matches(q)
//! ```

use crate::matcher::KeyMatch;
use serde::{Serialize, Serializer};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct StructuredKeyMap<K, V> {
    entries: Arc<[(K, V)]>,
}

impl<K, V> StructuredKeyMap<K, V> {
    pub fn new(entries: Vec<(K, V)>) -> Self {
        Self {
            entries: entries.into(),
        }
    }

    /// All entries in construction order
    pub fn entries(&self) -> &[(K, V)] {
        &self.entries
    }

    /// Shared handle to the entries, for iteration snapshots
    pub fn snapshot(&self) -> Arc<[(K, V)]> {
        Arc::clone(&self.entries)
    }

    /// Call `visit(value, key, entries)` for every entry, in order
    pub fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(&V, &K, &[(K, V)]),
    {
        for (key, value) in self.entries.iter() {
            visit(value, key, self.entries());
        }
    }

    /// Like `for_each`, with a caller-supplied context handed to every visit
    pub fn for_each_with<C, F>(&self, context: &mut C, mut visit: F)
    where
        F: FnMut(&mut C, &V, &K, &[(K, V)]),
    {
        for (key, value) in self.entries.iter() {
            visit(context, value, key, self.entries());
        }
    }

    /// Like `for_each`, but the first error stops the walk and is returned as is
    pub fn try_for_each<E, F>(&self, mut visit: F) -> Result<(), E>
    where
        F: FnMut(&V, &K, &[(K, V)]) -> Result<(), E>,
    {
        for (key, value) in self.entries.iter() {
            visit(value, key, self.entries())?;
        }
        Ok(())
    }

    /// Value of the first entry whose key matches `key`
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: KeyMatch<Q>,
        Q: ?Sized,
    {
        self.entries
            .iter()
            .find(|(k, _)| k.key_matches(key))
            .map(|(_, v)| v)
    }

    pub fn has<Q>(&self, key: &Q) -> bool
    where
        K: KeyMatch<Q>,
        Q: ?Sized,
    {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl ExactSizeIterator<Item = &K> + DoubleEndedIterator + '_ {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl ExactSizeIterator<Item = &V> + DoubleEndedIterator + '_ {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First pair of entries `(earlier, later)` whose keys match each other
    pub fn first_duplicate(&self) -> Option<(usize, usize)>
    where
        K: KeyMatch<K>,
    {
        self.entries.iter().enumerate().find_map(|(later, (key, _))| {
            self.entries[..later]
                .iter()
                .position(|(earlier, _)| earlier.key_matches(key))
                .map(|earlier| (earlier, later))
        })
    }
}

impl<K, V> Default for StructuredKeyMap<K, V> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<K, V> FromIterator<(K, V)> for StructuredKeyMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Serializes as an array of `[key, value]` pairs
impl<K: Serialize, V: Serialize> Serialize for StructuredKeyMap<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AttributeConstraint, ElementDescriptor};

    fn role_map() -> StructuredKeyMap<String, Vec<&'static str>> {
        StructuredKeyMap::new(vec![
            ("button".to_string(), vec!["input", "button"]),
            ("link".to_string(), vec!["a", "area"]),
            ("heading".to_string(), vec!["h1"]),
        ])
    }

    #[test]
    fn test_entries_keep_construction_order() {
        let map = role_map();
        let keys: Vec<_> = map.entries().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["button", "link", "heading"]);
        assert_eq!(map.entries(), map.entries());
    }

    #[test]
    fn test_projections_line_up_with_entries() {
        let map = role_map();
        assert_eq!(map.keys().len(), map.len());
        assert_eq!(map.values().len(), map.len());
        for (i, (key, value)) in map.keys().zip(map.values()).enumerate() {
            assert_eq!(&map.entries()[i].0, key);
            assert_eq!(&map.entries()[i].1, value);
        }
    }

    #[test]
    fn test_get_and_has() {
        let map = role_map();
        assert_eq!(map.get("link"), Some(&vec!["a", "area"]));
        assert!(map.has("heading"));
        assert_eq!(map.get("menu"), None);
        assert!(!map.has("menu"));
        assert!(map.has(&"button".to_string()));
    }

    #[test]
    fn test_get_returns_first_match() {
        let map = StructuredKeyMap::new(vec![
            (ElementDescriptor::new("td").with_constraint("table"), "cell"),
            (ElementDescriptor::new("td").with_constraint("grid"), "gridcell"),
        ]);
        assert_eq!(map.get(&ElementDescriptor::new("td")), Some(&"cell"));
        assert_eq!(map.first_duplicate(), Some((0, 1)));
    }

    #[test]
    fn test_first_duplicate_none_for_distinct_keys() {
        let map = StructuredKeyMap::new(vec![
            (ElementDescriptor::new("th"), 1),
            (
                ElementDescriptor::new("th")
                    .with_attribute(AttributeConstraint::new("scope").with_value("col")),
                2,
            ),
        ]);
        assert_eq!(map.first_duplicate(), None);
    }

    #[test]
    fn test_for_each_visits_in_order() {
        let map = role_map();
        let mut visited = Vec::new();
        map.for_each(|value, key, all| {
            assert_eq!(all.len(), 3);
            visited.push((key.clone(), value.len()));
        });
        assert_eq!(
            visited,
            vec![
                ("button".to_string(), 2),
                ("link".to_string(), 2),
                ("heading".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_for_each_with_context() {
        let map = role_map();
        let mut total = 0usize;
        map.for_each_with(&mut total, |total, value, _, _| *total += value.len());
        assert_eq!(total, 5);
    }

    #[test]
    fn test_try_for_each_aborts_on_first_error() {
        let map = role_map();
        let mut visited = 0;
        let result = map.try_for_each(|_, key, _| {
            visited += 1;
            if key == "link" {
                Err(format!("stopped at {}", key))
            } else {
                Ok(())
            }
        });
        assert_eq!(result, Err("stopped at link".to_string()));
        assert_eq!(visited, 2);
    }

    #[test]
    fn test_for_each_panic_aborts_and_propagates() {
        let map = role_map();
        let mut visited = 0;
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            map.for_each(|_, key, _| {
                visited += 1;
                if key == "link" {
                    panic!("stopped at {}", key);
                }
            });
        }));

        let payload = result.unwrap_err();
        assert_eq!(
            payload.downcast_ref::<String>().map(String::as_str),
            Some("stopped at link")
        );
        assert_eq!(visited, 2);
    }

    #[test]
    fn test_empty_map() {
        let map: StructuredKeyMap<String, u8> = StructuredKeyMap::default();
        assert!(map.is_empty());
        assert_eq!(map.get("anything"), None);
        assert_eq!(map.keys().count(), 0);
    }

    #[test]
    fn test_serializes_as_pairs() {
        let map: StructuredKeyMap<String, u8> =
            vec![("a".to_string(), 1), ("b".to_string(), 2)].into_iter().collect();
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"[["a",1],["b",2]]"#);
    }
}
