//! The five relation tables
//!
//! Each table is an embedded JSON payload of `[key, value]` pairs, decoded
//! once into a `StructuredKeyMap` and decorated for iteration.

pub mod aria;
pub mod dom;
pub mod element_roles;
pub mod role_elements;
pub mod roles;

use crate::error::{AriaError, Result};
use crate::iter::Iterable;
use crate::map::StructuredKeyMap;
use crate::matcher::KeyMatch;
use crate::query::AriaQueryConfig;
use serde::de::DeserializeOwned;
use std::fmt::Display;

/// The decorated map every table is published as
pub type AriaQueryMap<K, V> = Iterable<StructuredKeyMap<K, V>>;

/// Decode a `[[key, value], ...]` payload into a decorated map
pub(crate) fn decode<K, V>(
    table: &'static str,
    payload: &str,
    config: &AriaQueryConfig,
) -> Result<AriaQueryMap<K, V>>
where
    K: DeserializeOwned + KeyMatch<K> + Display,
    V: DeserializeOwned,
{
    let entries: Vec<(K, V)> =
        serde_json::from_str(payload).map_err(|source| AriaError::Payload { table, source })?;
    let map = StructuredKeyMap::new(entries);

    if let Some((first, second)) = map.first_duplicate() {
        let key = &map.entries()[second].0;
        if config.reject_duplicate_keys {
            tracing::warn!(table, first, second, %key, "Rejecting table with duplicate key");
            return Err(AriaError::DuplicateKey {
                table,
                first,
                second,
            });
        }
        tracing::debug!(table, first, second, %key, "Duplicate key, first entry wins");
    }

    tracing::debug!(table, entries = map.len(), "Decoded relation table");
    Ok(Iterable::decorate(map))
}
