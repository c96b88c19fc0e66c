//! Snapshot encoding and the fail-soft load/save adapter
//!
//! A snapshot is written in one of two JSON shapes: a bare array of records,
//! or `{"records": [...], "filter": "..."}` when the filter is persisted too.
//! Both shapes are accepted on load.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};

use super::repository::SlotStorage;
use crate::record::{Content, Record};
use crate::task::Filter;
use crate::Result;

/// Decoded contents of a storage slot
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<C> {
    pub records: Vec<Record<C>>,
    pub filter: Option<Filter>,
}

impl<C> Default for Snapshot<C> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            filter: None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredSnapshot<C> {
    Records(Vec<Record<C>>),
    WithFilter {
        records: Vec<Record<C>>,
        #[serde(default, deserialize_with = "lenient_filter")]
        filter: Option<Filter>,
    },
}

// The filter is UI state; an unrecognised value falls back to the default
// instead of discarding the records stored beside it.
fn lenient_filter<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<Filter>, D::Error> {
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match serde_json::from_value(value.clone()) {
        Ok(filter) => Some(filter),
        Err(_) => {
            tracing::warn!(filter = %value, "ignoring unknown stored filter");
            None
        }
    }))
}

#[derive(Serialize)]
struct SnapshotWithFilter<'a, C> {
    records: &'a [Record<C>],
    filter: Filter,
}

/// Encode records (and optionally the filter) as a JSON blob
pub fn encode<C: Content>(records: &[Record<C>], filter: Option<Filter>) -> Result<String> {
    let content = match filter {
        Some(filter) => serde_json::to_string(&SnapshotWithFilter { records, filter })?,
        None => serde_json::to_string(records)?,
    };
    Ok(content)
}

/// Decode a JSON blob in either snapshot shape
pub fn decode<C: Content>(raw: &str) -> Result<Snapshot<C>> {
    let snapshot = match serde_json::from_str(raw)? {
        StoredSnapshot::Records(records) => Snapshot {
            records,
            filter: None,
        },
        StoredSnapshot::WithFilter { records, filter } => Snapshot { records, filter },
    };
    Ok(snapshot)
}

/// Read the snapshot stored under `key`
///
/// Never fails: a missing slot, an unreadable slot and a corrupt blob all
/// yield an empty snapshot. Blank records and repeated ids are dropped.
pub fn load<C, S>(storage: &S, key: &str) -> Snapshot<C>
where
    C: Content,
    S: SlotStorage + ?Sized,
{
    let raw = match storage.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!(key, "slot is empty, starting fresh");
            return Snapshot::default();
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to read slot, starting fresh");
            return Snapshot::default();
        }
    };

    match decode::<C>(&raw) {
        Ok(mut snapshot) => {
            sanitize(key, &mut snapshot.records);
            tracing::debug!(key, records = snapshot.records.len(), "loaded snapshot");
            snapshot
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "discarding corrupt snapshot");
            Snapshot::default()
        }
    }
}

/// Replace the slot under `key` with a full snapshot
pub fn save<C, S>(
    storage: &mut S,
    key: &str,
    records: &[Record<C>],
    filter: Option<Filter>,
) -> Result<()>
where
    C: Content,
    S: SlotStorage + ?Sized,
{
    let content = encode(records, filter)?;
    storage.write(key, &content)
}

fn sanitize<C: Content>(key: &str, records: &mut Vec<Record<C>>) {
    let mut seen = HashSet::new();
    *records = std::mem::take(records)
        .into_iter()
        .filter_map(|record| {
            let Some(content) = record.content.normalize() else {
                tracing::warn!(key, id = %record.id, "dropping record with blank content");
                return None;
            };
            if !seen.insert(record.id.clone()) {
                tracing::warn!(key, id = %record.id, "dropping record with duplicate id");
                return None;
            }
            Some(Record { content, ..record })
        })
        .collect();
}
