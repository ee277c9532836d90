use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fs;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::HistoryError;
use crate::model::{CanonicalReference, LookupResult};

pub const DEFAULT_CAPACITY: usize = 25;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub reference: CanonicalReference,
    pub result: LookupResult,
}

/// Serialized form of a [`HistoryCache`], most recent entry first.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HistorySnapshot {
    pub capacity: usize,
    pub entries: Vec<HistoryEntry>,
}

/// Bounded lookup history, most recent first.
///
/// Holds at most one entry per reference and never more than `capacity`
/// entries. Only [`put`](Self::put) changes the order; reads leave it alone.
#[derive(Debug, Clone)]
pub struct HistoryCache {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for HistoryCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl HistoryCache {
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, reference: &CanonicalReference) -> Option<&LookupResult> {
        self.entries
            .iter()
            .find(|e| &e.reference == reference)
            .map(|e| &e.result)
    }

    pub fn contains(&self, reference: &CanonicalReference) -> bool {
        self.get(reference).is_some()
    }

    /// Inserts `result` as the most recent entry, replacing any earlier entry
    /// for the same reference, then evicts from the tail down to capacity.
    pub fn put(&mut self, reference: CanonicalReference, result: LookupResult) {
        if let Some(pos) = self.entries.iter().position(|e| e.reference == reference) {
            self.entries.remove(pos);
        }
        self.entries.push_front(HistoryEntry { reference, result });
        while self.entries.len() > self.capacity {
            if let Some(evicted) = self.entries.pop_back() {
                debug!(reference = %evicted.reference, "evicted from history");
            }
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries from most to least recent.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = &HistoryEntry> + '_ {
        self.entries.iter()
    }

    pub fn snapshot(&self) -> HistorySnapshot {
        HistorySnapshot {
            capacity: self.capacity,
            entries: self.entries.iter().cloned().collect(),
        }
    }

    /// Rebuilds a cache from a snapshot, re-applying the cache invariants: a
    /// repeated reference keeps its most recent entry and overflow beyond
    /// `capacity` drops the oldest.
    pub fn from_snapshot(snapshot: HistorySnapshot, capacity: usize) -> Self {
        let mut cache = Self::new(capacity);
        for entry in snapshot.entries.into_iter().rev() {
            cache.put(entry.reference, entry.result);
        }
        cache
    }
}

/// Loads the persisted history at `path`. A missing file is an empty cache.
/// `capacity` wins over whatever capacity the file was written with.
pub fn load(path: &Path, capacity: usize) -> Result<HistoryCache, HistoryError> {
    let bytes = match fs::read(path) {
        Ok(b) => b,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(HistoryCache::new(capacity)),
        Err(e) => return Err(e.into()),
    };
    let snapshot: HistorySnapshot = serde_json::from_slice(&bytes)?;
    Ok(HistoryCache::from_snapshot(snapshot, capacity))
}

/// Writes the history as JSON. The file is replaced atomically: readers see
/// either the old snapshot or the new one, never a partial write.
pub fn save(path: &Path, cache: &HistoryCache) -> Result<(), HistoryError> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;
    let mut tmp = NamedTempFile::new_in(dir)?;
    serde_json::to_writer_pretty(&mut tmp, &cache.snapshot())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
