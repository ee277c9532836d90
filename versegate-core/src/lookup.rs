use tracing::{debug, warn};

use crate::gateway::VerseSource;
use crate::history::HistoryCache;
use crate::model::{CanonicalReference, LookupResult};

/// Read-through lookup: history first, the verse source on a miss.
pub struct VerseLookup<S> {
    source: S,
    history: HistoryCache,
}

impl<S: VerseSource> VerseLookup<S> {
    pub fn new(source: S, history: HistoryCache) -> Self {
        Self { source, history }
    }

    /// Cached result if present, otherwise one fetch. A successful fetch is
    /// recorded as the most recent history entry; a failed one leaves the
    /// history untouched and yields `None`.
    pub fn lookup(&mut self, reference: &CanonicalReference) -> Option<LookupResult> {
        if let Some(hit) = self.history.get(reference) {
            debug!(%reference, "history hit");
            return Some(hit.clone());
        }
        debug!(%reference, "history miss");
        match self.source.fetch(reference) {
            Ok(result) => {
                self.history.put(reference.clone(), result.clone());
                Some(result)
            }
            Err(e) => {
                warn!(%reference, error = %e, "verse fetch failed");
                None
            }
        }
    }

    pub fn history(&self) -> &HistoryCache {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::model::TranslationRecord;
    use std::cell::Cell;

    struct Flaky {
        calls: Cell<usize>,
        fail: bool,
    }

    impl VerseSource for Flaky {
        fn fetch(&self, reference: &CanonicalReference) -> Result<LookupResult, FetchError> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                return Err(FetchError::Status(503));
            }
            Ok(LookupResult::new(
                reference.clone(),
                vec![TranslationRecord::new("KJV", format!("text of {}", reference))],
            ))
        }
    }

    #[test]
    fn miss_fetches_and_records() {
        let mut l = VerseLookup::new(Flaky { calls: Cell::new(0), fail: false }, HistoryCache::new(5));
        let r = CanonicalReference::new("Ruth 1:16");
        let first = l.lookup(&r).unwrap();
        let second = l.lookup(&r).unwrap();
        assert_eq!(first, second);
        assert_eq!(l.source().calls.get(), 1);
        assert_eq!(l.history().len(), 1);
    }

    #[test]
    fn failure_leaves_history_alone() {
        let mut l = VerseLookup::new(Flaky { calls: Cell::new(0), fail: true }, HistoryCache::new(5));
        let r = CanonicalReference::new("Ruth 1:16");
        assert!(l.lookup(&r).is_none());
        assert!(l.history().is_empty());
        assert!(l.lookup(&r).is_none());
        assert_eq!(l.source().calls.get(), 2);
    }

    #[test]
    fn clear_history_forces_refetch() {
        let mut l = VerseLookup::new(Flaky { calls: Cell::new(0), fail: false }, HistoryCache::new(5));
        let r = CanonicalReference::new("Ruth 1:16");
        l.lookup(&r);
        l.clear_history();
        assert!(l.history().get(&r).is_none());
        l.lookup(&r);
        assert_eq!(l.source().calls.get(), 2);
    }
}
