use tracing::warn;
use versegate_core::history::{self, HistoryCache};
use versegate_core::{BibleGateway, Config, VerseLookup};

/// One CLI invocation's view of the lookup state. History is loaded from and
/// saved to `$VERSEGATE_DIR/history.json` unless persistence is off.
pub(crate) struct Session {
    pub(crate) config: Config,
    pub(crate) persist: bool,
    pub(crate) lookup: VerseLookup<BibleGateway>,
}

impl Session {
    pub(crate) fn open(config: Config, persist: bool) -> anyhow::Result<Self> {
        let history = if persist {
            let path = config.history_path();
            history::load(&path, config.history_capacity).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "ignoring unreadable history");
                HistoryCache::new(config.history_capacity)
            })
        } else {
            HistoryCache::new(config.history_capacity)
        };
        let source = BibleGateway::new(&config)?;
        Ok(Self {
            lookup: VerseLookup::new(source, history),
            config,
            persist,
        })
    }

    pub(crate) fn save(&self) -> anyhow::Result<()> {
        if self.persist {
            history::save(&self.config.history_path(), self.lookup.history())?;
        }
        Ok(())
    }

    pub(crate) fn doctor(&self) {
        let path = self.config.history_path();
        println!("VERSEGATE_DIR: {}", self.config.home.display());
        println!("source: {}", self.config.base_url);
        println!("timeout: {}s", self.config.timeout.as_secs());
        println!(
            "history: {} ({})",
            path.display(),
            if !self.persist {
                "disabled"
            } else if path.exists() {
                "OK"
            } else {
                "will create"
            }
        );
        println!(
            " - entries: {}/{}",
            self.lookup.history().len(),
            self.lookup.history().capacity()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use versegate_core::{CanonicalReference, LookupResult, TranslationRecord};

    fn config_in(dir: &std::path::Path) -> Config {
        Config {
            home: dir.to_path_buf(),
            history_capacity: 3,
            ..Config::default()
        }
    }

    #[test]
    fn open_loads_persisted_history() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let mut cache = HistoryCache::new(3);
        let r = CanonicalReference::new("John 11:35");
        cache.put(
            r.clone(),
            LookupResult::new(r.clone(), vec![TranslationRecord::new("KJV", "Jesus wept.")]),
        );
        history::save(&config.history_path(), &cache).unwrap();

        let session = Session::open(config, true).unwrap();
        assert!(session.lookup.history().contains(&r));
    }

    #[test]
    fn unreadable_history_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        std::fs::write(config.history_path(), "garbage").unwrap();
        let session = Session::open(config, true).unwrap();
        assert!(session.lookup.history().is_empty());
    }

    #[test]
    fn no_history_never_writes() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let path = config.history_path();
        let session = Session::open(config, false).unwrap();
        session.save().unwrap();
        assert!(!path.exists());
    }
}
