use std::path::PathBuf;
use std::time::Duration;

use crate::gateway::DEFAULT_BASE_URL;
use crate::history::DEFAULT_CAPACITY;

/// Runtime settings, read from `VERSEGATE_*` environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    /// Base directory for persisted state (`$VERSEGATE_DIR` or `~/.versegate`).
    pub home: PathBuf,
    pub base_url: String,
    pub history_capacity: usize,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            home: default_home(None),
            base_url: DEFAULT_BASE_URL.to_string(),
            history_capacity: DEFAULT_CAPACITY,
            user_agent: concat!("versegate/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(12),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(|k| std::env::var(k).ok())
    }

    /// Builds a config from any variable source. Empty or unparsable values
    /// keep their defaults.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let get = |k: &str| var(k).filter(|v| !v.trim().is_empty());
        let mut c = Self {
            home: default_home(get("HOME")),
            ..Self::default()
        };
        if let Some(dir) = get("VERSEGATE_DIR") {
            c.home = PathBuf::from(dir);
        }
        if let Some(url) = get("VERSEGATE_BASE_URL") {
            c.base_url = url;
        }
        if let Some(n) = get("VERSEGATE_HISTORY_CAPACITY").and_then(|v| v.trim().parse::<usize>().ok()) {
            c.history_capacity = n.max(1);
        }
        if let Some(ua) = get("VERSEGATE_USER_AGENT") {
            c.user_agent = ua;
        }
        if let Some(secs) = get("VERSEGATE_TIMEOUT_SECS").and_then(|v| v.trim().parse::<u64>().ok()) {
            c.timeout = Duration::from_secs(secs);
        }
        c
    }

    pub fn history_path(&self) -> PathBuf {
        self.home.join("history.json")
    }
}

fn default_home(home: Option<String>) -> PathBuf {
    home.map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".versegate")
}
