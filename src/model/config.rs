use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration from tasklist.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Capacity shown in the count label
    #[serde(default = "default_max_tasks")]
    pub max_tasks: usize,
    /// Refuse adds once `max_tasks` is reached. Off by default: the
    /// capacity is only reported, never enforced.
    #[serde(default)]
    pub enforce_capacity: bool,
    /// Start the session with the three example tasks
    #[serde(default = "default_true")]
    pub seed_examples: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            max_tasks: default_max_tasks(),
            enforce_capacity: false,
            seed_examples: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Quiet period before a search query is applied
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            debounce_ms: default_debounce_ms(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directives, used when RUST_LOG is unset
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            filter: default_log_filter(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_max_tasks() -> usize {
    100
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_log_filter() -> String {
    "warn".to_string()
}
