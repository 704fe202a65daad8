use std::env;

use serde::{Deserialize, Serialize};

use self::display::DisplayConfig;
use self::lookup::LookupConfig;

pub mod display;
pub mod lookup;

fn default_log_filter() -> String {
    "info".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub lookup: LookupConfig,

    /// Tracing filter used when no verbosity flag is given
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Config {
    pub fn new() -> Self {
        let log_filter = env::var("IWORDS_LOG").unwrap_or_else(|_| default_log_filter());

        Config {
            display: DisplayConfig::new(),
            lookup: LookupConfig::new(),
            log_filter,
        }
    }

    /// Load a JSON profile, falling back to defaults for missing fields
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display: DisplayConfig::default(),
            lookup: LookupConfig::default(),
            log_filter: default_log_filter(),
        }
    }
}

fn env_flag(name: &str) -> Option<bool> {
    env::var(name).ok().and_then(|v| match v.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    })
}
