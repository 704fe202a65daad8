use serde::{Deserialize, Serialize};

use crate::env_flag;

fn default_language() -> String {
    "la".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct LookupConfig {
    #[serde(default = "default_language")]
    pub language: String,
    /// Append the engine's full output to every result
    #[serde(default)]
    pub diagnostic: bool,
}

impl LookupConfig {
    pub fn new() -> Self {
        Self {
            language: default_language(),
            diagnostic: env_flag("IWORDS_DIAGNOSTIC").unwrap_or(false),
        }
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            diagnostic: false,
        }
    }
}
