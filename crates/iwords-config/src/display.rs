use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::env_flag;

/// How lookup results are written out
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// The engine's report block as printed
    Raw,
    /// Parsed definitions
    #[default]
    Pretty,
}

impl FromStr for DisplayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "raw" => Ok(DisplayMode::Raw),
            "pretty" => Ok(DisplayMode::Pretty),
            other => Err(format!("unknown display mode {other:?}, expected raw or pretty")),
        }
    }
}

fn default_show_possibilities() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct DisplayConfig {
    pub mode: DisplayMode,
    #[serde(default = "default_show_possibilities")]
    pub show_possibilities: bool,
}

impl DisplayConfig {
    pub fn new() -> Self {
        let defaults = Self::default();

        let mode = env::var("IWORDS_DISPLAY_MODE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.mode);

        let show_possibilities =
            env_flag("IWORDS_SHOW_POSSIBILITIES").unwrap_or(defaults.show_possibilities);

        Self {
            mode,
            show_possibilities,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            mode: DisplayMode::default(),
            show_possibilities: default_show_possibilities(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_mode_from_str() {
        assert_eq!("RAW".parse(), Ok(DisplayMode::Raw));
        assert_eq!(" pretty ".parse(), Ok(DisplayMode::Pretty));
        assert!("fancy".parse::<DisplayMode>().is_err());
    }
}
