use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Tab definitions, each selecting an ordered group of sessions
    #[serde(default = "default_tabs")]
    pub tabs: Vec<TabConfig>,

    /// Generator options
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// A selectable session group
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TabConfig {
    // @field: Tab identifier, embedded in the subtitle file name
    pub id: String,

    // @field: Display name
    pub name: String,

    // @field: Ordered session names processed for this tab
    pub sessions: Vec<String>,
}

/// Options controlling timeline generation
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Minimum chapter length in seconds for the description output.
    /// Entries shorter than this are dropped from the description only;
    /// `null` disables the filtering entirely.
    #[serde(default = "default_min_chapter_length_secs")]
    pub min_chapter_length_secs: Option<u64>,

    /// Whether per-session `laps_csv` imports are honored
    #[serde(default = "default_true")]
    pub enable_csv_import: bool,

    /// Whether raw entries are checked against the entry patterns before
    /// generation, surfacing per-field help messages
    #[serde(default = "default_true")]
    pub enable_inline_validation: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_chapter_length_secs: default_min_chapter_length_secs(),
            enable_csv_import: default_true(),
            enable_inline_validation: default_true(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_min_chapter_length_secs() -> Option<u64> {
    // 10 second chapters are the shortest that remain useful as description
    // markers
    Some(10)
}

fn default_true() -> bool {
    true
}

fn default_tabs() -> Vec<TabConfig> {
    vec![
        TabConfig {
            id: "practice".to_string(),
            name: "Practice Session".to_string(),
            sessions: vec!["Practice".to_string()],
        },
        TabConfig {
            id: "race".to_string(),
            name: "Race".to_string(),
            sessions: vec!["Qualifying".to_string(), "Race".to_string()],
        },
    ]
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.tabs.is_empty() {
            return Err(anyhow!("At least one tab must be configured"));
        }

        for tab in &self.tabs {
            if tab.id.trim().is_empty() {
                return Err(anyhow!("Tab id must not be empty"));
            }
            if tab.sessions.is_empty() {
                return Err(anyhow!("Tab '{}' has no sessions", tab.id));
            }
            for session in &tab.sessions {
                if session.trim().is_empty() {
                    return Err(anyhow!("Tab '{}' contains an empty session name", tab.id));
                }
            }
        }

        let mut ids: Vec<&str> = self.tabs.iter().map(|t| t.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        if ids.len() != self.tabs.len() {
            return Err(anyhow!("Tab ids must be unique"));
        }

        if self.generator.min_chapter_length_secs == Some(0) {
            return Err(anyhow!(
                "min_chapter_length_secs must be positive; use null to disable filtering"
            ));
        }

        Ok(())
    }

    /// Look up a tab by its identifier
    pub fn tab(&self, id: &str) -> Option<&TabConfig> {
        self.tabs.iter().find(|t| t.id == id)
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            tabs: default_tabs(),
            generator: GeneratorConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
