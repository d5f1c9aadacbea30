use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::app_config::TabConfig;
use crate::csv_import;
use crate::timeline::Session;

// @module: Lap sheet input model

/// Raw entries for one session of a lap sheet
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SheetSession {
    /// Raw offset string; empty means no offset
    #[serde(default)]
    pub offset: String,

    /// Raw lap time strings in driving order
    #[serde(default)]
    pub laps: Vec<String>,

    /// Optional CSV file whose "Lap Time" column is appended to `laps`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub laps_csv: Option<PathBuf>,
}

/// A lap sheet: per-session raw entries, keyed by session name.
///
/// The sheet itself carries no ordering — the active tab's configured
/// session list decides which sessions are processed and in which order.
/// Sessions listed by the tab but missing from the sheet contribute an empty
/// session, which still yields its "Start of" timeline marker.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LapSheet {
    #[serde(default)]
    pub sessions: HashMap<String, SheetSession>,
}

impl LapSheet {
    /// Load a lap sheet from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read lap sheet: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse lap sheet: {}", path.display()))
    }

    /// Assemble the ordered session list for a tab.
    ///
    /// When CSV import is enabled, each session's `laps_csv` column is read
    /// (relative paths resolve against `base_dir`) and appended after the
    /// manual laps; until that read completes no imported lap is visible.
    /// With the import disabled, `laps_csv` is ignored with a warning.
    pub async fn resolve(
        &self,
        tab: &TabConfig,
        enable_csv_import: bool,
        base_dir: &Path,
    ) -> Result<Vec<Session>> {
        let mut sessions = Vec::with_capacity(tab.sessions.len());

        for name in &tab.sessions {
            let sheet_session = self.sessions.get(name).cloned().unwrap_or_default();
            let mut laps = sheet_session.laps;

            if let Some(csv_path) = &sheet_session.laps_csv {
                if enable_csv_import {
                    let resolved = if csv_path.is_relative() {
                        base_dir.join(csv_path)
                    } else {
                        csv_path.clone()
                    };
                    laps.extend(csv_import::import_lap_times(&resolved).await?);
                } else {
                    warn!(
                        "CSV import is disabled; ignoring laps_csv for session '{}'",
                        name
                    );
                }
            }

            sessions.push(Session {
                name: name.clone(),
                offset: sheet_session.offset,
                laps,
            });
        }

        Ok(sessions)
    }
}
