//! Per-chat reading history, stored as a JSON file.
//!
//! Owned entirely by the CLI layer; the engine never sees it. Keeps the 50
//! most recent entries per chat and writes atomically (temp file + rename).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use unke_core::Reading;

/// Entries kept per chat.
const KEEP: usize = 50;

/// One recorded reading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Timestamp of the reading, minute precision.
    pub ts: String,
    /// Misfortune code.
    pub code: String,
    /// Severity level, 1-5.
    pub severity: u32,
}

impl HistoryEntry {
    /// Build the history record for a composed reading.
    pub fn for_reading(reading: &Reading) -> Self {
        Self {
            ts: reading.at.format("%Y-%m-%dT%H:%M").to_string(),
            code: reading.misfortune.code.clone(),
            severity: reading.severity,
        }
    }
}

/// History file: chat id -> recent entries, oldest first.
#[derive(Debug)]
pub struct History {
    path: PathBuf,
    entries: BTreeMap<String, Vec<HistoryEntry>>,
}

impl History {
    /// Load the history file. A missing or unreadable file yields an empty
    /// history; readings must not fail because the log is corrupt.
    pub fn load(path: &Path) -> Self {
        let entries = std::fs::read_to_string(path)
            .ok()
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_default();
        Self {
            path: path.to_path_buf(),
            entries,
        }
    }

    /// Append an entry for a chat, dropping anything beyond the cap.
    pub fn record(&mut self, chat: i64, entry: HistoryEntry) {
        let list = self.entries.entry(chat.to_string()).or_default();
        list.push(entry);
        if list.len() > KEEP {
            let excess = list.len() - KEEP;
            list.drain(..excess);
        }
    }

    /// The most recent `limit` entries for a chat, oldest first.
    pub fn last(&self, chat: i64, limit: usize) -> &[HistoryEntry] {
        match self.entries.get(&chat.to_string()) {
            Some(list) => &list[list.len().saturating_sub(limit)..],
            None => &[],
        }
    }

    /// Write the history back, atomically.
    pub fn save(&self) -> Result<(), String> {
        let json = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| format!("cannot serialize history: {e}"))?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json)
            .map_err(|e| format!("cannot write {}: {e}", tmp.display()))?;
        std::fs::rename(&tmp, &self.path)
            .map_err(|e| format!("cannot replace {}: {e}", self.path.display()))
    }
}
