//! Calculation history
//!
//! An append-only log of rendered lines. Entries are never removed or
//! edited for the lifetime of the widget.

use serde::{Deserialize, Serialize};

/// A single completed computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The rendered line, e.g. `"5 + 3 = 8"`
    pub text: String,
    /// The numeric result, absent when the computation produced none
    ///
    /// JSON has no infinities or NaN, so a non-finite result serializes as
    /// `null`. The line in `text` still reads `Infinity` or `NaN`.
    pub result: Option<f64>,
}

impl HistoryEntry {
    /// Creates an entry for a computation with a result
    #[must_use]
    pub fn new(text: String, result: f64) -> Self {
        Self {
            text,
            result: Some(result),
        }
    }

    /// Creates an entry that carries only its rendered line
    #[must_use]
    pub fn without_result(text: String) -> Self {
        Self { text, result: None }
    }

    /// Returns the rendered line
    #[must_use]
    pub fn display(&self) -> &str {
        &self.text
    }
}

/// Append-only history log
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Creates an empty history
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Returns the number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the history is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the entries (oldest first)
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Returns the most recent entry
    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Returns the rendered lines, oldest first
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.text.clone()).collect()
    }

    /// Serializes the history to JSON
    ///
    /// A non-finite result (`10 / 0`) is written as `"result":null`; read the
    /// entry's `text` to tell `Infinity` from `NaN`.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries)
    }

    /// Exports history as one line per entry
    #[must_use]
    pub fn export_formatted(&self) -> String {
        self.entries
            .iter()
            .map(HistoryEntry::display)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
