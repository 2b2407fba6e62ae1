//! Append-only battle narration log
//!
//! The log is the primary record of what happened in an encounter: the UI
//! narrates straight from it and tests use it as the oracle for turn
//! sequencing. Entries get monotonically increasing ids and are never
//! reordered or mutated after being appended.

/// What kind of event a log entry narrates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LogCategory {
    Info,
    Attack,
    Damage,
    Capture,
    Victory,
    Defeat,
}

impl LogCategory {
    /// Get display name
    pub fn as_str(&self) -> &'static str {
        match self {
            LogCategory::Info => "info",
            LogCategory::Attack => "attack",
            LogCategory::Damage => "damage",
            LogCategory::Capture => "capture",
            LogCategory::Victory => "victory",
            LogCategory::Defeat => "defeat",
        }
    }
}

/// One narrated event. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEntry {
    /// Monotonic per-battle id, assigned from 0 in append order
    pub id: u64,
    pub category: LogCategory,
    pub message: String,
}

/// Ordered record of everything that happened in one encounter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleLog {
    entries: Vec<LogEntry>,
    next_id: u64,
}

impl BattleLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry and return its id
    pub fn append(&mut self, category: LogCategory, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(LogEntry {
            id,
            category,
            message: message.into(),
        });
        id
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Number of entries appended so far
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recent entry, if any
    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    /// Iterate entries of one category, preserving order
    pub fn of_category(&self, category: LogCategory) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().filter(move |e| e.category == category)
    }
}
