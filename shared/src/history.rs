use uuid::Uuid;

use crate::model::{AnalysisResult, ContentKind};

/// One completed analysis. Never mutated after append.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub kind: ContentKind,
    pub display_name: String,
    pub result: AnalysisResult,
    pub recorded_at: String,
}

/// Session-scoped record of completed analyses. Append-only except for the
/// explicit full clear; no storage backend, lifetime ends with the tab.
#[derive(Debug, Default)]
pub struct HistoryLedger {
    entries: Vec<HistoryEntry>,
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends at the end. Repeated identical analyses each get their own
    /// entry; nothing is deduplicated or reordered.
    pub fn append(
        &mut self,
        kind: ContentKind,
        display_name: String,
        result: AnalysisResult,
        recorded_at: String,
    ) {
        self.entries.push(HistoryEntry {
            id: Uuid::new_v4(),
            kind,
            display_name,
            result,
            recorded_at,
        });
    }

    /// Empties the ledger unconditionally. Irreversible.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent first, for display. Storage order stays chronological.
    pub fn iter_recent(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }
}
