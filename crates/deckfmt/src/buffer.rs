//! Deferred row storage for the open table.
//!
//! Rows cannot be written as they arrive because column widths are only
//! final once the whole table has been seen. Entries keep their relative
//! order so comments and rules print exactly where they were added.

/// One buffered line of the open table.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum RowEntry {
    /// Pre-formatted cells plus an optional per-row terminator override.
    Content {
        cells: Vec<String>,
        terminator: Option<String>,
    },
    /// Free-text comment, printed in position, never wrapped.
    Comment(String),
    /// Full-table-width rule of the fill character.
    Rule(char),
}

/// Buffered entries plus the in-progress cell list of the current row.
#[derive(Debug, Default)]
pub(crate) struct RowBuffer {
    entries: Vec<RowEntry>,
    pending: Vec<String>,
}

impl RowBuffer {
    /// Cells appended to the current row so far.
    pub(crate) fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Whether a row is in progress.
    pub(crate) fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub(crate) fn push_cell(&mut self, text: String) {
        self.pending.push(text);
    }

    /// Move the in-progress cells into a content entry.
    pub(crate) fn complete_row(&mut self, terminator: Option<String>) {
        let cells = std::mem::take(&mut self.pending);
        self.entries.push(RowEntry::Content { cells, terminator });
    }

    pub(crate) fn push_comment(&mut self, text: String) {
        self.entries.push(RowEntry::Comment(text));
    }

    pub(crate) fn push_rule(&mut self, fill: char) {
        self.entries.push(RowEntry::Rule(fill));
    }

    /// Drain the buffered entries for flushing.
    pub(crate) fn take(&mut self) -> Vec<RowEntry> {
        std::mem::take(&mut self.entries)
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.pending.clear();
    }
}
