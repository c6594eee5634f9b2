//! # Edit History
//!
//! Linear undo/redo stack of full document snapshots.
//!
//! ## Design
//!
//! - Every committed edit appends a whole-document snapshot
//! - The entry at the current index is always the live document
//! - Committing from a non-tip position discards the abandoned redo branch
//! - Bounded depth: the oldest snapshot is dropped past `max_levels`
//!
//! Whole-document snapshots are deliberate at page-builder scale (tens of
//! sections); the external contract would not change if snapshots moved to
//! structural sharing.

use blockpress_model::Document;

const DEFAULT_MAX_LEVELS: usize = 100;

/// Undo/redo stack for page editing.
#[derive(Debug, Clone)]
pub struct History {
    /// Snapshots, oldest first. `entries[index]` is the live document.
    entries: Vec<Document>,
    index: usize,
    /// Maximum number of snapshots (0 = unlimited)
    max_levels: usize,
}

impl History {
    pub fn new(initial: Document) -> Self {
        Self::with_max_levels(initial, DEFAULT_MAX_LEVELS)
    }

    pub fn with_max_levels(initial: Document, max_levels: usize) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
            max_levels,
        }
    }

    /// The document currently rendered.
    pub fn current(&self) -> &Document {
        &self.entries[self.index]
    }

    /// Commit a new document as the tip. Entries past the current index are
    /// discarded first, so undoing and then editing permanently abandons
    /// the redo branch.
    pub fn commit(&mut self, document: Document) {
        self.entries.truncate(self.index + 1);
        self.entries.push(document);

        if self.max_levels > 0 && self.entries.len() > self.max_levels {
            self.entries.remove(0);
        }
        self.index = self.entries.len() - 1;
    }

    /// Step back one snapshot. Returns the new live document, or `None` at
    /// the root.
    pub fn undo(&mut self) -> Option<&Document> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(&self.entries[self.index])
    }

    /// Step forward one snapshot. Returns the new live document, or `None`
    /// at the tip.
    pub fn redo(&mut self) -> Option<&Document> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        Some(&self.entries[self.index])
    }

    /// Replace all history with a single entry. Used when switching to or
    /// loading a different page.
    pub fn reset(&mut self, document: Document) {
        self.entries = vec![document];
        self.index = 0;
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    pub fn undo_levels(&self) -> usize {
        self.index
    }

    pub fn redo_levels(&self) -> usize {
        self.entries.len() - 1 - self.index
    }
}
