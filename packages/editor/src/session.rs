//! # Editor Session
//!
//! The top-level editing controller: owns the live document, its history,
//! the clipboard, the ID generator, and the current selection.
//!
//! Every editing operation runs as a pure function over the live document
//! and the result is committed as a history snapshot, so the session is the
//! single mutation path. The clipboard belongs to the session rather than
//! the page: switching pages resets document and history but keeps the
//! clipboard, which is what makes cross-page paste work.

use blockpress_catalog::Catalog;
use blockpress_model::{Document, IdGenerator, PageMetadata, Section};

use crate::clipboard::Clipboard;
use crate::history::History;
use crate::ops::{self, SectionPatch};

pub struct EditorSession {
    document: Document,
    history: History,
    clipboard: Clipboard,
    ids: IdGenerator,
    selection: Option<String>,
    metadata: PageMetadata,
    page_id: Option<String>,
    dirty: bool,
}

impl EditorSession {
    /// Start a session on a fresh, empty, untitled page.
    pub fn new() -> Self {
        let metadata = PageMetadata::default();
        let ids = IdGenerator::new(metadata.slug_or_default());
        Self {
            document: Document::new(),
            history: History::new(Document::new()),
            clipboard: Clipboard::new(),
            ids,
            selection: None,
            metadata,
            page_id: None,
            dirty: false,
        }
    }

    /// Switch to a new empty page, discarding undo/redo state for the
    /// previous one. The clipboard survives.
    pub fn new_page(&mut self, slug: &str) {
        self.document = Document::new();
        self.history.reset(Document::new());
        self.ids = IdGenerator::new(slug);
        self.selection = None;
        self.metadata = PageMetadata::with_slug(slug);
        self.page_id = None;
        self.dirty = false;
    }

    /// Open a previously persisted page. The section array's `order` values
    /// are trusted; history is reset to this single state.
    pub fn open(
        &mut self,
        page_id: impl Into<String>,
        sections: Vec<Section>,
        metadata: PageMetadata,
    ) {
        self.ids = IdGenerator::resume(metadata.slug_or_default(), &sections);
        self.document = Document::from_sections(sections);
        self.history.reset(self.document.clone());
        self.selection = None;
        self.metadata = metadata;
        self.page_id = Some(page_id.into());
        self.dirty = false;
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn metadata(&self) -> &PageMetadata {
        &self.metadata
    }

    /// Edit page metadata. Metadata is orthogonal to section state and does
    /// not create history entries, but it does mark the page dirty.
    pub fn metadata_mut(&mut self) -> &mut PageMetadata {
        self.dirty = true;
        &mut self.metadata
    }

    pub fn page_id(&self) -> Option<&str> {
        self.page_id.as_deref()
    }

    /// Record the ID assigned by the store after a successful save.
    pub fn mark_saved(&mut self, page_id: impl Into<String>) {
        self.page_id = Some(page_id.into());
        self.dirty = false;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    /// Select a section. Stale IDs are tolerated and resolve to no
    /// selection.
    pub fn select(&mut self, id: Option<String>) {
        self.selection = id.filter(|id| self.document.contains(id));
    }

    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    // -- editing operations -------------------------------------------------

    pub fn add_section(&mut self, catalog: &Catalog, template_id: &str) {
        let Some(template) = catalog.lookup(template_id) else {
            return;
        };
        let next = ops::add_section(&self.document, template, &mut self.ids);
        self.commit(next);
    }

    pub fn update_section(&mut self, id: &str, patch: &SectionPatch) {
        let next = ops::update_section(&self.document, id, patch);
        self.commit(next);
    }

    pub fn delete_section(&mut self, id: &str) {
        let next = ops::delete_section(&self.document, id);
        if self.selection.as_deref() == Some(id) {
            self.selection = None;
        }
        self.commit(next);
    }

    pub fn duplicate_section(&mut self, id: &str) {
        let next = ops::duplicate_section(&self.document, id, &mut self.ids);
        self.commit(next);
    }

    pub fn reorder(&mut self, source_id: &str, destination_id: &str) {
        let next = ops::reorder(&self.document, source_id, destination_id);
        self.commit(next);
    }

    /// Copy a section to the clipboard. Unknown ID: no-op.
    pub fn copy(&mut self, id: &str) {
        if let Some(section) = self.document.find(id) {
            self.clipboard.copy(section);
        }
    }

    pub fn paste(&mut self) {
        let next = ops::paste(&self.document, &self.clipboard, &mut self.ids);
        self.commit(next);
    }

    /// Replace the page content with the built-in full page template.
    pub fn load_template_page(&mut self, catalog: &Catalog) {
        let next = ops::load_template_page(catalog, &mut self.ids);
        self.selection = None;
        self.commit(next);
    }

    // -- history ------------------------------------------------------------

    pub fn undo(&mut self) -> bool {
        if let Some(previous) = self.history.undo() {
            self.document = previous.clone();
            self.heal_selection();
            self.dirty = true;
            true
        } else {
            false
        }
    }

    pub fn redo(&mut self) -> bool {
        if let Some(next) = self.history.redo() {
            self.document = next.clone();
            self.heal_selection();
            self.dirty = true;
            true
        } else {
            false
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Commit an operation result. No-op results (stale IDs, empty
    /// clipboard) do not create history entries.
    fn commit(&mut self, next: Document) {
        if next == self.document {
            return;
        }
        self.document = next;
        self.history.commit(self.document.clone());
        self.dirty = true;
    }

    /// A restored snapshot may no longer contain the selected section.
    fn heal_selection(&mut self) {
        let stale = self
            .selection
            .as_deref()
            .is_some_and(|id| !self.document.contains(id));
        if stale {
            self.selection = None;
        }
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_starts_empty_and_clean() {
        let session = EditorSession::new();
        assert!(session.document().is_empty());
        assert!(!session.is_dirty());
        assert!(session.selection().is_none());
        assert!(!session.can_undo());
    }

    #[test]
    fn test_noop_edits_do_not_pollute_history() {
        let mut session = EditorSession::new();
        session.delete_section("missing");
        session.reorder("a", "b");
        session.paste();

        assert!(!session.can_undo());
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_delete_clears_selection() {
        let catalog = blockpress_catalog::builtin();
        let mut session = EditorSession::new();
        session.add_section(&catalog, "hero-centered");

        let id = session.document().sections()[0].id.clone();
        session.select(Some(id.clone()));
        assert_eq!(session.selection(), Some(id.as_str()));

        session.delete_section(&id);
        assert!(session.selection().is_none());
    }

    #[test]
    fn test_select_tolerates_stale_ids() {
        let mut session = EditorSession::new();
        session.select(Some("long-gone".to_string()));
        assert!(session.selection().is_none());
    }

    #[test]
    fn test_open_resets_history_but_keeps_clipboard() {
        let catalog = blockpress_catalog::builtin();
        let mut session = EditorSession::new();
        session.load_template_page(&catalog);
        let copied = session.document().sections()[0].id.clone();
        session.copy(&copied);

        let sections = session.document().sections().to_vec();
        session.open("page-1", sections, PageMetadata::with_slug("home"));

        assert!(!session.can_undo());
        assert!(!session.is_dirty());
        assert!(!session.clipboard().is_empty());
    }

    #[test]
    fn test_metadata_edit_marks_dirty_without_history() {
        let mut session = EditorSession::new();
        session.metadata_mut().title = Some("Landing".to_string());
        assert!(session.is_dirty());
        assert!(!session.can_undo());
    }
}
