//! # Editing Operations
//!
//! Pure functions `Document -> Document`. The caller (normally
//! [`crate::EditorSession`]) is responsible for committing each result to
//! history.
//!
//! ## Operation Semantics
//!
//! ### Reorder
//! - Array move: remove the source, insert at the destination's index
//!   computed after removal
//! - Idempotent once the source sits at the destination's former position
//!
//! ### Delete / Duplicate
//! - Always renormalize `order` to `0..N-1` afterward
//!
//! ### Unknown IDs
//! - Every operation on an unknown section ID is a silent no-op, never an
//!   error: the editing surface tolerates stale references (a delayed click
//!   after another delete already removed the target).

use blockpress_catalog::{Catalog, Template};
use blockpress_model::{
    Animations, Background, Content, Document, IdGenerator, Layout, Section, SectionKind, Spacing,
};
use serde::{Deserialize, Serialize};

use crate::clipboard::Clipboard;

/// Shallow per-field update for a section. Fields present in the patch
/// replace the section's values wholesale; absent fields are untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionPatch {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<SectionKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<Spacing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Background>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animations: Option<Animations>,
}

impl SectionPatch {
    fn apply(&self, section: &mut Section) {
        if let Some(kind) = self.kind {
            section.kind = kind;
        }
        if let Some(title) = &self.title {
            section.title = title.clone();
        }
        if let Some(content) = &self.content {
            section.content = content.clone();
        }
        if let Some(spacing) = self.spacing {
            section.spacing = spacing;
        }
        if let Some(background) = &self.background {
            section.background = background.clone();
        }
        if let Some(text_color) = &self.text_color {
            section.text_color = Some(text_color.clone());
        }
        if let Some(border_radius) = self.border_radius {
            section.border_radius = Some(border_radius);
        }
        if let Some(border_width) = self.border_width {
            section.border_width = Some(border_width);
        }
        if let Some(border_color) = &self.border_color {
            section.border_color = Some(border_color.clone());
        }
        if let Some(box_shadow) = &self.box_shadow {
            section.box_shadow = Some(box_shadow.clone());
        }
        if let Some(layout) = self.layout {
            section.layout = Some(layout);
        }
        if let Some(animations) = self.animations {
            section.animations = Some(animations);
        }
    }

    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn background(background: Background) -> Self {
        Self {
            background: Some(background),
            ..Self::default()
        }
    }
}

/// Append a new section built from `template`, with a freshly minted ID.
pub fn add_section(doc: &Document, template: &Template, ids: &mut IdGenerator) -> Document {
    let mut next = doc.clone();
    let section = template.instantiate(ids.new_id(), next.len());
    next.push(section);
    next
}

/// Shallow-merge `patch` into the section matching `id`. Unknown ID: no-op.
pub fn update_section(doc: &Document, id: &str, patch: &SectionPatch) -> Document {
    let mut next = doc.clone();
    if let Some(section) = next.find_mut(id) {
        patch.apply(section);
    }
    next
}

/// Remove the section matching `id` and renormalize the remaining orders.
pub fn delete_section(doc: &Document, id: &str) -> Document {
    let mut next = doc.clone();
    next.remove(id);
    next
}

/// Clone the section matching `id` with a new ID, inserted immediately
/// after the original. Unknown ID: no-op.
pub fn duplicate_section(doc: &Document, id: &str, ids: &mut IdGenerator) -> Document {
    let mut next = doc.clone();
    let Some(index) = next.index_of(id) else {
        return next;
    };
    let mut copy = next.sections()[index].clone();
    copy.id = ids.new_id();
    next.insert(index + 1, copy);
    next
}

/// Move the source section to the destination section's position.
///
/// Array move semantics: remove the source, then insert at the destination's
/// index computed after removal. Equal or missing IDs: no-op.
pub fn reorder(doc: &Document, source_id: &str, destination_id: &str) -> Document {
    let mut next = doc.clone();
    if source_id == destination_id {
        return next;
    }
    if !next.contains(source_id) || !next.contains(destination_id) {
        return next;
    }

    // contains() above guarantees both lookups below succeed
    let Some(moved) = next.remove(source_id) else {
        return next;
    };
    let Some(dest) = next.index_of(destination_id) else {
        return next;
    };
    next.insert(dest, moved);
    next
}

/// Append a copy of the clipboarded section with a new ID. Empty clipboard:
/// no-op.
pub fn paste(doc: &Document, clipboard: &Clipboard, ids: &mut IdGenerator) -> Document {
    let mut next = doc.clone();
    if let Some(copied) = clipboard.peek() {
        let mut section = copied.clone();
        section.id = ids.new_id();
        next.push(section);
    }
    next
}

/// Instantiate the full built-in page template: one section per template in
/// page order, each with a fresh ID and sequential `order` starting at 0.
pub fn load_template_page(catalog: &Catalog, ids: &mut IdGenerator) -> Document {
    let mut doc = Document::new();
    for template in catalog.page_template() {
        let section = template.instantiate(ids.new_id(), doc.len());
        doc.push(section);
    }
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockpress_model::SectionKind;

    fn ids() -> IdGenerator {
        IdGenerator::new("test-page")
    }

    fn doc_of(ids: &mut IdGenerator, titles: &[&str]) -> Document {
        let mut doc = Document::new();
        for title in titles {
            doc.push(Section::new(ids.new_id(), SectionKind::Custom, *title, 0));
        }
        doc
    }

    fn titles(doc: &Document) -> Vec<&str> {
        doc.sections().iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn add_section_appends_last() {
        let mut ids = ids();
        let doc = doc_of(&mut ids, &["A", "B"]);
        let catalog = blockpress_catalog::builtin();
        let template = catalog.lookup("cta-banner").unwrap();

        let next = add_section(&doc, template, &mut ids);
        assert_eq!(next.len(), doc.len() + 1);
        assert_eq!(next.sections()[2].kind, SectionKind::Cta);
        assert_eq!(next.sections()[2].order, 2);
        assert!(next.is_normalized());
    }

    #[test]
    fn update_section_merges_shallowly() {
        let mut ids = ids();
        let doc = doc_of(&mut ids, &["A", "B"]);
        let id = doc.sections()[0].id.clone();

        let next = update_section(&doc, &id, &SectionPatch::title("Renamed"));
        assert_eq!(next.sections()[0].title, "Renamed");
        // Untouched fields and siblings are unchanged
        assert_eq!(next.sections()[0].kind, doc.sections()[0].kind);
        assert_eq!(next.sections()[1], doc.sections()[1]);
    }

    #[test]
    fn update_unknown_id_is_noop() {
        let mut ids = ids();
        let doc = doc_of(&mut ids, &["A"]);
        let next = update_section(&doc, "missing", &SectionPatch::title("X"));
        assert_eq!(next, doc);
    }

    #[test]
    fn delete_renormalizes_orders() {
        let mut ids = ids();
        let doc = doc_of(&mut ids, &["A", "B", "C", "D"]);
        let id = doc.sections()[1].id.clone();

        let next = delete_section(&doc, &id);
        assert_eq!(titles(&next), ["A", "C", "D"]);
        let orders: Vec<usize> = next.sections().iter().map(|s| s.order).collect();
        assert_eq!(orders, [0, 1, 2]);
    }

    #[test]
    fn duplicate_inserts_after_original() {
        let mut ids = ids();
        let doc = doc_of(&mut ids, &["A", "B", "C"]);
        let id = doc.sections()[1].id.clone();

        let next = duplicate_section(&doc, &id, &mut ids);
        assert_eq!(next.len(), 4);
        assert_eq!(titles(&next), ["A", "B", "B", "C"]);
        assert_ne!(next.sections()[1].id, next.sections()[2].id);
        let orders: Vec<usize> = next.sections().iter().map(|s| s.order).collect();
        assert_eq!(orders, [0, 1, 2, 3]);
    }

    #[test]
    fn reorder_moves_to_destination_index() {
        let mut ids = ids();
        let doc = doc_of(&mut ids, &["A", "B", "C", "D"]);
        let d = doc.sections()[3].id.clone();
        let a = doc.sections()[0].id.clone();

        let next = reorder(&doc, &d, &a);
        assert_eq!(titles(&next), ["D", "A", "B", "C"]);
        assert!(next.is_normalized());
    }

    #[test]
    fn reorder_is_idempotent_once_applied() {
        let mut ids = ids();
        let doc = doc_of(&mut ids, &["A", "B", "C", "D"]);
        let a = doc.sections()[0].id.clone();
        let d = doc.sections()[3].id.clone();

        let once = reorder(&doc, &a, &d);
        let twice = reorder(&once, &a, &d);
        assert_eq!(once, twice);
    }

    #[test]
    fn reorder_same_or_missing_ids_is_noop() {
        let mut ids = ids();
        let doc = doc_of(&mut ids, &["A", "B"]);
        let a = doc.sections()[0].id.clone();

        assert_eq!(reorder(&doc, &a, &a), doc);
        assert_eq!(reorder(&doc, &a, "missing"), doc);
        assert_eq!(reorder(&doc, "missing", &a), doc);
    }

    #[test]
    fn paste_appends_with_fresh_id() {
        let mut ids = ids();
        let doc = doc_of(&mut ids, &["A"]);
        let mut clipboard = Clipboard::default();
        clipboard.copy(&doc.sections()[0]);

        let next = paste(&doc, &clipboard, &mut ids);
        assert_eq!(next.len(), 2);
        let pasted = &next.sections()[1];
        assert_ne!(pasted.id, doc.sections()[0].id);
        assert_eq!(pasted.order, 1);
        assert_eq!(pasted.title, "A");
    }

    #[test]
    fn paste_empty_clipboard_is_noop() {
        let mut ids = ids();
        let doc = doc_of(&mut ids, &["A"]);
        let next = paste(&doc, &Clipboard::default(), &mut ids);
        assert_eq!(next, doc);
    }

    #[test]
    fn load_template_page_builds_four_sections() {
        let mut ids = ids();
        let catalog = blockpress_catalog::builtin();
        let doc = load_template_page(&catalog, &mut ids);

        assert_eq!(doc.len(), 4);
        assert!(doc.is_normalized());
        let kinds: Vec<SectionKind> = doc.sections().iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            [
                SectionKind::Hero,
                SectionKind::Features,
                SectionKind::Cta,
                SectionKind::Container
            ]
        );
    }
}
