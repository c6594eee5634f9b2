use crate::section::Section;
use serde::{Deserialize, Serialize};

/// The full ordered set of sections that constitutes one page being edited.
///
/// Invariant: the `order` values of the sections are exactly `0..N-1` with
/// no gaps or duplicates, and each section's array index equals its `order`.
/// Structural edits go through [`Document::normalize_orders`] to restore the
/// invariant; lookups by unknown ID are not errors.
///
/// Serializes transparently as a JSON array of sections (the wire contract
/// for the persisted section payload).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    sections: Vec<Section>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk-load a previously persisted section array, trusting its `order`
    /// values.
    pub fn from_sections(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn into_sections(self) -> Vec<Section> {
        self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.id == id)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index_of(id).is_some()
    }

    /// Re-number every section's `order` to match its array position,
    /// closing any gaps left by a structural edit.
    pub fn normalize_orders(&mut self) {
        for (index, section) in self.sections.iter_mut().enumerate() {
            section.order = index;
        }
    }

    /// True when every section's `order` equals its array index.
    pub fn is_normalized(&self) -> bool {
        self.sections
            .iter()
            .enumerate()
            .all(|(index, section)| section.order == index)
    }
}

impl Document {
    /// Append a section, assigning it the next order value.
    pub fn push(&mut self, mut section: Section) {
        section.order = self.sections.len();
        self.sections.push(section);
    }

    /// Insert a section at `index` (clamped to the current length) and
    /// renormalize orders.
    pub fn insert(&mut self, index: usize, section: Section) {
        let index = index.min(self.sections.len());
        self.sections.insert(index, section);
        self.normalize_orders();
    }

    /// Remove the section with the given ID, renormalizing orders.
    /// Returns the removed section, or `None` when the ID is unknown.
    pub fn remove(&mut self, id: &str) -> Option<Section> {
        let index = self.index_of(id)?;
        let removed = self.sections.remove(index);
        self.normalize_orders();
        Some(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::SectionKind;

    fn doc_with(n: usize) -> Document {
        let mut doc = Document::new();
        for i in 0..n {
            doc.push(Section::new(
                format!("s-{}", i + 1),
                SectionKind::Custom,
                format!("Section {}", i + 1),
                0,
            ));
        }
        doc
    }

    #[test]
    fn push_assigns_sequential_orders() {
        let doc = doc_with(4);
        assert!(doc.is_normalized());
        assert_eq!(doc.sections()[3].order, 3);
    }

    #[test]
    fn remove_renormalizes_orders() {
        let mut doc = doc_with(4);
        let removed = doc.remove("s-2").unwrap();
        assert_eq!(removed.id, "s-2");
        assert_eq!(doc.len(), 3);
        assert!(doc.is_normalized());
        let ids: Vec<&str> = doc.sections().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["s-1", "s-3", "s-4"]);
    }

    #[test]
    fn remove_unknown_id_is_none() {
        let mut doc = doc_with(2);
        assert!(doc.remove("missing").is_none());
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn insert_clamps_and_renormalizes() {
        let mut doc = doc_with(2);
        doc.insert(99, Section::new("s-9", SectionKind::Cta, "CTA", 0));
        assert_eq!(doc.sections()[2].id, "s-9");
        assert!(doc.is_normalized());
    }

    #[test]
    fn document_serializes_as_bare_array() {
        let doc = doc_with(2);
        let value = serde_json::to_value(&doc).unwrap();
        assert!(value.is_array());
        assert_eq!(value.as_array().unwrap().len(), 2);

        let back: Document = serde_json::from_value(value).unwrap();
        assert_eq!(doc, back);
    }
}
