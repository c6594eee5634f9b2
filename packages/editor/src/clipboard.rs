use blockpress_model::Section;

/// Single-slot clipboard for one copied section.
///
/// In-memory, process lifetime: it survives page switches within a session
/// (enabling cross-page paste), is overwritten unconditionally by each copy,
/// and is never persisted. The stored section is a value copy; its `order`
/// is meaningless and reassigned on paste.
#[derive(Debug, Clone, Default)]
pub struct Clipboard {
    slot: Option<Section>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value copy of `section`, replacing any previous copy.
    pub fn copy(&mut self, section: &Section) {
        let mut copy = section.clone();
        copy.order = 0;
        self.slot = Some(copy);
    }

    pub fn peek(&self) -> Option<&Section> {
        self.slot.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockpress_model::SectionKind;

    #[test]
    fn copy_overwrites_previous_slot() {
        let mut clipboard = Clipboard::new();
        assert!(clipboard.is_empty());

        clipboard.copy(&Section::new("s-1", SectionKind::Hero, "First", 3));
        clipboard.copy(&Section::new("s-2", SectionKind::Cta, "Second", 5));

        let held = clipboard.peek().unwrap();
        assert_eq!(held.id, "s-2");
        assert_eq!(held.order, 0);
    }

    #[test]
    fn copy_is_a_value_copy() {
        let mut clipboard = Clipboard::new();
        let mut section = Section::new("s-1", SectionKind::Hero, "Original", 0);
        clipboard.copy(&section);

        section.title = "Mutated later".to_string();
        assert_eq!(clipboard.peek().unwrap().title, "Original");
    }
}
