use crate::template::{Template, TemplateCategory};

/// Read-only registry of section templates.
///
/// Lookup is by template ID; category listings preserve declaration order,
/// which is also the order the palette presents them in.
#[derive(Debug, Clone)]
pub struct Catalog {
    templates: Vec<Template>,
}

impl Catalog {
    pub fn new(templates: Vec<Template>) -> Self {
        Self { templates }
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn lookup(&self, template_id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == template_id)
    }

    /// Templates in `category`, in declaration order (never sorted).
    pub fn list_by_category(
        &self,
        category: TemplateCategory,
    ) -> impl Iterator<Item = &Template> {
        self.templates
            .iter()
            .filter(move |t| t.category == category)
    }

    /// The built-in full page template: hero, features, CTA, footer.
    /// Used by the "start from template" flow to seed a complete page.
    pub fn page_template(&self) -> Vec<&Template> {
        crate::builtin::PAGE_TEMPLATE_IDS
            .iter()
            .filter_map(|id| self.lookup(id))
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        crate::builtin::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_finds_builtin_templates() {
        let catalog = Catalog::default();
        assert!(catalog.lookup("hero-centered").is_some());
        assert!(catalog.lookup("no-such-template").is_none());
    }

    #[test]
    fn category_listing_preserves_declaration_order() {
        let catalog = Catalog::default();
        let heroes: Vec<&str> = catalog
            .list_by_category(TemplateCategory::Hero)
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(heroes, ["hero-centered", "hero-split"]);
    }

    #[test]
    fn page_template_is_hero_features_cta_footer() {
        use blockpress_model::SectionKind;

        let catalog = Catalog::default();
        let kinds: Vec<SectionKind> =
            catalog.page_template().iter().map(|t| t.kind).collect();
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
