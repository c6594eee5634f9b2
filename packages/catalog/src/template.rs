use blockpress_model::{
    Animations, Background, Content, Layout, Section, SectionKind, Spacing,
};
use serde::{Deserialize, Serialize};

/// Palette grouping for the section picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    Hero,
    Content,
    Social,
    Commerce,
    Media,
    Cta,
    Footer,
}

/// Partial section used to seed new sections. Any absent field falls back
/// to the hard-coded editor defaults at instantiation time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<Spacing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Background>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animations: Option<Animations>,
}

/// A named, pre-configured starting point for a new section. Templates are
/// loaded once at startup and never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,
    pub category: TemplateCategory,
    pub thumbnail: String,
    pub kind: SectionKind,
    pub config: TemplateConfig,
}

impl Template {
    /// Build a section from this template. The caller supplies the freshly
    /// minted ID and the position; everything else is seeded from `config`
    /// with the editor fallbacks for absent fields.
    pub fn instantiate(&self, id: impl Into<String>, order: usize) -> Section {
        let mut section = Section::new(id, self.kind, self.name.clone(), order);
        if let Some(content) = &self.config.content {
            section.content = content.clone();
        }
        if let Some(spacing) = self.config.spacing {
            section.spacing = spacing;
        }
        if let Some(background) = &self.config.background {
            section.background = background.clone();
        }
        section.layout = Some(self.config.layout.unwrap_or_default());
        section.animations = Some(self.config.animations.unwrap_or_default());
        section.template_id = Some(self.id.clone());
        section
    }
}
