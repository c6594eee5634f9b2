use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Loosely-typed content bag for a section.
///
/// Keys are drawn from a known-but-unenforced vocabulary (`subtitle`,
/// `cards`, `stats`, `plans`, `videoUrl`, ...). Renderers and the style
/// compiler pattern-match on which keys are present; absent keys simply
/// produce no output.
pub type Content = Map<String, Value>;

/// Semantic kind of a section. Determines which content-shape conventions
/// apply but does not restrict which content fields may be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Hero,
    Features,
    Testimonials,
    Cta,
    Custom,
    Container,
}

/// Box-model spacing in pixels. `padding_x` maps to left and right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spacing {
    pub padding_top: u32,
    pub padding_bottom: u32,
    pub padding_x: u32,
    pub gap: u32,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            padding_top: 48,
            padding_bottom: 48,
            padding_x: 24,
            gap: 16,
        }
    }
}

/// Background paint layers. When `image` is present the layering order is
/// overlay (if any) above gradient (if any) above the image, with `color`
/// as the fallback solid paint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Background {
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay: Option<String>,
}

impl Background {
    pub fn solid(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            gradient: None,
            image: None,
            overlay: None,
        }
    }
}

impl Default for Background {
    fn default() -> Self {
        Self::solid("#ffffff")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    Flex,
    Grid,
    Stack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Row,
    Column,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Justify {
    Start,
    Center,
    End,
    Between,
    Around,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Start,
    Center,
    End,
    Stretch,
}

/// Flex/grid/stack arrangement of a section's inner content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    #[serde(rename = "type")]
    pub kind: LayoutKind,
    pub direction: Direction,
    pub justify: Justify,
    pub align: Align,
    pub wrap: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_cols: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_rows: Option<u32>,
    pub gap: u32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            kind: LayoutKind::Flex,
            direction: Direction::Column,
            justify: Justify::Start,
            align: Align::Start,
            wrap: false,
            grid_cols: None,
            grid_rows: None,
            gap: 16,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationKind {
    Fade,
    Slide,
    Scale,
    Rotate,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationTrigger {
    Load,
    Scroll,
    Hover,
    Click,
}

/// Entrance animation settings. Durations are milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animations {
    pub enabled: bool,
    #[serde(rename = "type")]
    pub kind: AnimationKind,
    pub duration: u32,
    pub delay: u32,
    pub trigger: AnimationTrigger,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scroll_offset: Option<u32>,
}

impl Default for Animations {
    fn default() -> Self {
        Self {
            enabled: false,
            kind: AnimationKind::None,
            duration: 500,
            delay: 0,
            trigger: AnimationTrigger::Load,
            scroll_offset: None,
        }
    }
}

/// One visually and semantically distinct block of a page.
///
/// `id` is assigned at creation time and stable for the section's lifetime.
/// `order` is the position among siblings; for any document the set of order
/// values is exactly `0..N-1` with array position equal to `order`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SectionKind,
    pub title: String,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub content: Content,
    #[serde(default)]
    pub spacing: Spacing,
    #[serde(default)]
    pub background: Background,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animations: Option<Animations>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    pub order: usize,
    /// Nested sections. Present as an extension point; editing operations
    /// act on top-level sections only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Section>>,
}

impl Section {
    pub fn new(
        id: impl Into<String>,
        kind: SectionKind,
        title: impl Into<String>,
        order: usize,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            title: title.into(),
            content: Content::new(),
            spacing: Spacing::default(),
            background: Background::default(),
            text_color: None,
            border_radius: None,
            border_width: None,
            border_color: None,
            box_shadow: None,
            layout: Some(Layout::default()),
            animations: Some(Animations::default()),
            template_id: None,
            order,
            children: None,
        }
    }

    pub fn with_content(mut self, content: Content) -> Self {
        self.content = content;
        self
    }

    pub fn with_spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_background(mut self, background: Background) -> Self {
        self.background = background;
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn with_animations(mut self, animations: Animations) -> Self {
        self.animations = Some(animations);
        self
    }

    pub fn with_template_id(mut self, template_id: impl Into<String>) -> Self {
        self.template_id = Some(template_id.into());
        self
    }

    /// Length of the array under `content[key]`, if that key holds an array.
    pub fn content_array_len(&self, key: &str) -> Option<usize> {
        self.content.get(key).and_then(Value::as_array).map(Vec::len)
    }

    /// String value under `content[key]`, if that key holds a string.
    pub fn content_str(&self, key: &str) -> Option<&str> {
        self.content.get(key).and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn section_serializes_with_camel_case_keys() {
        let mut section = Section::new("a1-1", SectionKind::Hero, "Hero", 0);
        section.text_color = Some("#111827".to_string());
        section.template_id = Some("hero-centered".to_string());

        let value = serde_json::to_value(&section).unwrap();
        assert_eq!(value["type"], "hero");
        assert_eq!(value["textColor"], "#111827");
        assert_eq!(value["templateId"], "hero-centered");
        assert_eq!(value["spacing"]["paddingTop"], 48);
        assert_eq!(value["spacing"]["paddingX"], 24);

        // Absent optionals are omitted from the wire format
        assert!(value.get("borderRadius").is_none());
        assert!(value.get("children").is_none());
    }

    #[test]
    fn section_round_trips_through_json() {
        let mut section = Section::new("a1-2", SectionKind::Features, "Features", 1);
        section.content.insert(
            "cards".to_string(),
            json!([{ "title": "Fast" }, { "title": "Simple" }]),
        );
        section.background.gradient =
            Some("linear-gradient(180deg, #fff, #eef2ff)".to_string());

        let text = serde_json::to_string(&section).unwrap();
        let back: Section = serde_json::from_str(&text).unwrap();
        assert_eq!(section, back);
    }

    #[test]
    fn layout_defaults_match_editor_fallbacks() {
        let layout = Layout::default();
        assert_eq!(layout.kind, LayoutKind::Flex);
        assert_eq!(layout.direction, Direction::Column);
        assert_eq!(layout.justify, Justify::Start);
        assert_eq!(layout.align, Align::Start);
        assert!(!layout.wrap);
        assert_eq!(layout.gap, 16);
    }

    #[test]
    fn animation_defaults_match_editor_fallbacks() {
        let animations = Animations::default();
        assert!(!animations.enabled);
        assert_eq!(animations.kind, AnimationKind::None);
        assert_eq!(animations.duration, 500);
        assert_eq!(animations.delay, 0);
        assert_eq!(animations.trigger, AnimationTrigger::Load);
    }

    #[test]
    fn content_helpers_read_the_bag_permissively() {
        let mut section = Section::new("a1-3", SectionKind::Custom, "Video", 0);
        section
            .content
            .insert("videoUrl".to_string(), json!("https://vid.example/x.mp4"));
        section.content.insert("stats".to_string(), json!([1, 2, 3]));

        assert_eq!(
            section.content_str("videoUrl"),
            Some("https://vid.example/x.mp4")
        );
        assert_eq!(section.content_array_len("stats"), Some(3));
        assert_eq!(section.content_array_len("cards"), None);
        assert_eq!(section.content_str("stats"), None);
    }
}
