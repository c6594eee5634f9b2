//! Built-in section templates, declared in palette order.

use crate::catalog::Catalog;
use crate::template::{Template, TemplateCategory, TemplateConfig};
use blockpress_model::{
    Align, Background, Content, Direction, Justify, Layout, LayoutKind, SectionKind, Spacing,
};
use serde_json::{json, Value};

/// Section templates composing the built-in full page, in page order.
pub(crate) const PAGE_TEMPLATE_IDS: [&str; 4] =
    ["hero-centered", "features-grid", "cta-banner", "footer-columns"];

fn content(value: Value) -> Option<Content> {
    match value {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

fn grid_layout(cols: u32) -> Layout {
    Layout {
        kind: LayoutKind::Grid,
        direction: Direction::Row,
        justify: Justify::Start,
        align: Align::Stretch,
        wrap: false,
        grid_cols: Some(cols),
        grid_rows: None,
        gap: 24,
    }
}

fn centered_column() -> Layout {
    Layout {
        kind: LayoutKind::Flex,
        direction: Direction::Column,
        justify: Justify::Center,
        align: Align::Center,
        wrap: false,
        grid_cols: None,
        grid_rows: None,
        gap: 24,
    }
}

fn template(
    id: &str,
    name: &str,
    category: TemplateCategory,
    kind: SectionKind,
    config: TemplateConfig,
) -> Template {
    Template {
        id: id.to_string(),
        name: name.to_string(),
        category,
        thumbnail: format!("/thumbnails/{}.svg", id),
        kind,
        config,
    }
}

/// The static template registry, loaded once at startup.
pub fn builtin() -> Catalog {
    Catalog::new(vec![
        template(
            "hero-centered",
            "Centered Hero",
            TemplateCategory::Hero,
            SectionKind::Hero,
            TemplateConfig {
                content: content(json!({
                    "subtitle": "Launch your product with a page that sells it.",
                    "cta": { "label": "Get started", "href": "#signup" }
                })),
                spacing: Some(Spacing {
                    padding_top: 96,
                    padding_bottom: 96,
                    padding_x: 24,
                    gap: 24,
                }),
                background: Some(Background {
                    color: "#0f172a".to_string(),
                    gradient: Some(
                        "linear-gradient(180deg, #0f172a 0%, #1e293b 100%)".to_string(),
                    ),
                    image: None,
                    overlay: None,
                }),
                layout: Some(centered_column()),
                animations: None,
            },
        ),
        template(
            "hero-split",
            "Split Hero",
            TemplateCategory::Hero,
            SectionKind::Hero,
            TemplateConfig {
                content: content(json!({
                    "subtitle": "Show the product next to the pitch.",
                    "image": "/media/placeholder-hero.png",
                    "cta": { "label": "See it live", "href": "#demo" }
                })),
                spacing: Some(Spacing {
                    padding_top: 80,
                    padding_bottom: 80,
                    padding_x: 24,
                    gap: 32,
                }),
                background: None,
                layout: Some(Layout {
                    direction: Direction::Row,
                    justify: Justify::Between,
                    align: Align::Center,
                    ..Layout::default()
                }),
                animations: None,
            },
        ),
        template(
            "features-grid",
            "Features Grid",
            TemplateCategory::Content,
            SectionKind::Features,
            TemplateConfig {
                content: content(json!({
                    "subtitle": "Everything you need, nothing you don't.",
                    "cards": [
                        { "title": "Fast", "body": "Pages render in milliseconds." },
                        { "title": "Composable", "body": "Mix sections freely." },
                        { "title": "Yours", "body": "Export clean markup." }
                    ]
                })),
                spacing: None,
                background: None,
                layout: Some(grid_layout(3)),
                animations: None,
            },
        ),
        template(
            "benefits-list",
            "Benefits List",
            TemplateCategory::Content,
            SectionKind::Features,
            TemplateConfig {
                content: content(json!({
                    "benefits": [
                        { "title": "No lock-in" },
                        { "title": "Versioned edits" }
                    ]
                })),
                spacing: None,
                background: None,
                layout: None,
                animations: None,
            },
        ),
        template(
            "stats-band",
            "Stats Band",
            TemplateCategory::Content,
            SectionKind::Custom,
            TemplateConfig {
                content: content(json!({
                    "stats": [
                        { "value": "10k", "label": "pages built" },
                        { "value": "99.9%", "label": "uptime" },
                        { "value": "4.8", "label": "rating" },
                        { "value": "12ms", "label": "render time" }
                    ]
                })),
                spacing: None,
                background: Some(Background::solid("#f8fafc")),
                layout: None,
                animations: None,
            },
        ),
        template(
            "custom-markdown",
            "Markdown Block",
            TemplateCategory::Content,
            SectionKind::Custom,
            TemplateConfig {
                content: content(json!({ "markdown": "## Write anything\n\nPlain prose." })),
                spacing: None,
                background: None,
                layout: None,
                animations: None,
            },
        ),
        template(
            "testimonial-cards",
            "Testimonial Cards",
            TemplateCategory::Social,
            SectionKind::Testimonials,
            TemplateConfig {
                content: content(json!({
                    "items": [
                        { "quote": "Shipped our launch page in an afternoon.", "author": "Maya R." },
                        { "quote": "The editor stays out of the way.", "author": "Jonas K." }
                    ]
                })),
                spacing: None,
                background: None,
                layout: None,
                animations: None,
            },
        ),
        template(
            "team-members",
            "Team",
            TemplateCategory::Social,
            SectionKind::Custom,
            TemplateConfig {
                content: content(json!({
                    "members": [
                        { "name": "Alex", "role": "Design" },
                        { "name": "Sam", "role": "Engineering" },
                        { "name": "Noor", "role": "Support" }
                    ]
                })),
                spacing: None,
                background: None,
                layout: Some(grid_layout(3)),
                animations: None,
            },
        ),
        template(
            "logo-cloud",
            "Logo Cloud",
            TemplateCategory::Social,
            SectionKind::Custom,
            TemplateConfig {
                content: content(json!({
                    "logos": ["/media/logo-a.svg", "/media/logo-b.svg", "/media/logo-c.svg"]
                })),
                spacing: Some(Spacing {
                    padding_top: 32,
                    padding_bottom: 32,
                    padding_x: 24,
                    gap: 40,
                }),
                background: None,
                layout: None,
                animations: None,
            },
        ),
        template(
            "pricing-plans",
            "Pricing Plans",
            TemplateCategory::Commerce,
            SectionKind::Custom,
            TemplateConfig {
                content: content(json!({
                    "plans": [
                        { "name": "Starter", "price": "$0", "highlighted": false },
                        { "name": "Pro", "price": "$19", "highlighted": true },
                        { "name": "Team", "price": "$49", "highlighted": false }
                    ]
                })),
                spacing: None,
                background: None,
                layout: Some(grid_layout(3)),
                animations: None,
            },
        ),
        template(
            "gallery-grid",
            "Image Gallery",
            TemplateCategory::Media,
            SectionKind::Custom,
            TemplateConfig {
                content: content(json!({
                    "images": [
                        "/media/shot-1.png",
                        "/media/shot-2.png",
                        "/media/shot-3.png",
                        "/media/shot-4.png"
                    ],
                    "cols": 2
                })),
                spacing: None,
                background: None,
                layout: None,
                animations: None,
            },
        ),
        template(
            "video-embed",
            "Video",
            TemplateCategory::Media,
            SectionKind::Custom,
            TemplateConfig {
                content: content(json!({
                    "videoUrl": "https://video.example/intro.mp4",
                    "videoAspect": "16:9"
                })),
                spacing: None,
                background: Some(Background::solid("#000000")),
                layout: Some(centered_column()),
                animations: None,
            },
        ),
        template(
            "cta-banner",
            "CTA Banner",
            TemplateCategory::Cta,
            SectionKind::Cta,
            TemplateConfig {
                content: content(json!({
                    "subtitle": "Ready when you are.",
                    "cta": { "label": "Start building", "href": "#signup" }
                })),
                spacing: Some(Spacing {
                    padding_top: 64,
                    padding_bottom: 64,
                    padding_x: 24,
                    gap: 16,
                }),
                background: Some(Background::solid("#3366ff")),
                layout: Some(centered_column()),
                animations: None,
            },
        ),
        template(
            "footer-columns",
            "Footer",
            TemplateCategory::Footer,
            SectionKind::Container,
            TemplateConfig {
                content: content(json!({
                    "columns": [
                        { "title": "Product", "links": ["Features", "Pricing"] },
                        { "title": "Company", "links": ["About", "Contact"] }
                    ]
                })),
                spacing: Some(Spacing {
                    padding_top: 48,
                    padding_bottom: 24,
                    padding_x: 24,
                    gap: 32,
                }),
                background: Some(Background::solid("#0f172a")),
                layout: None,
                animations: None,
            },
        ),
    ])
}
