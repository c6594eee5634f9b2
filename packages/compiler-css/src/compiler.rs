use blockpress_model::{
    Align, AnimationKind, Direction, Document, Justify, LayoutKind, Section,
};
use tracing::{debug, info, instrument};

use crate::stylesheet::{CssRule, Keyframes, StyleSheet};
use crate::theme::Theme;

/// Device-preview mode driving the emitted container width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Viewport {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

impl Viewport {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "desktop" => Some(Self::Desktop),
            "tablet" => Some(Self::Tablet),
            "mobile" => Some(Self::Mobile),
            _ => None,
        }
    }

    pub fn container_width(self) -> &'static str {
        match self {
            Self::Desktop => "100%",
            Self::Tablet => "768px",
            Self::Mobile => "375px",
        }
    }
}

/// Grid-driving content keys, in emission order. `cap` limits the column
/// count; `None` means the array length is used exactly.
const GRID_KEYS: [(&str, Option<usize>); 6] = [
    ("cards", Some(3)),
    ("benefits", Some(3)),
    ("stats", None),
    ("columns", None),
    ("plans", Some(3)),
    ("members", Some(3)),
];

/// Style compiler - derives a scoped stylesheet from the current document.
///
/// Pure and deterministic: identical input yields byte-identical output,
/// and it is recomputed from scratch on every document change (no
/// incremental diffing; cost is proportional to section count).
pub struct StyleCompiler {
    theme: Theme,
    viewport: Viewport,
}

impl StyleCompiler {
    pub fn new(theme: Theme, viewport: Viewport) -> Self {
        Self { theme, viewport }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Derive the stylesheet for `doc`, one selector family per section in
    /// document order, preceded by the single viewport container rule.
    #[instrument(skip(self, doc), fields(sections = doc.len()))]
    pub fn compile(&self, doc: &Document) -> StyleSheet {
        info!("deriving stylesheet");

        let mut sheet = StyleSheet::new();

        let mut container = CssRule::new(".page-viewport");
        container.decl("width", self.viewport.container_width());
        container.decl("margin", "0 auto");
        sheet.add_rule(container);

        let mut used_animations: Vec<AnimationKind> = Vec::new();
        for section in doc.sections() {
            debug!(section = %section.id, kind = ?section.kind, "compiling section styles");
            self.compile_section(section, &mut sheet);

            if let Some(animations) = &section.animations {
                if animations.enabled
                    && animations.kind != AnimationKind::None
                    && !used_animations.contains(&animations.kind)
                {
                    used_animations.push(animations.kind);
                }
            }
        }

        // Shared keyframes, one block per kind actually used, fixed order
        for kind in [
            AnimationKind::Fade,
            AnimationKind::Slide,
            AnimationKind::Scale,
            AnimationKind::Rotate,
        ] {
            if used_animations.contains(&kind) {
                sheet.add_keyframes(keyframes_for(kind));
            }
        }

        info!(rules = sheet.rules.len(), "stylesheet derivation complete");
        sheet
    }

    fn compile_section(&self, section: &Section, sheet: &mut StyleSheet) {
        let scope = format!(".section-{}", section.id);
        sheet.add_rule(self.base_rule(section, &scope));

        for (key, cap) in GRID_KEYS {
            if let Some(len) = section.content_array_len(key) {
                if len == 0 {
                    continue;
                }
                let cols = cap.map_or(len, |cap| len.min(cap));
                sheet.add_rule(grid_rule(
                    format!("{} .{}", scope, key),
                    cols,
                    section.spacing.gap,
                ));
                if key == "plans" {
                    self.plan_rules(&scope, sheet);
                }
            }
        }

        if let Some(len) = section.content_array_len("images") {
            if len > 0 {
                let cols = section
                    .content
                    .get("cols")
                    .and_then(serde_json::Value::as_u64)
                    .map(|c| c as usize)
                    .unwrap_or(3);
                sheet.add_rule(grid_rule(
                    format!("{} .images", scope),
                    cols,
                    section.spacing.gap,
                ));
            }
        }

        if section.content_str("videoUrl").is_some() {
            let aspect = match section.content_str("videoAspect") {
                Some("4:3") => "4 / 3",
                Some("1:1") => "1 / 1",
                _ => "16 / 9",
            };
            let mut video = CssRule::new(format!("{} .video-frame", scope));
            video.decl("aspect-ratio", aspect);
            video.decl("width", "100%");
            sheet.add_rule(video);
        }

        // Button contrast against the active theme: white text when the
        // section background is the primary color, primary-colored text
        // otherwise.
        let mut button = CssRule::new(format!("{} .btn", scope));
        if self.theme.is_primary(&section.background.color) {
            button.decl("color", "#ffffff");
        } else {
            button.decl("color", self.theme.primary.clone());
        }
        sheet.add_rule(button);
    }

    fn base_rule(&self, section: &Section, scope: &str) -> CssRule {
        let mut rule = CssRule::new(scope);

        let spacing = &section.spacing;
        rule.decl(
            "padding",
            format!(
                "{}px {}px {}px {}px",
                spacing.padding_top, spacing.padding_x, spacing.padding_bottom, spacing.padding_x
            ),
        );

        let background = &section.background;
        if let Some(image) = &background.image {
            let mut layers: Vec<String> = Vec::new();
            if let Some(overlay) = &background.overlay {
                layers.push(overlay.clone());
            }
            if let Some(gradient) = &background.gradient {
                layers.push(gradient.clone());
            }
            layers.push(format!("url({})", image));
            rule.decl("background-image", layers.join(", "));
            rule.decl("background-size", "cover");
            rule.decl("background-position", "center");
            rule.decl("background-repeat", "no-repeat");
            rule.decl("background-color", background.color.clone());
        } else if let Some(gradient) = &background.gradient {
            rule.decl("background", gradient.clone());
        } else {
            rule.decl("background", background.color.clone());
        }

        if let Some(color) = &section.text_color {
            rule.decl("color", color.clone());
        }
        if let Some(radius) = section.border_radius {
            if radius > 0 {
                rule.decl("border-radius", format!("{}px", radius));
            }
        }
        if let Some(width) = section.border_width {
            if width > 0 {
                let color = section
                    .border_color
                    .as_deref()
                    .unwrap_or(&self.theme.border);
                rule.decl("border", format!("{}px solid {}", width, color));
            }
        }
        if let Some(shadow) = &section.box_shadow {
            rule.decl("box-shadow", shadow.clone());
        }

        if let Some(layout) = &section.layout {
            match layout.kind {
                LayoutKind::Flex => {
                    rule.decl("display", "flex");
                    rule.decl("flex-direction", direction_value(layout.direction));
                    rule.decl("justify-content", justify_value(layout.justify));
                    rule.decl("align-items", align_value(layout.align));
                    if layout.wrap {
                        rule.decl("flex-wrap", "wrap");
                    }
                }
                LayoutKind::Grid => {
                    rule.decl("display", "grid");
                    if let Some(cols) = layout.grid_cols {
                        rule.decl(
                            "grid-template-columns",
                            format!("repeat({}, minmax(0, 1fr))", cols),
                        );
                    }
                    if let Some(rows) = layout.grid_rows {
                        rule.decl("grid-template-rows", format!("repeat({}, auto)", rows));
                    }
                }
                LayoutKind::Stack => {
                    rule.decl("display", "flex");
                    rule.decl("flex-direction", "column");
                }
            }
            rule.decl("gap", format!("{}px", layout.gap));
        }

        if let Some(animations) = &section.animations {
            if animations.enabled && animations.kind != AnimationKind::None {
                rule.decl(
                    "animation",
                    format!(
                        "{} {}ms ease {}ms both",
                        animation_name(animations.kind),
                        animations.duration,
                        animations.delay
                    ),
                );
            }
        }

        rule
    }

    fn plan_rules(&self, scope: &str, sheet: &mut StyleSheet) {
        let mut plan = CssRule::new(format!("{} .plan", scope));
        plan.decl("border-color", self.theme.border.clone());
        sheet.add_rule(plan);

        let mut highlighted = CssRule::new(format!("{} .plan--highlighted", scope));
        highlighted.decl("border-color", self.theme.primary.clone());
        sheet.add_rule(highlighted);
    }
}

fn grid_rule(selector: String, cols: usize, gap: u32) -> CssRule {
    let mut rule = CssRule::new(selector);
    rule.decl("display", "grid");
    rule.decl(
        "grid-template-columns",
        format!("repeat({}, minmax(0, 1fr))", cols),
    );
    rule.decl("gap", format!("{}px", gap));
    rule
}

fn direction_value(direction: Direction) -> &'static str {
    match direction {
        Direction::Row => "row",
        Direction::Column => "column",
    }
}

fn justify_value(justify: Justify) -> &'static str {
    match justify {
        Justify::Start => "flex-start",
        Justify::Center => "center",
        Justify::End => "flex-end",
        Justify::Between => "space-between",
        Justify::Around => "space-around",
    }
}

fn align_value(align: Align) -> &'static str {
    match align {
        Align::Start => "flex-start",
        Align::Center => "center",
        Align::End => "flex-end",
        Align::Stretch => "stretch",
    }
}

fn animation_name(kind: AnimationKind) -> &'static str {
    match kind {
        AnimationKind::Fade => "bp-fade",
        AnimationKind::Slide => "bp-slide",
        AnimationKind::Scale => "bp-scale",
        AnimationKind::Rotate => "bp-rotate",
        AnimationKind::None => "none",
    }
}

fn keyframes_for(kind: AnimationKind) -> Keyframes {
    let (from, to): (Vec<(&str, &str)>, Vec<(&str, &str)>) = match kind {
        AnimationKind::Fade => (vec![("opacity", "0")], vec![("opacity", "1")]),
        AnimationKind::Slide => (
            vec![("opacity", "0"), ("transform", "translateY(24px)")],
            vec![("opacity", "1"), ("transform", "translateY(0)")],
        ),
        AnimationKind::Scale => (
            vec![("opacity", "0"), ("transform", "scale(0.95)")],
            vec![("opacity", "1"), ("transform", "scale(1)")],
        ),
        AnimationKind::Rotate => (
            vec![("opacity", "0"), ("transform", "rotate(-4deg)")],
            vec![("opacity", "1"), ("transform", "rotate(0)")],
        ),
        AnimationKind::None => (vec![], vec![]),
    };

    let own = |pairs: Vec<(&str, &str)>| {
        pairs
            .into_iter()
            .map(|(p, v)| (p.to_string(), v.to_string()))
            .collect::<Vec<_>>()
    };

    Keyframes {
        name: animation_name(kind).to_string(),
        frames: vec![("from".to_string(), own(from)), ("to".to_string(), own(to))],
    }
}
