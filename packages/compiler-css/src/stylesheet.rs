/// CSS rule with selector and ordered declarations.
///
/// Declarations are a `Vec`, not a map: the compiler must produce
/// byte-identical output for identical input, so emission order is part of
/// the contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssRule {
    pub selector: String,
    pub declarations: Vec<(String, String)>,
}

impl CssRule {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declarations: Vec::new(),
        }
    }

    pub fn decl(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.declarations.push((property.into(), value.into()));
    }
}

/// A named `@keyframes` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyframes {
    pub name: String,
    /// (offset selector, declarations), e.g. `("from", [("opacity", "0")])`
    pub frames: Vec<(String, Vec<(String, String)>)>,
}

/// Stylesheet document - ordered collection of rules plus keyframes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSheet {
    pub rules: Vec<CssRule>,
    pub keyframes: Vec<Keyframes>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_rule(&mut self, rule: CssRule) {
        // Rules with nothing to say are dropped rather than emitted empty
        if !rule.declarations.is_empty() {
            self.rules.push(rule);
        }
    }

    pub fn add_keyframes(&mut self, keyframes: Keyframes) {
        self.keyframes.push(keyframes);
    }

    /// Convert to CSS text
    pub fn to_css(&self) -> String {
        let mut css = String::new();

        for rule in &self.rules {
            css.push_str(&rule.selector);
            css.push_str(" {\n");

            for (property, value) in &rule.declarations {
                css.push_str("  ");
                css.push_str(property);
                css.push_str(": ");
                css.push_str(value);
                css.push_str(";\n");
            }

            css.push_str("}\n\n");
        }

        for keyframes in &self.keyframes {
            css.push_str("@keyframes ");
            css.push_str(&keyframes.name);
            css.push_str(" {\n");

            for (offset, declarations) in &keyframes.frames {
                css.push_str("  ");
                css.push_str(offset);
                css.push_str(" {\n");
                for (property, value) in declarations {
                    css.push_str("    ");
                    css.push_str(property);
                    css.push_str(": ");
                    css.push_str(value);
                    css.push_str(";\n");
                }
                css.push_str("  }\n");
            }

            css.push_str("}\n\n");
        }

        css
    }
}
