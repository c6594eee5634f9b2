use serde::{Deserialize, Serialize};

/// Design tokens the compiler resolves against: the active theme's primary
/// color (drives the button contrast rule) and the border token used when a
/// section sets a border width without a color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub primary: String,
    pub border: String,
}

impl Theme {
    /// True when `color` is the theme's primary color. Hex comparison is
    /// case-insensitive; anything else compares verbatim.
    pub fn is_primary(&self, color: &str) -> bool {
        self.primary.eq_ignore_ascii_case(color)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: "#3366ff".to_string(),
            border: "#e2e8f0".to_string(),
        }
    }
}
