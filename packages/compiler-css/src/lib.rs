//! # Blockpress CSS Compiler
//!
//! Derives a scoped stylesheet from the current page document. Pure and
//! idempotent: recomputed on every document change, byte-identical output
//! for identical input.

mod compiler;
mod stylesheet;
mod theme;

pub use compiler::{StyleCompiler, Viewport};
pub use stylesheet::{CssRule, Keyframes, StyleSheet};
pub use theme::Theme;

use blockpress_model::Document;

/// Compile a page document to CSS with the default theme.
pub fn compile_to_css(document: &Document, viewport: Viewport) -> String {
    let compiler = StyleCompiler::new(Theme::default(), viewport);
    compiler.compile(document).to_css()
}

/// Compile with a specific theme (for themed pages).
pub fn compile_to_css_with_theme(
    document: &Document,
    viewport: Viewport,
    theme: Theme,
) -> String {
    let compiler = StyleCompiler::new(theme, viewport);
    compiler.compile(document).to_css()
}
