//! # Blockpress Catalog
//!
//! Static, read-only registry of section templates. Consulted only by the
//! "add section" and "load template page" operations to seed initial
//! section values; no side effects, no runtime mutation.

mod builtin;
mod catalog;
mod template;

pub use builtin::builtin;
pub use catalog::Catalog;
pub use template::{Template, TemplateCategory, TemplateConfig};
