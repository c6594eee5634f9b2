//! # Blockpress Model
//!
//! Core data model for the page builder: the typed section vocabulary, the
//! ordered document they form, page metadata, and section ID generation.
//!
//! The model deliberately contains no editing logic; operations live in
//! `blockpress-editor` and produce new documents, and the style compiler in
//! `blockpress-compiler-css` is a pure consumer of these types.

mod document;
mod id_generator;
mod metadata;
mod section;

pub use document::Document;
pub use id_generator::{get_page_id, IdGenerator};
pub use metadata::{PageMetadata, SeoMetadata};
pub use section::{
    Align, AnimationKind, AnimationTrigger, Animations, Background, Content, Direction, Justify,
    Layout, LayoutKind, Section, SectionKind, Spacing,
};
