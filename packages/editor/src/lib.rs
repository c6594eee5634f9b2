//! # Blockpress Editor
//!
//! Document editing engine for the page builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ catalog: template → seeded section          │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: session + pure editing operations   │
//! │  - add/update/delete/duplicate/reorder      │
//! │  - copy/paste through the clipboard slot    │
//! │  - snapshot history with undo/redo          │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ compiler-css: document → stylesheet         │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Operations are pure**: each produces a new document; the session
//!    commits results to history
//! 2. **Stale references are no-ops**: editing an unknown section ID never
//!    errors, the surface self-heals on the next render
//! 3. **History is linear**: committing after an undo discards the redo
//!    branch, there is no redo tree

mod clipboard;
mod history;
pub mod ops;
mod session;

pub use clipboard::Clipboard;
pub use history::History;
pub use ops::SectionPatch;
pub use session::EditorSession;
