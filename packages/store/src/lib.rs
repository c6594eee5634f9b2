//! # Blockpress Store
//!
//! Persistence collaborator for the editing core: the narrow
//! [`DocumentStore`] contract, a file-backed and an in-memory
//! implementation, and the auto-save debounce timer.
//!
//! The editing core owns the shape of the section payload; the store
//! carries it (plus the metadata object) through save/load without
//! examining it.

mod autosave;
mod file_store;
mod memory_store;
mod store;

pub use autosave::Autosave;
pub use file_store::FileStore;
pub use memory_store::MemoryStore;
pub use store::{DocumentStore, PersistedPage, SaveReceipt, StoreError};
