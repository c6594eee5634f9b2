use blockpress_model::{PageMetadata, Section};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Wire payload for one persisted page: the section array plus the page
/// metadata object. Metadata passes through the store unexamined.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedPage {
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub metadata: PageMetadata,
}

impl PersistedPage {
    pub fn new(sections: Vec<Section>, metadata: PageMetadata) -> Self {
        Self { sections, metadata }
    }
}

/// Result of a successful save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveReceipt {
    /// The page ID, minted on create, echoed back on update.
    pub id: String,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("page not found: {0}")]
    PageNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Narrow persistence contract the editing core saves and loads through.
///
/// A failed call leaves the caller's in-memory document and history
/// untouched; the caller surfaces the error as a non-fatal notification and
/// may retry. Concurrent saves of the same page from different sessions are
/// not reconciled: last write wins.
pub trait DocumentStore {
    fn load(&mut self, page_id: &str) -> Result<PersistedPage, StoreError>;

    /// Save a page. `None` creates a new page and mints its ID from the
    /// metadata slug.
    fn save(
        &mut self,
        page_id: Option<&str>,
        page: &PersistedPage,
    ) -> Result<SaveReceipt, StoreError>;

    fn delete(&mut self, page_id: &str) -> Result<(), StoreError>;
}
