use std::path::{Path, PathBuf};

use blockpress_model::get_page_id;
use tracing::{debug, info, warn};

use crate::store::{DocumentStore, PersistedPage, SaveReceipt, StoreError};

/// File-backed page store: one pretty-printed `{id}.page.json` per page
/// under a root directory.
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn page_path(&self, page_id: &str) -> PathBuf {
        self.root.join(format!("{}.page.json", page_id))
    }
}

impl DocumentStore for FileStore {
    fn load(&mut self, page_id: &str) -> Result<PersistedPage, StoreError> {
        let path = self.page_path(page_id);
        debug!(page_id, path = %path.display(), "loading page");

        let source = match std::fs::read_to_string(&path) {
            Ok(source) => source,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                warn!(page_id, "page file missing");
                return Err(StoreError::PageNotFound(page_id.to_string()));
            }
            Err(err) => return Err(err.into()),
        };

        Ok(serde_json::from_str(&source)?)
    }

    fn save(
        &mut self,
        page_id: Option<&str>,
        page: &PersistedPage,
    ) -> Result<SaveReceipt, StoreError> {
        let id = match page_id {
            Some(id) => id.to_string(),
            None => get_page_id(page.metadata.slug_or_default()),
        };

        std::fs::create_dir_all(&self.root)?;
        let path = self.page_path(&id);
        let body = serde_json::to_string_pretty(page)?;
        std::fs::write(&path, body)?;

        info!(page_id = %id, sections = page.sections.len(), "page saved");
        Ok(SaveReceipt { id })
    }

    fn delete(&mut self, page_id: &str) -> Result<(), StoreError> {
        let path = self.page_path(page_id);
        match std::fs::remove_file(&path) {
            Ok(()) => {
                info!(page_id, "page deleted");
                Ok(())
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(StoreError::PageNotFound(page_id.to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }
}
