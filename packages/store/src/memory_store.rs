use std::collections::HashMap;

use blockpress_model::get_page_id;

use crate::store::{DocumentStore, PersistedPage, SaveReceipt, StoreError};

/// In-memory page store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pages: HashMap<String, PersistedPage>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl DocumentStore for MemoryStore {
    fn load(&mut self, page_id: &str) -> Result<PersistedPage, StoreError> {
        self.pages
            .get(page_id)
            .cloned()
            .ok_or_else(|| StoreError::PageNotFound(page_id.to_string()))
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
        self.pages.insert(id.clone(), page.clone());
        Ok(SaveReceipt { id })
    }

    fn delete(&mut self, page_id: &str) -> Result<(), StoreError> {
        self.pages
            .remove(page_id)
            .map(|_| ())
            .ok_or_else(|| StoreError::PageNotFound(page_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockpress_model::PageMetadata;

    #[test]
    fn create_mints_id_from_slug() {
        let mut store = MemoryStore::new();
        let page = PersistedPage::new(vec![], PageMetadata::with_slug("pricing"));

        let receipt = store.save(None, &page).unwrap();
        assert_eq!(receipt.id, get_page_id("pricing"));
        assert_eq!(store.load(&receipt.id).unwrap(), page);
    }

    #[test]
    fn last_write_wins() {
        let mut store = MemoryStore::new();
        let first = PersistedPage::new(vec![], PageMetadata::with_slug("home"));
        let mut second = first.clone();
        second.metadata.title = Some("Other session".to_string());

        store.save(Some("home"), &first).unwrap();
        store.save(Some("home"), &second).unwrap();
        assert_eq!(store.load("home").unwrap(), second);
        assert_eq!(store.len(), 1);
    }
}
