//! In-memory template store with built-in templates.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use etlforge_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::TemplateId,
    error::ForgeResult,
};

use crate::builtin_templates;

/// Thread-safe in-memory template store.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<RwLock<HashMap<TemplateId, String>>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store preloaded with the built-in templates.
    pub fn with_builtin() -> ForgeResult<Self> {
        let store = Self::new();
        for (id, text) in builtin_templates::all_templates() {
            store.insert(id, text.to_string())?;
        }
        Ok(store)
    }

    /// Get the number of templates.
    pub fn len(&self) -> usize {
        self.inner.read().map(|m| m.len()).unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all templates.
    pub fn clear(&self) -> ForgeResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.clear();
        Ok(())
    }
}

impl TemplateStore for InMemoryStore {
    fn get(&self, id: TemplateId) -> ForgeResult<String> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner
            .get(&id)
            .cloned()
            .ok_or_else(|| ApplicationError::TemplateNotFound { id }.into())
    }

    fn list(&self) -> ForgeResult<Vec<TemplateId>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        // Stable order regardless of map iteration order.
        Ok(TemplateId::ALL
            .into_iter()
            .filter(|id| inner.contains_key(id))
            .collect())
    }

    fn insert(&self, id: TemplateId, text: String) -> ForgeResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.insert(id, text);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use etlforge_core::error::ForgeError;

    #[test]
    fn with_builtin_holds_all_five_templates() {
        let store = InMemoryStore::with_builtin().unwrap();
        assert_eq!(store.len(), 5);
        assert_eq!(store.list().unwrap(), TemplateId::ALL.to_vec());
    }

    #[test]
    fn get_missing_is_template_not_found() {
        let store = InMemoryStore::new();
        let err = store.get(TemplateId::Routes).unwrap_err();
        match err {
            ForgeError::Application(ApplicationError::TemplateNotFound { id }) => {
                assert_eq!(id, TemplateId::Routes);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn insert_replaces_existing_text() {
        let store = InMemoryStore::new();
        store.insert(TemplateId::Etl, "one".into()).unwrap();
        store.insert(TemplateId::Etl, "two".into()).unwrap();
        assert_eq!(store.get(TemplateId::Etl).unwrap(), "two");
        assert_eq!(store.len(), 1);
    }
}
