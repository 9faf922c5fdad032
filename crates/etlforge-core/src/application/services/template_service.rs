//! Template Service - template store queries.
//!
//! Separated from ScaffoldService for single responsibility; the CLI `list`
//! command is its only production caller.

use crate::{
    application::ports::TemplateStore,
    domain::TemplateId,
    error::ForgeResult,
};

/// Service for template store operations.
pub struct TemplateService {
    store: Box<dyn TemplateStore>,
}

impl TemplateService {
    /// Create a new template service.
    pub fn new(store: Box<dyn TemplateStore>) -> Self {
        Self { store }
    }

    /// Get a template's raw text by identifier.
    pub fn get(&self, id: TemplateId) -> ForgeResult<String> {
        self.store.get(id)
    }

    /// Add or replace a template.
    pub fn save(&self, id: TemplateId, text: String) -> ForgeResult<()> {
        self.store.insert(id, text)
    }

    /// List identifiers available in the store.
    pub fn list(&self) -> ForgeResult<Vec<TemplateId>> {
        self.store.list()
    }

    /// Identifiers the scaffolder needs that the store is missing.
    pub fn missing(&self) -> ForgeResult<Vec<TemplateId>> {
        let present = self.store.list()?;
        Ok(TemplateId::ALL
            .into_iter()
            .filter(|id| !present.contains(id))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockTemplateStore;

    #[test]
    fn missing_reports_absent_identifiers() {
        let mut store = MockTemplateStore::new();
        store
            .expect_list()
            .returning(|| Ok(vec![TemplateId::Routes, TemplateId::Etl]));

        let service = TemplateService::new(Box::new(store));
        let missing = service.missing().unwrap();
        assert_eq!(
            missing,
            vec![
                TemplateId::Extractor,
                TemplateId::Transform,
                TemplateId::Loader
            ]
        );
    }

    #[test]
    fn missing_is_empty_for_full_store() {
        let mut store = MockTemplateStore::new();
        store
            .expect_list()
            .returning(|| Ok(TemplateId::ALL.to_vec()));

        let service = TemplateService::new(Box::new(store));
        assert!(service.missing().unwrap().is_empty());
    }
}
