//! Template Service - template catalogue queries.
//!
//! Separated from ScaffoldService for single responsibility.

use serde::Serialize;

use crate::{
    application::ports::TemplateStore,
    domain::{Template, TemplateId},
    error::RunnerResult,
};

/// Information about a template for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub id: String,
    pub description: String,
    pub path_style: String,
    pub files: usize,
}

impl From<&Template> for TemplateInfo {
    fn from(t: &Template) -> Self {
        Self {
            id: t.metadata.id.to_string(),
            description: t.metadata.description.clone(),
            path_style: t.metadata.path_style.to_string(),
            files: t.files.len(),
        }
    }
}

/// Service for template operations.
pub struct TemplateService {
    store: Box<dyn TemplateStore>,
}

impl TemplateService {
    /// Create a new template service.
    pub fn new(store: Box<dyn TemplateStore>) -> Self {
        Self { store }
    }

    /// Get a template by ID.
    pub fn get(&self, id: &TemplateId) -> RunnerResult<Template> {
        self.store.get(id)
    }

    /// List all templates.
    pub fn list(&self) -> RunnerResult<Vec<TemplateInfo>> {
        Ok(self.store.list()?.iter().map(TemplateInfo::from).collect())
    }
}
