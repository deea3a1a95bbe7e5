//! Template Service - template catalogue queries.
//!
//! Separated from GenerateService for single responsibility.

use crate::{
    application::ports::{TemplateOrigin, TemplateStore},
    domain::TemplateId,
    error::HarpgenResult,
};

/// Information about a template for display purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateInfo {
    pub id: String,
    pub group: String,
    pub origin: TemplateOrigin,
    pub lines: usize,
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

    /// List all templates, optionally restricted to one group.
    pub fn list(&self, group: Option<&str>) -> HarpgenResult<Vec<TemplateInfo>> {
        Ok(self
            .store
            .list()?
            .into_iter()
            .filter(|t| group.is_none_or(|g| t.id.group() == g))
            .map(|t| TemplateInfo {
                group: t.id.group().to_string(),
                id: t.id.to_string(),
                origin: t.origin,
                lines: t.source.lines().count(),
            })
            .collect())
    }

    /// Raw source of one template.
    pub fn source(&self, id: &TemplateId) -> HarpgenResult<String> {
        Ok(self.store.get(id)?.source)
    }
}
