//! In-memory template store with built-in templates.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use harpgen_core::{
    application::{ApplicationError, ports::TemplateStore},
    application::{StoredTemplate, TemplateOrigin},
    domain::TemplateId,
    error::HarpgenResult,
};
use tracing::{debug, info};

use crate::{builtin_templates, template_loader};

/// Thread-safe in-memory template store.
///
/// Built-ins are loaded first; overrides loaded afterwards replace them by id.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    inner: Arc<RwLock<HashMap<TemplateId, StoredTemplate>>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a store with built-in templates loaded.
    pub fn with_builtin() -> HarpgenResult<Self> {
        let store = Self::new();
        store.load_builtin()?;
        Ok(store)
    }

    /// Load built-in templates.
    pub fn load_builtin(&self) -> HarpgenResult<()> {
        for template in builtin_templates::all_templates()? {
            self.insert(template)?;
        }
        Ok(())
    }

    /// Built-ins plus overrides from `dirs`, given in priority order,
    /// highest first (see [`builtin_templates::candidate_paths`]).
    pub fn with_overrides(dirs: &[PathBuf]) -> HarpgenResult<Self> {
        let store = Self::with_builtin()?;
        for dir in dirs.iter().rev() {
            store.load_overrides(dir)?;
        }
        Ok(store)
    }

    /// Load `<id>.txt` overrides from `dir`, replacing built-ins with the same id.
    ///
    /// Returns the number of templates loaded. A missing directory loads nothing.
    pub fn load_overrides(&self, dir: &Path) -> HarpgenResult<usize> {
        let templates = template_loader::load_dir(dir)?;
        let count = templates.len();
        for template in templates {
            debug!(id = %template.id, "override template");
            self.insert(template)?;
        }
        if count > 0 {
            info!(count, dir = %dir.display(), "loaded template overrides");
        }
        Ok(count)
    }

    /// Get the number of templates.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateStore for InMemoryStore {
    fn get(&self, id: &TemplateId) -> HarpgenResult<StoredTemplate> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.get(id).cloned().ok_or_else(|| {
            ApplicationError::TemplateNotFound { id: id.to_string() }.into()
        })
    }

    fn list(&self) -> HarpgenResult<Vec<StoredTemplate>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let mut templates: Vec<_> = inner.values().cloned().collect();
        templates.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(templates)
    }

    fn insert(&self, template: StoredTemplate) -> HarpgenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.insert(template.id.clone(), template);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use harpgen_core::error::HarpgenError;

    fn id(raw: &str) -> TemplateId {
        TemplateId::parse(raw).unwrap()
    }

    #[test]
    fn builtin_store_has_every_planned_template() {
        let store = InMemoryStore::with_builtin().unwrap();
        for raw in [
            "module-index",
            "controller/api/store",
            "controller/fullstack/edit",
            "controller/api/generic",
            "service/create",
            "repository/destroy",
            "validation/example",
            "routes/fullstack",
            "pages/list",
            "auth/session/middleware",
            "auth/session/validations/check-password",
            "observer",
        ] {
            let template = store.get(&id(raw)).unwrap();
            assert_eq!(template.origin, TemplateOrigin::Builtin, "{raw}");
        }
    }

    #[test]
    fn higher_priority_override_wins() {
        let high = tempfile::TempDir::new().unwrap();
        let low = tempfile::TempDir::new().unwrap();
        std::fs::write(high.path().join("seed.txt"), "high").unwrap();
        std::fs::write(low.path().join("seed.txt"), "low").unwrap();
        std::fs::write(low.path().join("task.txt"), "low task").unwrap();

        let store = InMemoryStore::with_overrides(&[
            high.path().to_path_buf(),
            low.path().to_path_buf(),
        ])
        .unwrap();

        let seed = store.get(&id("seed")).unwrap();
        assert_eq!(seed.source, "high");
        assert_eq!(seed.origin, TemplateOrigin::Override);
        assert_eq!(store.get(&id("task")).unwrap().source, "low task");
        assert_eq!(
            store.get(&id("factory")).unwrap().origin,
            TemplateOrigin::Builtin
        );
    }

    #[test]
    fn missing_template_is_not_found() {
        let err = InMemoryStore::new().get(&id("nope")).unwrap_err();
        assert!(matches!(
            err,
            HarpgenError::Application(ApplicationError::TemplateNotFound { .. })
        ));
    }

    #[test]
    fn list_is_sorted_and_insert_replaces() {
        let store = InMemoryStore::new();
        for raw in ["task", "factory", "seed"] {
            store
                .insert(StoredTemplate {
                    id: id(raw),
                    source: raw.into(),
                    origin: TemplateOrigin::Builtin,
                })
                .unwrap();
        }
        store
            .insert(StoredTemplate {
                id: id("seed"),
                source: "custom".into(),
                origin: TemplateOrigin::Override,
            })
            .unwrap();

        let ids: Vec<_> = store
            .list()
            .unwrap()
            .into_iter()
            .map(|t| t.id.to_string())
            .collect();
        assert_eq!(ids, ["factory", "seed", "task"]);
        assert_eq!(store.get(&id("seed")).unwrap().source, "custom");
        assert_eq!(store.len(), 3);
    }
}
