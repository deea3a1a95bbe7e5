//! Database Service - ORM schema driven helpers.
//!
//! - `sync_exports`: regenerate `app/database/index.ts` from the schema models
//! - `id_type`: TypeScript type of a model's `@id` field

use std::path::PathBuf;
use tracing::{info, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{ProjectRoot, schema},
    error::HarpgenResult,
};

/// Schema the export file is generated from.
pub const EXPORTS_SCHEMA_PATH: &str = "app/database/schema.prisma";
/// Generated export file.
pub const EXPORTS_FILE_PATH: &str = "app/database/index.ts";
/// Schema consulted for id types.
pub const ID_SCHEMA_PATH: &str = "prisma/schema.prisma";
/// Id type used when the schema or model is missing.
pub const DEFAULT_ID_TYPE: &str = "number";

/// Outcome of `sync_exports`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub models: Vec<String>,
    pub path: PathBuf,
}

pub struct DatabaseService {
    filesystem: Box<dyn Filesystem>,
}

impl DatabaseService {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Rewrite the export file with one destructured delegate per model.
    #[instrument(skip_all, fields(root = %root))]
    pub fn sync_exports(&self, root: &ProjectRoot) -> HarpgenResult<SyncReport> {
        let schema_text = self.read_required(root, EXPORTS_SCHEMA_PATH)?;
        let models = schema::detect_models(&schema_text);

        let path = root.as_path().join(EXPORTS_FILE_PATH);
        if let Some(parent) = path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem
            .write_file(&path, &schema::exports_file(&models))?;

        info!(models = models.len(), "Export file updated");
        Ok(SyncReport { models, path })
    }

    /// TypeScript type of `model`'s `@id` field.
    #[instrument(skip_all, fields(root = %root, model = model))]
    pub fn id_type(&self, root: &ProjectRoot, model: &str) -> HarpgenResult<String> {
        let schema_text = self.read_required(root, ID_SCHEMA_PATH)?;
        Ok(schema::id_type(&schema_text, model)?)
    }

    fn read_required(&self, root: &ProjectRoot, relative: &str) -> HarpgenResult<String> {
        let path = root.as_path().join(relative);
        if !self.filesystem.exists(&path) {
            return Err(ApplicationError::FileNotFound { path }.into());
        }
        self.filesystem.read_to_string(&path)
    }
}
