//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `harpgen-adapters` crate provides implementations.

use std::fmt;
use std::path::Path;

use crate::domain::{RenderContext, TemplateId};
use crate::error::HarpgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `harpgen_adapters::filesystem::LocalFilesystem` (production)
/// - `harpgen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Paths are absolute; the service resolves them under the project root.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Idempotent.
    fn create_dir_all(&self, path: &Path) -> HarpgenResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> HarpgenResult<()>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> HarpgenResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Where a stored template came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateOrigin {
    /// Embedded in the binary.
    Builtin,
    /// Loaded from a templates directory, shadowing any built-in.
    Override,
}

impl fmt::Display for TemplateOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Builtin => "builtin",
            Self::Override => "override",
        })
    }
}

/// A template source held by a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredTemplate {
    pub id: TemplateId,
    pub source: String,
    pub origin: TemplateOrigin,
}

/// Port for template storage and retrieval.
///
/// Implemented by:
/// - `harpgen_adapters::template_store::InMemoryStore` (built-ins + overrides)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Get a template source by id.
    fn get(&self, id: &TemplateId) -> HarpgenResult<StoredTemplate>;

    /// List all available templates, sorted by id.
    fn list(&self) -> HarpgenResult<Vec<StoredTemplate>>;

    /// Insert or replace a template.
    fn insert(&self, template: StoredTemplate) -> HarpgenResult<()>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `harpgen_adapters::renderer::MiniJinjaRenderer`
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render `source` (the template registered as `id`) with `context`.
    fn render(&self, id: &TemplateId, source: &str, context: &RenderContext)
    -> HarpgenResult<String>;
}
