//! Application layer errors.
//!
//! These errors represent failures in orchestration, not request validation.
//! Request errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while executing a plan.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No template with this id in the store.
    #[error("Template not found: {id}")]
    TemplateNotFound { id: String },

    /// Template rendering failed.
    #[error("Failed to render template '{id}': {reason}")]
    RenderingFailed { id: String, reason: String },

    /// A template override could not be loaded.
    #[error("Invalid template at {path}: {reason}")]
    TemplateLoad { path: PathBuf, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A file the use case reads does not exist.
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Store access failed (lock poisoned, etc.).
    #[error("Template store error")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { id } => vec![
                format!("No built-in or override template named '{}'", id),
                "Run 'harpgen list' to see available templates".into(),
                format!("Or add '{}.txt' to your templates directory", id),
            ],
            Self::RenderingFailed { id, .. } => vec![
                format!("Check the syntax of template '{}'", id),
                "Undefined variables are errors; see 'harpgen list' for each template's inputs"
                    .into(),
            ],
            Self::TemplateLoad { path, .. } => vec![
                format!("Fix or remove {}", path.display()),
                "Template files must be UTF-8 and named <id>.txt".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::FileNotFound { path } => vec![
                format!("Expected a file at {}", path.display()),
                "Run harpgen from the project root or pass --root".into(),
            ],
            Self::StoreLockError => vec![
                "The template store is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. }
            | Self::RenderingFailed { .. }
            | Self::TemplateLoad { .. } => ErrorCategory::Template,
            Self::FilesystemError { .. } => ErrorCategory::Filesystem,
            Self::FileNotFound { .. } => ErrorCategory::NotFound,
            Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
