//! Application layer for harpgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerateService, DatabaseService, TemplateService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! naming or layout rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    DatabaseService, GenerateService, GenerationResult, SyncReport, TemplateInfo,
    TemplateService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, StoredTemplate, TemplateOrigin, TemplateRenderer, TemplateStore};

pub use error::ApplicationError;
