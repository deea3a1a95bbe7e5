// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for harpgen.
//!
//! Pure generation logic: naming, request validation, output planning and
//! schema inspection. All I/O and template rendering go through ports
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or environment reads
//! - **Few crates**: std + thiserror + regex + serde derives
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod naming;
pub mod planner;
pub mod schema;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    ContentSource, DEFAULT_IDENTIFIER_FIELD, DEFAULT_SESSION_MODEL, GenerationRequest, OutputPlan,
    PlannedFile, ProjectRoot, RelativePath, RenderContext, RequestBuilder, TemplateId,
};

pub use error::{DomainError, ErrorCategory};
pub use naming::NameForms;
pub use planner::{module_dir, plan};
pub use value_objects::{FileNaming, GenerateKind, Mode};

pub use validation::DomainValidator;
