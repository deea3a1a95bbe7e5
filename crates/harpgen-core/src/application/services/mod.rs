//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a module" or "sync database exports".

pub mod database_service;
pub mod generate_service;
pub mod template_service;

pub use database_service::{DatabaseService, SyncReport};
pub use generate_service::{GenerateService, GenerationResult};
pub use template_service::{TemplateInfo, TemplateService};
