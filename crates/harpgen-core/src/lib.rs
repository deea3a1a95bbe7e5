//! harpgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the harpgen
//! code generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           harpgen-cli (CLI)             │
//! │     (Calls the application services)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (Generate, Database, Template)         │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: Store, Filesystem, Render)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    harpgen-adapters (Infrastructure)    │
//! │ (InMemoryStore, LocalFilesystem, Jinja) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (GenerationRequest, OutputPlan, naming) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use harpgen_core::prelude::*;
//!
//! // 1. Describe the request
//! let request = GenerationRequest::builder()
//!     .kind(GenerateKind::Module)
//!     .name("billing/invoice")
//!     .mode(Mode::Fullstack)
//!     .build()?;
//!
//! // 2. Use application service (with injected adapters)
//! let service = GenerateService::new(store, renderer, filesystem);
//! let result = service.generate(&request, &ProjectRoot::try_new(cwd)?)?;
//! println!("{}", result.message());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, DatabaseService, GenerateService, GenerationResult, StoredTemplate,
        TemplateInfo, TemplateOrigin, TemplateService,
        ports::{Filesystem, TemplateRenderer, TemplateStore},
    };
    pub use crate::domain::{
        ContentSource, DomainError, FileNaming, GenerateKind, GenerationRequest, Mode, NameForms,
        OutputPlan, PlannedFile, ProjectRoot, RelativePath, RenderContext, TemplateId,
    };
    pub use crate::error::{ErrorCategory, HarpgenError, HarpgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
