pub mod common;
pub mod output_plan;
pub mod render_context;
pub mod request;
pub mod template_id;

pub use crate::domain::DomainError;
pub use common::{ProjectRoot, RelativePath};
pub use output_plan::{ContentSource, OutputPlan, PlannedFile};
pub use render_context::RenderContext;
pub use request::{
    DEFAULT_IDENTIFIER_FIELD, DEFAULT_SESSION_MODEL, GenerationRequest, RequestBuilder,
};
pub use template_id::TemplateId;
