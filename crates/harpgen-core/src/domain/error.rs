// ============================================================================
// domain/error.rs - GENERATION REQUEST ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Everything here is raised by pure planning code, before any file is
/// touched. All errors are:
/// - Cloneable (cheap to carry across layers)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Invalid Request Errors (400-level equivalent)
    // ========================================================================
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name '{raw}' does not contain a usable leaf segment")]
    EmptyLeafName { raw: String },

    #[error("Unknown generation kind: {0}")]
    UnknownKind(String),

    #[error("Unknown mode '{0}' (expected 'api' or 'fullstack')")]
    UnknownMode(String),

    #[error("Unknown file naming convention '{0}' (expected 'kebab' or 'pascal')")]
    UnknownNaming(String),

    #[error("A module name is required to generate a {kind}")]
    MissingModuleName { kind: String },

    #[error("Path traversal rejected in '{raw}': {reason}")]
    PathTraversal { raw: String, reason: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Project root must be an absolute path: {path}")]
    RelativeProjectRoot { path: String },

    #[error("Invalid {what} '{value}': expected a code identifier")]
    InvalidIdentifier { what: String, value: String },

    #[error("Invalid template id '{id}'")]
    InvalidTemplateId { id: String },

    // ========================================================================
    // Schema Errors
    // ========================================================================
    #[error("Model '{model}' not found in schema")]
    ModelNotFound { model: String },

    #[error("No @id field found in model '{model}'")]
    MissingIdField { model: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyName | Self::EmptyLeafName { .. } => vec![
                "Provide a name made of letters or digits".into(),
                "Examples: invoice, userProfile, billing/invoice".into(),
            ],
            Self::UnknownKind(kind) => vec![
                format!("'{}' is not something harpgen can generate", kind),
                "Supported kinds: module, controller, test, validation, factory, task, seed, observer"
                    .into(),
                "Use --config session to generate the auth-session bundle".into(),
            ],
            Self::UnknownMode(_) => vec![
                "Set MODE to 'api' or 'fullstack'".into(),
                "Or pass --mode api / --mode fullstack".into(),
            ],
            Self::MissingModuleName { kind } => vec![
                format!("A {} lives inside a module", kind),
                "Pass --module <name>, e.g. --module invoice".into(),
            ],
            Self::PathTraversal { .. } | Self::AbsolutePathNotAllowed { .. } => vec![
                "Names may only nest with '/' inside the modules directory".into(),
                "Remove '..', '.', leading '/' and '\\' from the name".into(),
            ],
            Self::RelativeProjectRoot { path } => vec![
                format!("Resolve '{}' to an absolute path first", path),
                "Or run harpgen from the project root without --root".into(),
            ],
            Self::InvalidIdentifier { what, .. } => vec![
                format!("The {} is inserted into generated code", what),
                "Use letters, digits and '_' only, starting with a letter".into(),
            ],
            Self::ModelNotFound { model } => vec![
                format!("Check that 'model {} {{ ... }}' exists in the schema", model),
                "Model names are case sensitive".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ModelNotFound { .. } | Self::MissingIdField { .. } => ErrorCategory::NotFound,
            _ => ErrorCategory::InvalidRequest,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    InvalidRequest,
    NotFound,
}
