//! The `GenerationRequest` aggregate and its typestate builder.
//!
//! A `GenerationRequest` is the validated description of one `generate`
//! invocation. Once it exists its names are known to be safe to turn into
//! paths under a project root.
//!
//! # Typestate builder
//!
//! `NoKind` / `HasKind` markers enforce at compile time that a kind is chosen
//! before anything else. Cross-field rules (a controller needs a module, a
//! module name may nest) are checked at `build()`.
//!
//! # Domain purity
//!
//! This module must not import `tracing`.

use std::fmt;
use std::marker::PhantomData;

use crate::domain::{
    error::DomainError,
    validation::DomainValidator,
    value_objects::{FileNaming, GenerateKind, Mode},
};

pub const DEFAULT_SESSION_MODEL: &str = "User";
pub const DEFAULT_IDENTIFIER_FIELD: &str = "email";

// ── Aggregate root ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    kind: GenerateKind,
    raw_name: String,
    module_name: Option<String>,
    mode: Mode,
    naming: FileNaming,
    model: String,
    identifier_field: String,
}

impl GenerationRequest {
    pub fn builder() -> RequestBuilder<NoKind> {
        RequestBuilder::new()
    }

    pub const fn kind(&self) -> GenerateKind {
        self.kind
    }

    /// The name exactly as supplied, trimmed. Empty for the session bundle.
    pub fn raw_name(&self) -> &str {
        &self.raw_name
    }

    pub fn module_name(&self) -> Option<&str> {
        self.module_name.as_deref()
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    pub const fn naming(&self) -> FileNaming {
        self.naming
    }

    /// Session model the auth bundle authenticates against.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Field the session bundle looks users up by.
    pub fn identifier_field(&self) -> &str {
        &self.identifier_field
    }

    /// Last segment of the name.
    pub fn leaf(&self) -> &str {
        self.raw_name
            .rsplit('/')
            .next()
            .map(str::trim)
            .unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        match self.kind {
            GenerateKind::SessionBundle => {
                DomainValidator::validate_identifier("model", &self.model)?;
                DomainValidator::validate_identifier("identifier field", &self.identifier_field)
            }
            GenerateKind::Module => DomainValidator::validate_module_path(&self.raw_name),
            kind => {
                DomainValidator::validate_entity_name(&self.raw_name)?;
                if kind.requires_module() {
                    match &self.module_name {
                        Some(module) => DomainValidator::validate_module_path(module),
                        None => Err(DomainError::MissingModuleName {
                            kind: kind.to_string(),
                        }),
                    }
                } else {
                    Ok(())
                }
            }
        }
    }
}

impl fmt::Display for GenerationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.kind, self.mode)?;
        if !self.raw_name.is_empty() {
            write!(f, " '{}'", self.raw_name)?;
        }
        if let Some(module) = &self.module_name {
            write!(f, " in module '{module}'")?;
        }
        Ok(())
    }
}

// ── Typestate markers ─────────────────────────────────────────────────────────

/// Marker: kind has not been chosen.
pub struct NoKind;
/// Marker: kind is set; the request can be built.
pub struct HasKind;

// ── Builder ───────────────────────────────────────────────────────────────────

pub struct RequestBuilder<K> {
    kind: Option<GenerateKind>,
    name: Option<String>,
    module_name: Option<String>,
    mode: Mode,
    naming: FileNaming,
    model: Option<String>,
    identifier_field: Option<String>,
    _marker: PhantomData<K>,
}

impl RequestBuilder<NoKind> {
    pub fn new() -> Self {
        Self {
            kind: None,
            name: None,
            module_name: None,
            mode: Mode::default(),
            naming: FileNaming::default(),
            model: None,
            identifier_field: None,
            _marker: PhantomData,
        }
    }

    pub fn kind(self, kind: GenerateKind) -> RequestBuilder<HasKind> {
        RequestBuilder {
            kind: Some(kind),
            name: self.name,
            module_name: self.module_name,
            mode: self.mode,
            naming: self.naming,
            model: self.model,
            identifier_field: self.identifier_field,
            _marker: PhantomData,
        }
    }
}

impl Default for RequestBuilder<NoKind> {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestBuilder<HasKind> {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn module(mut self, module: impl Into<String>) -> Self {
        self.module_name = Some(module.into());
        self
    }

    /// Like `module`, but leaves the builder untouched for `None`.
    pub fn maybe_module(mut self, module: Option<String>) -> Self {
        if module.is_some() {
            self.module_name = module;
        }
        self
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn naming(mut self, naming: FileNaming) -> Self {
        self.naming = naming;
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn identifier_field(mut self, field: impl Into<String>) -> Self {
        self.identifier_field = Some(field.into());
        self
    }

    /// Validate and build the request.
    pub fn build(self) -> Result<GenerationRequest, DomainError> {
        let Some(kind) = self.kind else {
            // Unreachable through the typestate API.
            return Err(DomainError::UnknownKind(String::new()));
        };

        let raw_name = self.name.map(|n| n.trim().to_string()).unwrap_or_default();
        let module_name = self
            .module_name
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty());

        let request = GenerationRequest {
            kind,
            raw_name,
            module_name,
            mode: self.mode,
            naming: self.naming,
            model: self
                .model
                .map(|m| m.trim().to_string())
                .unwrap_or_else(|| DEFAULT_SESSION_MODEL.to_string()),
            identifier_field: self
                .identifier_field
                .map(|f| f.trim().to_string())
                .unwrap_or_else(|| DEFAULT_IDENTIFIER_FIELD.to_string()),
        };

        request.validate()?;
        Ok(request)
    }
}
