//! Generate Service - main application orchestrator.
//!
//! This service coordinates one `generate` invocation:
//! 1. Plan the output (pure, `domain::plan`)
//! 2. Enrich module contexts with the ORM id type
//! 3. Create every directory the plan needs
//! 4. Render or copy each file and write it
//!
//! Writes are sequential and stop at the first failure. Files written before
//! the failure stay on disk.

use std::path::PathBuf;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ports::{Filesystem, TemplateRenderer, TemplateStore},
        services::database_service::{DEFAULT_ID_TYPE, ID_SCHEMA_PATH},
    },
    domain::{
        self, ContentSource, GenerateKind, GenerationRequest, NameForms, OutputPlan, PlannedFile,
        ProjectRoot, RelativePath, schema,
    },
    error::HarpgenResult,
};

/// What a successful invocation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub kind: GenerateKind,
    /// Module directory or single file, relative to the project root.
    pub primary: RelativePath,
    /// Absolute paths, in write order.
    pub files: Vec<PathBuf>,
    message: String,
}

impl GenerationResult {
    /// The one-line confirmation for the user.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Main generation service.
pub struct GenerateService {
    store: Box<dyn TemplateStore>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl GenerateService {
    /// Create a new generate service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use harpgen_core::application::GenerateService;
    ///
    /// let service = GenerateService::new(
    ///     store,      // impl TemplateStore
    ///     renderer,   // impl TemplateRenderer
    ///     filesystem, // impl Filesystem
    /// );
    /// ```
    pub fn new(
        store: Box<dyn TemplateStore>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            store,
            renderer,
            filesystem,
        }
    }

    /// Compute the files an invocation would write, without writing.
    ///
    /// Reads the ORM schema (if present) to resolve `idType` for modules.
    #[instrument(skip_all, fields(request = %request))]
    pub fn plan(
        &self,
        request: &GenerationRequest,
        root: &ProjectRoot,
    ) -> HarpgenResult<OutputPlan> {
        let plan = domain::plan(request)?;

        if request.kind() != GenerateKind::Module {
            return Ok(plan);
        }

        let leaf = NameForms::new(request.leaf());
        let model = NameForms::new(leaf.singular()).pascal().to_string();
        let id_type = self.resolve_id_type(root, &model);
        debug!(model = %model, id_type = %id_type, "Resolved module id type");

        Ok(plan.map_files(|file| {
            file.map_context(|ctx| ctx.with_default("idType", id_type.as_str()))
        }))
    }

    /// Generate every file for the request under `root`.
    #[instrument(skip_all, fields(request = %request, root = %root))]
    pub fn generate(
        &self,
        request: &GenerationRequest,
        root: &ProjectRoot,
    ) -> HarpgenResult<GenerationResult> {
        info!("Generating {}", request.kind());

        let plan = self.plan(request, root)?;
        self.ensure_confined(&plan, root)?;

        // All directories first, then files.
        for dir in plan.directories() {
            self.filesystem.create_dir_all(&root.resolve(&dir))?;
        }

        let mut written = Vec::with_capacity(plan.len());
        for file in plan.files() {
            let content = self.content_for(file)?;
            let path = root.resolve(file.path());
            self.filesystem.write_file(&path, &content)?;
            debug!(role = file.role(), path = %path.display(), "Wrote file");
            written.push(path);
        }

        info!(files = written.len(), "Generation completed successfully");

        Ok(GenerationResult {
            kind: plan.kind(),
            primary: plan.primary().clone(),
            files: written,
            message: plan.message(),
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn content_for(&self, file: &PlannedFile) -> HarpgenResult<String> {
        match file.content() {
            ContentSource::Template { id, context } => {
                let template = self.store.get(id)?;
                self.renderer.render(id, &template.source, context)
            }
            ContentSource::Boilerplate(id) => Ok(self.store.get(id)?.source),
            ContentSource::Empty => Ok(String::new()),
        }
    }

    /// Every resolved path must stay under the root.
    fn ensure_confined(&self, plan: &OutputPlan, root: &ProjectRoot) -> HarpgenResult<()> {
        for file in plan.files() {
            let resolved = root.resolve(file.path());
            if !resolved.starts_with(root.as_path()) {
                return Err(domain::DomainError::PathTraversal {
                    raw: file.path().to_string(),
                    reason: "resolves outside the project root".into(),
                }
                .into());
            }
        }
        Ok(())
    }

    fn resolve_id_type(&self, root: &ProjectRoot, model: &str) -> String {
        let schema_path = root.as_path().join(ID_SCHEMA_PATH);
        if !self.filesystem.exists(&schema_path) {
            return DEFAULT_ID_TYPE.to_string();
        }
        self.filesystem
            .read_to_string(&schema_path)
            .ok()
            .and_then(|text| schema::id_type(&text, model).ok())
            .unwrap_or_else(|| DEFAULT_ID_TYPE.to_string())
    }
}
