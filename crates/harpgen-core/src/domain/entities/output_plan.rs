//! The `OutputPlan`: every file one invocation writes, decided up front.
//!
//! ```text
//! OutputPlan
//! ├── kind, primary location
//! └── PlannedFile*
//!     ├── role        "controllers/store"
//!     ├── path        modules/invoice/controllers/store.ts
//!     └── content     Template{id, ctx} | Boilerplate(id) | Empty
//! ```
//!
//! Building a plan is pure. Executing it is the application layer's job.

use std::collections::BTreeSet;

use super::{RelativePath, RenderContext, TemplateId};
use crate::domain::value_objects::GenerateKind;

/// How a planned file gets its bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// Render the template with this context.
    Template {
        id: TemplateId,
        context: RenderContext,
    },
    /// Copy the template source verbatim, no rendering.
    Boilerplate(TemplateId),
    /// Zero-byte file (e.g. `.gitkeep`).
    Empty,
}

impl ContentSource {
    pub fn template_id(&self) -> Option<&TemplateId> {
        match self {
            Self::Template { id, .. } | Self::Boilerplate(id) => Some(id),
            Self::Empty => None,
        }
    }
}

/// One output file and its template binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    role: String,
    path: RelativePath,
    content: ContentSource,
}

impl PlannedFile {
    pub fn new(role: impl Into<String>, path: RelativePath, content: ContentSource) -> Self {
        Self {
            role: role.into(),
            path,
            content,
        }
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn path(&self) -> &RelativePath {
        &self.path
    }

    pub fn content(&self) -> &ContentSource {
        &self.content
    }

    /// Replace the render context, keeping everything else.
    pub fn map_context(mut self, f: impl FnOnce(RenderContext) -> RenderContext) -> Self {
        if let ContentSource::Template { context, .. } = &mut self.content {
            *context = f(std::mem::take(context));
        }
        self
    }
}

/// Ordered set of files for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPlan {
    kind: GenerateKind,
    primary: RelativePath,
    files: Vec<PlannedFile>,
}

impl OutputPlan {
    pub fn new(kind: GenerateKind, primary: RelativePath, files: Vec<PlannedFile>) -> Self {
        Self {
            kind,
            primary,
            files,
        }
    }

    pub const fn kind(&self) -> GenerateKind {
        self.kind
    }

    /// Module directory for modules and bundles, the file itself otherwise.
    pub fn primary(&self) -> &RelativePath {
        &self.primary
    }

    pub fn files(&self) -> &[PlannedFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn find(&self, role: &str) -> Option<&PlannedFile> {
        self.files.iter().find(|f| f.role == role)
    }

    /// Every parent directory the plan needs, shallowest first, deduplicated.
    pub fn directories(&self) -> Vec<RelativePath> {
        let mut dirs = BTreeSet::new();
        for file in &self.files {
            let mut parent = file.path.parent();
            while let Some(dir) = parent {
                parent = dir.parent();
                dirs.insert(dir);
            }
        }
        let mut dirs: Vec<_> = dirs.into_iter().collect();
        dirs.sort_by_key(|d| d.as_path().components().count());
        dirs
    }

    /// Transform every file, keeping order.
    pub fn map_files(mut self, f: impl FnMut(PlannedFile) -> PlannedFile) -> Self {
        self.files = self.files.into_iter().map(f).collect();
        self
    }

    /// The one-line confirmation shown after a successful run.
    pub fn message(&self) -> String {
        match self.kind {
            GenerateKind::Module => {
                format!("The module has been generated at {}.", self.primary)
            }
            GenerateKind::SessionBundle => {
                let extras: Vec<String> = self
                    .files
                    .iter()
                    .filter(|f| !f.path.as_path().starts_with(self.primary.as_path()))
                    .map(|f| f.path.to_string())
                    .collect();
                format!(
                    "The files have been generated at {}, {}.",
                    self.primary,
                    extras.join(" and ")
                )
            }
            _ => format!("The file has been generated at {}.", self.primary),
        }
    }
}
