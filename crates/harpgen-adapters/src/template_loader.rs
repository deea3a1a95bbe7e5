//! Filesystem template override loader.
//!
//! A templates directory mirrors the template id space: the file
//! `controller/api/store.txt` overrides the built-in `controller/api/store`.
//!
//! ```text
//! .harpgen/templates/
//! ├── factory.txt
//! └── controller/
//!     └── api/
//!         └── store.txt
//! ```
//!
//! Files without a `.txt` extension are ignored so READMEs and editor
//! backups can live alongside. A `.txt` file whose relative path is not a
//! valid template id, or that is not UTF-8, fails the whole load.

use std::{
    fs,
    path::{Path, PathBuf},
};

use harpgen_core::{
    application::{ApplicationError, StoredTemplate, TemplateOrigin},
    domain::TemplateId,
    error::HarpgenResult,
};
use tracing::{debug, instrument};
use walkdir::WalkDir;

const TEMPLATE_EXTENSION: &str = "txt";

/// Load every `<id>.txt` under `dir`, sorted by id.
///
/// A missing directory yields an empty list.
#[instrument(skip_all, fields(dir = %dir.display()))]
pub fn load_dir(dir: &Path) -> HarpgenResult<Vec<StoredTemplate>> {
    if !dir.is_dir() {
        debug!("templates directory does not exist, skipping");
        return Ok(Vec::new());
    }

    let mut templates = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| load_error(dir, format!("directory walk error: {e}")))?;
        let path = entry.path();

        if !entry.file_type().is_file()
            || path.extension().and_then(|ext| ext.to_str()) != Some(TEMPLATE_EXTENSION)
        {
            continue;
        }

        let id = template_id_for(dir, path)?;
        let source = fs::read_to_string(path)
            .map_err(|e| load_error(path, format!("failed to read: {e}")))?;

        debug!(id = %id, "loaded template file");
        templates.push(StoredTemplate {
            id,
            source,
            origin: TemplateOrigin::Override,
        });
    }

    templates.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(templates)
}

/// `<dir>/controller/api/store.txt` → `controller/api/store`.
fn template_id_for(dir: &Path, path: &Path) -> HarpgenResult<TemplateId> {
    let relative = path
        .strip_prefix(dir)
        .map_err(|_| load_error(path, format!("not under {}", dir.display())))?
        .with_extension("");

    let raw = normalize_path(&relative.to_string_lossy());
    TemplateId::parse(&raw).map_err(|e| load_error(path, e.to_string()))
}

fn load_error(path: &Path, reason: String) -> harpgen_core::error::HarpgenError {
    ApplicationError::TemplateLoad {
        path: PathBuf::from(path),
        reason,
    }
    .into()
}

/// Forward slashes on every platform.
fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}
