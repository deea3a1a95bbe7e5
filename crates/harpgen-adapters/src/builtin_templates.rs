//! Built-in template catalogue.
//!
//! Every template the planner can reference is embedded in the binary from
//! `templates/<id>.txt`, so `harpgen` works without any files on disk.
//!
//! # Overrides
//!
//! A built-in can be replaced by dropping `<id>.txt` into a templates
//! directory. Directories are searched in this priority order, highest first:
//!
//! 1. **`$HARPGEN_TEMPLATES_DIR`**: environment variable override.
//! 2. **`templates.local_path`** from the configuration file, relative paths
//!    resolved against the project root.
//! 3. **`<root>/.harpgen/templates`**: per-project overrides.
//!
//! When two directories hold the same id, the higher-priority one wins.

use std::path::{Path, PathBuf};

use harpgen_core::{
    application::{StoredTemplate, TemplateOrigin},
    domain::TemplateId,
    error::HarpgenResult,
};
use tracing::{debug, instrument};

/// Environment variable naming an override directory.
pub const TEMPLATES_DIR_ENV: &str = "HARPGEN_TEMPLATES_DIR";

/// Per-project override directory, relative to the project root.
pub const PROJECT_TEMPLATES_DIR: &str = ".harpgen/templates";

macro_rules! builtin {
    ($($id:literal),+ $(,)?) => {
        &[$(($id, include_str!(concat!("../templates/", $id, ".txt")))),+]
    };
}

/// `(id, source)` for every embedded template.
const BUILTIN: &[(&str, &str)] = builtin![
    "module-index",
    "controller/api/index",
    "controller/api/store",
    "controller/api/update",
    "controller/api/show",
    "controller/api/list",
    "controller/api/destroy",
    "controller/api/generic",
    "controller/fullstack/index",
    "controller/fullstack/create",
    "controller/fullstack/store",
    "controller/fullstack/edit",
    "controller/fullstack/update",
    "controller/fullstack/show",
    "controller/fullstack/list",
    "controller/fullstack/destroy",
    "controller/fullstack/generic",
    "service/index",
    "service/create",
    "service/update",
    "service/show",
    "service/list",
    "service/destroy",
    "repository/index",
    "repository/create",
    "repository/update",
    "repository/show",
    "repository/list",
    "repository/destroy",
    "validation/index",
    "validation/create",
    "validation/update",
    "validation/example",
    "routes/api",
    "routes/fullstack",
    "pages/list",
    "pages/create",
    "pages/edit",
    "pages/show",
    "test",
    "factory",
    "task",
    "seed",
    "observer",
    "auth/session/config",
    "auth/session/middleware",
    "auth/session/routes",
    "auth/session/controllers/index",
    "auth/session/controllers/store",
    "auth/session/controllers/show",
    "auth/session/controllers/destroy",
    "auth/session/services/index",
    "auth/session/services/create",
    "auth/session/validations/index",
    "auth/session/validations/create",
    "auth/session/validations/validate-user",
    "auth/session/validations/check-password",
];

/// All embedded templates.
pub fn all_templates() -> HarpgenResult<Vec<StoredTemplate>> {
    BUILTIN
        .iter()
        .map(|(id, source)| -> HarpgenResult<StoredTemplate> {
            Ok(StoredTemplate {
                id: TemplateId::parse(id)?,
                source: (*source).to_string(),
                origin: TemplateOrigin::Builtin,
            })
        })
        .collect()
}

/// Override directories in priority order, highest first.
///
/// Directories are returned whether or not they exist; loading a missing
/// directory yields nothing.
#[instrument(skip_all)]
pub fn candidate_paths(root: &Path, configured: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(3);

    if let Ok(env_dir) = std::env::var(TEMPLATES_DIR_ENV) {
        if !env_dir.trim().is_empty() {
            let p = PathBuf::from(env_dir);
            debug!(path = %p.display(), "candidate from ${TEMPLATES_DIR_ENV}");
            paths.push(p);
        }
    }

    if let Some(configured) = configured {
        let p = if configured.is_absolute() {
            configured.to_path_buf()
        } else {
            root.join(configured)
        };
        debug!(path = %p.display(), "candidate from configuration");
        paths.push(p);
    }

    paths.push(root.join(PROJECT_TEMPLATES_DIR));
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_builtin_id_is_valid_and_unique() {
        let templates = all_templates().unwrap();
        let ids: HashSet<_> = templates.iter().map(|t| t.id.clone()).collect();
        assert_eq!(ids.len(), templates.len());
        assert_eq!(templates.len(), 57);
    }

    #[test]
    fn builtin_sources_are_not_empty() {
        for template in all_templates().unwrap() {
            assert!(!template.source.trim().is_empty(), "{}", template.id);
        }
    }

    #[test]
    fn configured_path_resolves_against_root() {
        let root = Path::new("/work");
        let paths = candidate_paths(root, Some(Path::new("tpl")));
        assert!(paths.contains(&PathBuf::from("/work/tpl")));
        assert_eq!(paths.last(), Some(&PathBuf::from("/work/.harpgen/templates")));
    }

    #[test]
    fn project_directory_is_always_a_candidate() {
        let paths = candidate_paths(Path::new("/work"), None);
        assert!(paths.ends_with(&[PathBuf::from("/work/.harpgen/templates")]));
    }
}
