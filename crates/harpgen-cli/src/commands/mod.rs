//! Command handlers. Each translates parsed arguments into core calls and
//! renders the result; no generation logic lives here.

use std::path::{Path, PathBuf};

use tracing::debug;

use harpgen_adapters::{InMemoryStore, builtin_templates};
use harpgen_core::domain::ProjectRoot;

use crate::{config::AppConfig, error::CliResult};

pub mod completions;
pub mod config;
pub mod db;
pub mod generate;
pub mod init;
pub mod list;

/// Project root: `--root`, then `generator.project_root`, then the current
/// directory. Relative paths are taken from the current directory.
pub fn resolve_root(flag: Option<&Path>, config: &AppConfig) -> CliResult<ProjectRoot> {
    let cwd = std::env::current_dir()?;
    let chosen: PathBuf = match flag.or(config.generator.project_root.as_deref()) {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => cwd.join(path),
        None => cwd,
    };
    debug!(root = %chosen.display(), "Resolved project root");
    Ok(ProjectRoot::try_new(chosen)?)
}

/// Built-in templates with every override directory for `root` applied.
pub fn template_store(root: &ProjectRoot, config: &AppConfig) -> CliResult<InMemoryStore> {
    let dirs = builtin_templates::candidate_paths(
        root.as_path(),
        config.templates.local_path.as_deref(),
    );
    Ok(InMemoryStore::with_overrides(&dirs)?)
}
