//! `harpgen db`: schema-driven helpers.

use serde_json::json;
use tracing::instrument;

use harpgen_adapters::LocalFilesystem;
use harpgen_core::application::DatabaseService;

use crate::{
    cli::DbCommands,
    commands::resolve_root,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Dispatch to the correct db subcommand.
#[instrument(skip_all)]
pub fn execute(cmd: DbCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = DatabaseService::new(Box::new(LocalFilesystem::new()));

    match cmd {
        DbCommands::Sync { root } => {
            let root = resolve_root(root.as_deref(), &config)?;
            let report = service.sync_exports(&root)?;

            if output.is_json() {
                output.json(&json!({
                    "path": report.path.display().to_string(),
                    "models": report.models,
                }))?;
            } else {
                output.success(&format!(
                    "Exported {} model(s) to {}",
                    report.models.len(),
                    report.path.display()
                ))?;
                for model in &report.models {
                    output.file(model)?;
                }
            }
        }

        DbCommands::IdType { model, root } => {
            let root = resolve_root(root.as_deref(), &config)?;
            let id_type = service.id_type(&root, &model)?;

            if output.is_json() {
                output.json(&json!({ "model": model, "idType": id_type }))?;
            } else {
                // Bare value so scripts can capture it.
                output.print(&id_type)?;
            }
        }
    }

    Ok(())
}
