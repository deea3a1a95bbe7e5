//! Implementation of the `harpgen generate` command.
//!
//! Responsibility: turn CLI arguments (or prompt answers) into a
//! `GenerationRequest`, call the core generate service, and display results.

use std::path::Path;

use serde_json::json;
use tracing::{debug, info, instrument};

use harpgen_adapters::{LocalFilesystem, MiniJinjaRenderer};
use harpgen_core::{
    application::GenerateService,
    domain::{
        DEFAULT_IDENTIFIER_FIELD, DEFAULT_SESSION_MODEL, FileNaming, GenerateKind,
        GenerationRequest, Mode, ProjectRoot,
    },
};

use crate::{
    cli::{ConfigBundle, GenerateArgs},
    commands::{resolve_root, template_store},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt,
};

/// Execute `harpgen generate`.
///
/// 1. Resolve the kind (positional, `--config`, or a prompt)
/// 2. Fill missing name/module from prompts when attached to a terminal
/// 3. Build and validate the request
/// 4. Plan (`--dry-run`) or generate under the project root
#[instrument(skip_all, fields(kind = ?args.kind, name = ?args.name))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let interactive = prompt::is_interactive();

    let kind = resolve_kind(&args, interactive)?;
    let mode: Mode = match args.mode {
        Some(mode) => mode.into(),
        None => config.mode()?,
    };
    let naming: FileNaming = match args.naming {
        Some(naming) => naming.into(),
        None => config.naming()?,
    };

    let name = match args.name {
        Some(name) => Some(name),
        None if kind.takes_name() && interactive => Some(prompt::text(&format!("{kind} name"))?),
        None => None,
    };
    let module = match args.module {
        Some(module) => Some(module),
        None if kind.requires_module() && interactive => Some(prompt::text("Module")?),
        None => None,
    };
    let (model, identifier_field) =
        session_answers(kind, args.model, args.identifier_field, interactive)?;

    let mut builder = GenerationRequest::builder()
        .kind(kind)
        .mode(mode)
        .naming(naming)
        .maybe_module(module);
    if let Some(name) = name {
        builder = builder.name(name);
    }
    if let Some(model) = model {
        builder = builder.model(model);
    }
    if let Some(field) = identifier_field {
        builder = builder.identifier_field(field);
    }
    let request = builder.build()?;
    debug!(request = %request, mode = %mode, naming = %naming, "Request built");

    let root = resolve_root(args.root.as_deref(), &config)?;
    let service = GenerateService::new(
        Box::new(template_store(&root, &config)?),
        Box::new(MiniJinjaRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );

    if args.dry_run {
        let plan = service.plan(&request, &root)?;
        let files: Vec<String> = plan.files().iter().map(|f| f.path().to_string()).collect();

        if output.is_json() {
            output.json(&json!({
                "kind": kind.as_str(),
                "primary": plan.primary().to_string(),
                "dry_run": true,
                "files": files,
            }))?;
        } else {
            output.info(&format!(
                "Dry run: {} file(s) for {} would be written under {}",
                files.len(),
                plan.primary(),
                root
            ))?;
            for file in &files {
                output.file(file)?;
            }
        }
        return Ok(());
    }

    info!(kind = %kind, root = %root, "Generation started");
    let result = service.generate(&request, &root)?;

    let files: Vec<String> = result
        .files
        .iter()
        .map(|path| display_relative(path, &root))
        .collect();

    if output.is_json() {
        output.json(&json!({
            "kind": kind.as_str(),
            "primary": result.primary.to_string(),
            "message": result.message(),
            "files": files,
        }))?;
    } else {
        output.success(result.message())?;
        for file in &files {
            output.file(file)?;
        }
    }

    Ok(())
}

fn resolve_kind(args: &GenerateArgs, interactive: bool) -> CliResult<GenerateKind> {
    if let Some(ConfigBundle::Session) = args.config {
        return Ok(GenerateKind::SessionBundle);
    }
    match args.kind.as_deref() {
        Some(raw) => Ok(raw.parse()?),
        None if interactive => prompt::select_kind(),
        None => Err(CliError::InvalidInput {
            message: "missing KIND (module, controller, test, validation, factory, task, \
                      seed, observer, session)"
                .into(),
            source: None,
        }),
    }
}

/// Ask for the session model and login field when they were not passed.
///
/// Without a terminal the values stay unset and the request falls back to
/// its defaults.
fn session_answers(
    kind: GenerateKind,
    model: Option<String>,
    identifier_field: Option<String>,
    interactive: bool,
) -> CliResult<(Option<String>, Option<String>)> {
    if kind != GenerateKind::SessionBundle || !interactive {
        return Ok((model, identifier_field));
    }
    let model = match model {
        Some(model) => model,
        None => prompt::text_with_default(
            "Which model contains the login information?",
            DEFAULT_SESSION_MODEL,
        )?,
    };
    let identifier_field = match identifier_field {
        Some(field) => field,
        None => prompt::text_with_default(
            "Which field will be used for login?",
            DEFAULT_IDENTIFIER_FIELD,
        )?,
    };
    Ok((Some(model), Some(identifier_field)))
}

fn display_relative(path: &Path, root: &ProjectRoot) -> String {
    path.strip_prefix(root.as_path())
        .unwrap_or(path)
        .display()
        .to_string()
}
