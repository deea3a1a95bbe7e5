//! Implementation of the `harpgen list` command.

use serde_json::json;

use harpgen_core::application::{TemplateInfo, TemplateService};

use crate::{
    cli::{ListArgs, ListFormat},
    commands::{resolve_root, template_store},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let root = resolve_root(args.root.as_deref(), &config)?;
    let service = TemplateService::new(Box::new(template_store(&root, &config)?));
    let templates = service.list(args.group.as_deref())?;

    // --output-format json beats --format.
    let format = if output.is_json() {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            output.header("Available Templates:")?;
            let width = templates.iter().map(|t| t.id.len()).max().unwrap_or(0);
            for t in &templates {
                output.print(&format!(
                    "  {:<width$}  {:<8}  {} lines",
                    t.id,
                    t.origin.to_string(),
                    t.lines
                ))?;
            }
        }

        ListFormat::Json => {
            output.json(&json!(templates.iter().map(to_json).collect::<Vec<_>>()))?;
        }

        ListFormat::List => {
            for t in &templates {
                output.print(&t.id)?;
            }
        }

        ListFormat::Csv => {
            output.print("id,group,origin,lines")?;
            for t in &templates {
                output.print(&format!("{},{},{},{}", t.id, t.group, t.origin, t.lines))?;
            }
        }
    }

    Ok(())
}

fn to_json(t: &TemplateInfo) -> serde_json::Value {
    json!({
        "id": t.id,
        "group": t.group,
        "origin": t.origin.to_string(),
        "lines": t.lines,
    })
}
