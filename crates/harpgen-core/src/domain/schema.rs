//! ORM schema inspection.
//!
//! Works on schema *text*; reading the file is the application layer's job.

use regex::Regex;
use std::sync::LazyLock;

use crate::domain::{error::DomainError, naming::to_camel};

static MODEL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"model\s+(\w+)\s+").expect("model regex"));

/// Header of the generated `app/database/index.ts`.
pub const EXPORTS_HEADER: &str = "import { PrismaClient } from \"app/database/client\";\n\
import { Observer } from \"./observer\";\n\
\n\
const client = new PrismaClient();\n\
export const observer = new Observer(client);\n\
export const prisma = observer.prisma;\n\
\n";

/// Model names in declaration order.
pub fn detect_models(schema: &str) -> Vec<String> {
    MODEL_PATTERN
        .captures_iter(schema)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Destructuring export of every model delegate:
///
/// ```text
/// export const {
///   user: User,
///   invoiceItem: InvoiceItem
/// } = prisma;
/// ```
pub fn generate_exports(models: &[String]) -> String {
    let entries = models
        .iter()
        .map(|model| format!("  {}: {}", to_camel(model), model))
        .collect::<Vec<_>>()
        .join(",\n");

    format!("export const {{ \n{entries}\n}} = prisma;")
}

/// Full contents of the database export file.
pub fn exports_file(models: &[String]) -> String {
    format!("{EXPORTS_HEADER}{}", generate_exports(models))
}

/// TypeScript type of a model's `@id` field.
///
/// | ORM type                             | TypeScript  |
/// |--------------------------------------|-------------|
/// | `String`                             | `string`    |
/// | `Int`, `BigInt`, `Float`, `Decimal`  | `number`    |
/// | `Boolean`                            | `boolean`   |
/// | `DateTime`                           | `Date`      |
/// | `Json`                               | `any`       |
/// | anything else                        | lowercased  |
pub fn id_type(schema: &str, model: &str) -> Result<String, DomainError> {
    let pattern = format!(r"model\s+{}\s+\{{([\s\S]*?)\}}", regex::escape(model));
    let model_regex = Regex::new(&pattern).map_err(|_| DomainError::ModelNotFound {
        model: model.to_string(),
    })?;

    let body = model_regex
        .captures(schema)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| DomainError::ModelNotFound {
            model: model.to_string(),
        })?;

    body.as_str()
        .lines()
        .map(str::trim)
        .filter(|line| line.contains("@id"))
        .find_map(|line| line.split_whitespace().nth(1))
        .map(|orm_type| ts_type(orm_type.trim_end_matches(['?', '!'])))
        .ok_or_else(|| DomainError::MissingIdField {
            model: model.to_string(),
        })
}

fn ts_type(orm_type: &str) -> String {
    match orm_type {
        "String" => "string".into(),
        "Int" | "BigInt" | "Float" | "Decimal" => "number".into(),
        "Boolean" => "boolean".into(),
        "DateTime" => "Date".into(),
        "Json" => "any".into(),
        other => other.to_lowercase(),
    }
}
