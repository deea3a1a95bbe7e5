//! Output planning: `GenerationRequest` → `OutputPlan`.
//!
//! Pure. Decides every path, template id and render context before any
//! I/O happens, so a plan can be shown (`--dry-run`) or executed.
//!
//! ## Layout
//!
//! | Kind          | Location                                         |
//! |---------------|--------------------------------------------------|
//! | Module        | `modules/<dir>/...` (24 files api, 30 fullstack) |
//! | Controller    | `modules/<dir>/controllers/<name>.ts`            |
//! | Test          | `modules/<dir>/tests/<kebab>.spec.ts`            |
//! | Validation    | `modules/<dir>/validations/<name>.ts`            |
//! | Factory       | `app/database/factories/<name>.ts`               |
//! | Task          | `app/tasks/<name>.ts`                            |
//! | Seed          | `app/database/seeds/<kebab>.seed.ts`             |
//! | Observer      | `app/observers/<kebab>.observer.ts`              |
//! | SessionBundle | `app/config`, `app/middlewares`, `modules/session` |

use crate::domain::{
    entities::{
        ContentSource, GenerationRequest, OutputPlan, PlannedFile, RelativePath, RenderContext,
        TemplateId,
    },
    error::DomainError,
    naming::NameForms,
    value_objects::{FileNaming, GenerateKind, Mode},
};

pub const MODULES_DIR: &str = "modules";
pub const FACTORIES_DIR: &str = "app/database/factories";
pub const SEEDS_DIR: &str = "app/database/seeds";
pub const TASKS_DIR: &str = "app/tasks";
pub const OBSERVERS_DIR: &str = "app/observers";

const API_CONTROLLERS: &[&str] = &["index", "store", "update", "show", "list", "destroy"];
const FULLSTACK_CONTROLLERS: &[&str] = &[
    "index", "create", "store", "edit", "update", "show", "list", "destroy",
];
const SERVICE_ROLES: &[&str] = &["index", "create", "update", "show", "list", "destroy"];
const VALIDATION_ROLES: &[&str] = &["index", "create", "update"];
const PAGES: &[&str] = &["list", "create", "edit", "show"];

const SESSION_CONTROLLERS: &[&str] = &["index", "store", "show", "destroy"];
const SESSION_SERVICES: &[&str] = &["index", "create"];
const SESSION_VALIDATIONS: &[&str] = &["index", "create", "validate-user", "check-password"];

// ── Public API ───────────────────────────────────────────────────────────────

/// Build the plan for a validated request.
pub fn plan(request: &GenerationRequest) -> Result<OutputPlan, DomainError> {
    // Re-check: requests can be cloned around after construction.
    request.validate()?;

    match request.kind() {
        GenerateKind::Module => plan_module(request),
        GenerateKind::Controller => plan_controller(request),
        GenerateKind::Test => plan_test(request),
        GenerateKind::Validation => plan_validation(request),
        GenerateKind::Factory => plan_single(request, FACTORIES_DIR, FileStem::Convention, ""),
        GenerateKind::Task => plan_single(request, TASKS_DIR, FileStem::Convention, ""),
        GenerateKind::Seed => plan_single(request, SEEDS_DIR, FileStem::Kebab, ".seed"),
        GenerateKind::Observer => plan_single(request, OBSERVERS_DIR, FileStem::Kebab, ".observer"),
        GenerateKind::SessionBundle => plan_session(request),
    }
}

/// Directory a module name maps to, relative to the project root.
///
/// `invoice` → `modules/invoice`, `InvoiceItems` → `modules/invoice-items`,
/// `billing/invoice` → `modules/billing/invoice`. Wrapper segments are kept
/// as typed; only the leaf is normalized.
pub fn module_dir(raw: &str) -> Result<RelativePath, DomainError> {
    let segments: Vec<&str> = raw.trim().split('/').map(str::trim).collect();
    let Some((leaf, wrappers)) = segments.split_last() else {
        return Err(DomainError::EmptyName);
    };
    let leaf = NameForms::new(*leaf);
    if leaf.is_empty() {
        return Err(DomainError::EmptyLeafName {
            raw: raw.to_string(),
        });
    }

    let mut dir = RelativePath::try_new(MODULES_DIR)?;
    for wrapper in wrappers {
        dir = dir.join(wrapper)?;
    }
    dir.join(leaf.kebab())
}

// ── Kinds ────────────────────────────────────────────────────────────────────

fn plan_module(request: &GenerationRequest) -> Result<OutputPlan, DomainError> {
    let forms = NameForms::new(request.leaf());
    let dir = module_dir(request.raw_name())?;
    let naming = request.naming();
    let mode = request.mode();
    // Barrels import sibling files, so they need the file naming too.
    let ctx = RenderContext::new()
        .with_variable("name", forms.camel())
        .with_variable("naming", naming.as_str());

    let mut files = vec![template_file(
        "index",
        dir.join("index.ts")?,
        "module-index",
        ctx.clone(),
    )?];

    let controllers = match mode {
        Mode::Api => API_CONTROLLERS,
        Mode::Fullstack => FULLSTACK_CONTROLLERS,
    };
    for role in controllers {
        files.push(template_file(
            format!("controllers/{role}"),
            dir.join("controllers")?.join(role_file(naming, role, "ts"))?,
            &format!("controller/{mode}/{role}"),
            ctx.clone(),
        )?);
    }

    for (folder, template) in [("services", "service"), ("repositories", "repository")] {
        for role in SERVICE_ROLES {
            files.push(template_file(
                format!("{folder}/{role}"),
                dir.join(folder)?.join(role_file(naming, role, "ts"))?,
                &format!("{template}/{role}"),
                ctx.clone(),
            )?);
        }
    }

    for role in VALIDATION_ROLES {
        files.push(template_file(
            format!("validations/{role}"),
            dir.join("validations")?.join(role_file(naming, role, "ts"))?,
            &format!("validation/{role}"),
            ctx.clone(),
        )?);
    }

    files.push(template_file(
        "routes",
        dir.join(format!("{}.routes.ts", forms.singular_kebab()))?,
        &format!("routes/{mode}"),
        ctx,
    )?);

    files.push(PlannedFile::new(
        "tests",
        dir.join("tests")?.join(".gitkeep")?,
        ContentSource::Empty,
    ));

    if mode.is_fullstack() {
        for page in PAGES {
            files.push(PlannedFile::new(
                format!("pages/{page}"),
                dir.join("pages")?.join(page)?.join("page.html")?,
                ContentSource::Boilerplate(TemplateId::parse(&format!("pages/{page}"))?),
            ));
        }
    }

    Ok(OutputPlan::new(GenerateKind::Module, dir, files))
}

fn plan_controller(request: &GenerationRequest) -> Result<OutputPlan, DomainError> {
    let module = required_module(request)?;
    let forms = NameForms::new(request.raw_name());
    let path = module_dir(module)?
        .join("controllers")?
        .join(format!("{}.ts", request.naming().apply(forms.camel())))?;

    let ctx = RenderContext::new().with_variable("name", forms.camel());
    let ctx = match request.mode() {
        Mode::Api => ctx,
        Mode::Fullstack => ctx.with_variable("module", module_leaf(module).camel()),
    };
    let template = format!("controller/{}/generic", request.mode());

    single_file_plan(request.kind(), "controller", path, &template, ctx)
}

fn plan_test(request: &GenerationRequest) -> Result<OutputPlan, DomainError> {
    let module = required_module(request)?;
    let forms = NameForms::new(request.raw_name());
    let path = module_dir(module)?
        .join("tests")?
        .join(format!("{}.spec.ts", forms.kebab()))?;
    let ctx = RenderContext::new()
        .with_variable("module", module_leaf(module).camel())
        .with_variable("name", forms.camel());

    single_file_plan(request.kind(), "test", path, "test", ctx)
}

fn plan_validation(request: &GenerationRequest) -> Result<OutputPlan, DomainError> {
    let module = required_module(request)?;
    let forms = NameForms::new(request.raw_name());
    let path = module_dir(module)?
        .join("validations")?
        .join(format!("{}.ts", request.naming().apply(forms.camel())))?;
    let ctx = RenderContext::new().with_variable("name", forms.camel());

    single_file_plan(request.kind(), "validation", path, "validation/example", ctx)
}

#[derive(Clone, Copy)]
enum FileStem {
    /// Follows the configured `FileNaming`.
    Convention,
    /// Always kebab (suffixed files).
    Kebab,
}

fn plan_single(
    request: &GenerationRequest,
    base: &str,
    stem: FileStem,
    suffix: &str,
) -> Result<OutputPlan, DomainError> {
    let forms = NameForms::new(request.raw_name());
    let stem = match stem {
        FileStem::Convention => request.naming().apply(forms.camel()),
        FileStem::Kebab => forms.kebab().to_string(),
    };
    let path = RelativePath::try_new(base)?.join(format!("{stem}{suffix}.ts"))?;
    let ctx = RenderContext::new().with_variable("name", forms.camel());
    let template = request.kind().as_str();

    single_file_plan(request.kind(), template, path, template, ctx)
}

fn plan_session(request: &GenerationRequest) -> Result<OutputPlan, DomainError> {
    let naming = request.naming();
    let ctx = RenderContext::new()
        .with_variable("model", request.model())
        .with_variable("identifierField", request.identifier_field())
        .with_variable("naming", naming.as_str());
    let dir = RelativePath::try_new(MODULES_DIR)?.join("session")?;

    let mut files = vec![
        template_file(
            "config",
            RelativePath::try_new("app/config/session.ts")?,
            "auth/session/config",
            ctx.clone(),
        )?,
        template_file(
            "middleware",
            RelativePath::try_new("app/middlewares/auth.ts")?,
            "auth/session/middleware",
            ctx.clone(),
        )?,
        template_file(
            "routes",
            dir.join("session.routes.ts")?,
            "auth/session/routes",
            ctx.clone(),
        )?,
    ];

    for (folder, roles) in [
        ("controllers", SESSION_CONTROLLERS),
        ("services", SESSION_SERVICES),
        ("validations", SESSION_VALIDATIONS),
    ] {
        for role in roles {
            files.push(template_file(
                format!("{folder}/{role}"),
                dir.join(folder)?.join(role_file(naming, role, "ts"))?,
                &format!("auth/session/{folder}/{role}"),
                ctx.clone(),
            )?);
        }
    }

    Ok(OutputPlan::new(GenerateKind::SessionBundle, dir, files))
}

// ── Helpers ──────────────────────────────────────────────────────────────────

fn required_module(request: &GenerationRequest) -> Result<&str, DomainError> {
    request
        .module_name()
        .ok_or_else(|| DomainError::MissingModuleName {
            kind: request.kind().to_string(),
        })
}

fn module_leaf(module: &str) -> NameForms {
    NameForms::new(module.rsplit('/').next().unwrap_or(module).trim())
}

/// `index` barrels never follow the file naming convention.
fn role_file(naming: FileNaming, role: &str, ext: &str) -> String {
    if role == "index" {
        format!("index.{ext}")
    } else {
        format!("{}.{ext}", naming.apply(role))
    }
}

fn template_file(
    role: impl Into<String>,
    path: RelativePath,
    template: &str,
    context: RenderContext,
) -> Result<PlannedFile, DomainError> {
    Ok(PlannedFile::new(
        role,
        path,
        ContentSource::Template {
            id: TemplateId::parse(template)?,
            context,
        },
    ))
}

fn single_file_plan(
    kind: GenerateKind,
    role: &str,
    path: RelativePath,
    template: &str,
    ctx: RenderContext,
) -> Result<OutputPlan, DomainError> {
    let file = template_file(role, path.clone(), template, ctx)?;
    Ok(OutputPlan::new(kind, path, vec![file]))
}
