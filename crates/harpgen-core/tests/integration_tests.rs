//! Integration tests for harpgen-core through its public API only.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use harpgen_core::prelude::*;

// ── Test doubles ──────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
struct FakeFs {
    files: Arc<RwLock<BTreeMap<PathBuf, String>>>,
}

impl FakeFs {
    fn read(&self, path: &str) -> Option<String> {
        self.files.read().unwrap().get(Path::new(path)).cloned()
    }

    fn count(&self) -> usize {
        self.files.read().unwrap().len()
    }
}

impl Filesystem for FakeFs {
    fn create_dir_all(&self, _path: &Path) -> HarpgenResult<()> {
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> HarpgenResult<()> {
        self.files
            .write()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> HarpgenResult<String> {
        self.files
            .read()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| {
                ApplicationError::FileNotFound {
                    path: path.to_path_buf(),
                }
                .into()
            })
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.read().unwrap().contains_key(path)
    }
}

/// Every template renders as `<id> name=<name> idType=<idType>`.
struct EchoStore;

impl TemplateStore for EchoStore {
    fn get(&self, id: &TemplateId) -> HarpgenResult<StoredTemplate> {
        Ok(StoredTemplate {
            id: id.clone(),
            source: id.to_string(),
            origin: TemplateOrigin::Builtin,
        })
    }

    fn list(&self) -> HarpgenResult<Vec<StoredTemplate>> {
        Ok(Vec::new())
    }

    fn insert(&self, _template: StoredTemplate) -> HarpgenResult<()> {
        Ok(())
    }
}

struct EchoRenderer;

impl TemplateRenderer for EchoRenderer {
    fn render(
        &self,
        _id: &TemplateId,
        source: &str,
        context: &RenderContext,
    ) -> HarpgenResult<String> {
        Ok(format!(
            "{source} name={} idType={}",
            context.get("name").unwrap_or("-"),
            context.get("idType").unwrap_or("-")
        ))
    }
}

fn service(fs: &FakeFs) -> GenerateService {
    GenerateService::new(
        Box::new(EchoStore),
        Box::new(EchoRenderer),
        Box::new(fs.clone()),
    )
}

fn root() -> ProjectRoot {
    ProjectRoot::try_new("/work").unwrap()
}

// ── Workflows ─────────────────────────────────────────────────────────────────

#[test]
fn module_then_controller_workflow() {
    let fs = FakeFs::default();
    let svc = service(&fs);

    let module = GenerationRequest::builder()
        .kind(GenerateKind::Module)
        .name("invoice")
        .build()
        .unwrap();
    let result = svc.generate(&module, &root()).unwrap();
    assert_eq!(result.message(), "The module has been generated at modules/invoice.");
    assert_eq!(fs.count(), 24);
    assert_eq!(
        fs.read("/work/modules/invoice/controllers/store.ts").as_deref(),
        Some("controller/api/store name=invoice idType=number")
    );

    let controller = GenerationRequest::builder()
        .kind(GenerateKind::Controller)
        .name("export")
        .module("invoice")
        .build()
        .unwrap();
    svc.generate(&controller, &root()).unwrap();
    assert_eq!(fs.count(), 25);
    assert!(fs.read("/work/modules/invoice/controllers/export.ts").is_some());
}

#[test]
fn regeneration_is_deterministic() {
    let fs = FakeFs::default();
    let svc = service(&fs);
    let request = GenerationRequest::builder()
        .kind(GenerateKind::Module)
        .name("billing/invoice")
        .mode(Mode::Fullstack)
        .build()
        .unwrap();

    svc.generate(&request, &root()).unwrap();
    let first = fs.files.read().unwrap().clone();
    svc.generate(&request, &root()).unwrap();
    let second = fs.files.read().unwrap().clone();

    assert_eq!(first, second);
    assert_eq!(first.len(), 30);
}

#[test]
fn schema_id_type_flows_into_module_templates() {
    let fs = FakeFs::default();
    fs.write_file(
        Path::new("/work/prisma/schema.prisma"),
        "model Invoice {\n  id String @id\n}\n",
    )
    .unwrap();

    let request = GenerationRequest::builder()
        .kind(GenerateKind::Module)
        .name("invoices")
        .build()
        .unwrap();
    service(&fs).generate(&request, &root()).unwrap();

    assert_eq!(
        fs.read("/work/modules/invoices/index.ts").as_deref(),
        Some("module-index name=invoices idType=string")
    );
}

#[test]
fn database_sync_and_id_type() {
    let fs = FakeFs::default();
    fs.write_file(
        Path::new("/work/app/database/schema.prisma"),
        "model User {\n  id Int @id\n}\n\nmodel AuditLog {\n  id String @id\n}\n",
    )
    .unwrap();
    fs.write_file(
        Path::new("/work/prisma/schema.prisma"),
        "model User {\n  id Int @id\n}\n",
    )
    .unwrap();

    let db = DatabaseService::new(Box::new(fs.clone()));
    let report = db.sync_exports(&root()).unwrap();
    assert_eq!(report.models, vec!["User", "AuditLog"]);

    let exports = fs.read("/work/app/database/index.ts").unwrap();
    assert!(exports.contains("  auditLog: AuditLog\n} = prisma;"));

    assert_eq!(db.id_type(&root(), "User").unwrap(), "number");
}

#[test]
fn invalid_requests_never_reach_the_filesystem() {
    let err = GenerationRequest::builder()
        .kind(GenerateKind::Module)
        .name("../../etc")
        .build()
        .unwrap_err();
    let err: HarpgenError = err.into();
    assert_eq!(err.category(), ErrorCategory::InvalidRequest);
}
