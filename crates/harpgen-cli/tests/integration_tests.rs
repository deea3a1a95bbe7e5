//! Integration tests for the harpgen binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `harpgen` running inside `dir`, isolated from the caller's config and env.
fn harpgen(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("harpgen").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join(".config"))
        .env_remove("MODE")
        .env_remove("HARPGEN_TEMPLATES_DIR")
        .env_remove("HARPGEN_CONFIG_FILE")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn write(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

#[test]
fn test_help_flag() {
    let dir = TempDir::new().unwrap();
    harpgen(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("db"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_version_flag() {
    let dir = TempDir::new().unwrap();
    harpgen(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_generate_api_module() {
    let dir = TempDir::new().unwrap();
    harpgen(&dir)
        .args(["generate", "module", "invoices"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The module has been generated at modules/invoices.",
        ))
        .stdout(predicate::str::contains("modules/invoices/invoice.routes.ts"));

    let module = dir.path().join("modules/invoices");
    assert!(module.join("controllers/destroy.ts").is_file());
    assert!(module.join("validations/example.ts").is_file());
    assert!(!module.join("pages").exists());
}

#[test]
fn test_mode_env_selects_fullstack() {
    let dir = TempDir::new().unwrap();
    harpgen(&dir)
        .env("MODE", "fullstack")
        .args(["generate", "module", "billing/invoice"])
        .assert()
        .success();

    let module = dir.path().join("modules/billing/invoice");
    assert!(module.join("pages/list/page.html").is_file());
    assert!(module.join("controllers/edit.ts").is_file());
}

#[test]
fn test_root_flag_targets_another_directory() {
    let dir = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    harpgen(&dir)
        .arg("generate")
        .arg("seed")
        .arg("users")
        .arg("--root")
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The file has been generated at app/database/seeds/users.seed.ts.",
        ));

    assert!(project.path().join("app/database/seeds/users.seed.ts").is_file());
    assert!(!dir.path().join("app").exists());
}

#[test]
fn test_config_file_sets_naming() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("custom.toml");
    write(&config, "[generator]\nnaming = \"pascal\"\n");

    harpgen(&dir)
        .arg("--config-file")
        .arg(&config)
        .args(["generate", "validation", "amount", "--module", "invoice"])
        .assert()
        .success();

    assert!(dir.path().join("modules/invoice/validations/Amount.ts").is_file());
}

#[test]
fn test_dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    harpgen(&dir)
        .args(["generate", "module", "invoices", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("modules/invoices/index.ts"));

    assert!(!dir.path().join("modules").exists());
}

#[test]
fn test_session_bundle() {
    let dir = TempDir::new().unwrap();
    harpgen(&dir)
        .args([
            "generate",
            "--config",
            "session",
            "--model",
            "Account",
            "--identifier-field",
            "username",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The files have been generated at modules/session, app/config/session.ts \
             and app/middlewares/auth.ts.",
        ));

    let validate =
        fs::read_to_string(dir.path().join("modules/session/validations/validate-user.ts"))
            .unwrap();
    assert!(validate.contains("Account"));
    assert!(validate.contains("username"));
    assert!(dir.path().join("app/middlewares/auth.ts").is_file());
}

#[test]
fn test_generate_json_output() {
    let dir = TempDir::new().unwrap();
    let out = harpgen(&dir)
        .args(["--output-format", "json", "generate", "task", "dailyReport"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["kind"], "task");
    assert_eq!(value["files"][0], "app/tasks/daily-report.ts");
}

#[test]
fn test_db_sync_and_id_type() {
    let dir = TempDir::new().unwrap();
    write(
        &dir.path().join("app/database/schema.prisma"),
        "model User {\n  id Int @id\n}\n\nmodel BlogPost {\n  id Int @id\n}\n",
    );
    write(
        &dir.path().join("prisma/schema.prisma"),
        "model User {\n  id String @id @default(uuid())\n}\n",
    );

    harpgen(&dir)
        .args(["db", "sync"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 model(s)"));

    let exports = fs::read_to_string(dir.path().join("app/database/index.ts")).unwrap();
    assert!(exports.contains("  user: User,"));
    assert!(exports.contains("  blogPost: BlogPost"));

    harpgen(&dir)
        .args(["db", "id-type", "User"])
        .assert()
        .success()
        .stdout(predicate::eq("string\n"));
}

#[test]
fn test_list_json_includes_every_builtin() {
    let dir = TempDir::new().unwrap();
    let out = harpgen(&dir)
        .args(["list", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 57);
    assert!(rows.iter().all(|r| r["origin"] == "builtin"));
}

#[test]
fn test_list_shows_project_overrides() {
    let dir = TempDir::new().unwrap();
    write(&dir.path().join(".harpgen/templates/seed.txt"), "// {{ name }}\n");

    harpgen(&dir)
        .args(["list", "--group", "seed", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("seed,seed,override,1"));
}

#[test]
fn test_override_is_used_for_generation() {
    let dir = TempDir::new().unwrap();
    write(
        &dir.path().join(".harpgen/templates/observer.txt"),
        "// observer for {{ name }}\n",
    );

    harpgen(&dir)
        .args(["generate", "observer", "user"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dir.path().join("app/observers/user.observer.ts")).unwrap(),
        "// observer for user\n"
    );
}

#[test]
fn test_init_local_then_config_get() {
    let dir = TempDir::new().unwrap();
    harpgen(&dir)
        .args(["init", "--local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration created"));

    assert!(dir.path().join("harpgen.toml").is_file());

    harpgen(&dir)
        .args(["config", "get", "generator.mode"])
        .assert()
        .success()
        .stdout(predicate::eq("api\n"));
}

#[test]
fn test_env_overrides_config_values() {
    let dir = TempDir::new().unwrap();
    harpgen(&dir)
        .env("HARPGEN_GENERATOR__NAMING", "pascal")
        .args(["config", "get", "generator.naming"])
        .assert()
        .success()
        .stdout(predicate::eq("pascal\n"));
}

#[test]
fn test_completions_bash() {
    let dir = TempDir::new().unwrap();
    harpgen(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("harpgen"));
}
