//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `MODE` environment variable (`generator.mode` only)
//! 3. `HARPGEN_*` environment variables, `__` separating sections
//!    (`HARPGEN_GENERATOR__NAMING=pascal`)
//! 4. `./harpgen.toml`
//! 5. The user config file ([`AppConfig::config_path`]) or `--config-file`
//! 6. Built-in defaults

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use harpgen_core::domain::{FileNaming, Mode};

use crate::error::{CliError, CliResult};

/// File name used by `harpgen init --local`.
pub const LOCAL_CONFIG_FILE: &str = "harpgen.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Generation defaults.
    pub generator: GeneratorConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// `api` or `fullstack`.
    pub mode: String,
    /// `kebab` or `pascal`.
    pub naming: String,
    /// Project root used when `--root` is not given.
    pub project_root: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default().as_str().into(),
            naming: FileNaming::default().as_str().into(),
            project_root: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`; `--output-format` wins.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Override directory, relative to the project root unless absolute.
    pub local_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from defaults, files and the environment.
    ///
    /// An explicit `config_file` must exist; the default locations are
    /// optional.
    pub fn load(config_file: Option<&Path>) -> CliResult<Self> {
        let defaults = Config::try_from(&Self::default())
            .map_err(|e| config_error("Failed to build default configuration", e))?;

        let mut builder = Config::builder().add_source(defaults);

        builder = match config_file {
            Some(path) => {
                debug!(path = %path.display(), "Using explicit config file");
                builder.add_source(File::from(path).format(FileFormat::Toml).required(true))
            }
            None => builder
                .add_source(
                    File::from(Self::config_path())
                        .format(FileFormat::Toml)
                        .required(false),
                )
                .add_source(
                    File::from(Path::new(LOCAL_CONFIG_FILE))
                        .format(FileFormat::Toml)
                        .required(false),
                ),
        };

        let mode = std::env::var("MODE").ok().filter(|m| !m.trim().is_empty());

        let settings = builder
            .add_source(
                Environment::with_prefix("HARPGEN")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_override_option("generator.mode", mode)
            .and_then(|b| b.build())
            .map_err(|e| config_error("Failed to load configuration", e))?;

        settings
            .try_deserialize()
            .map_err(|e| config_error("Invalid configuration", e))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `harpgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "harpia", "harpgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Configured mode, validated.
    pub fn mode(&self) -> CliResult<Mode> {
        self.generator
            .mode
            .parse()
            .map_err(|e| config_error("generator.mode", e))
    }

    /// Configured file naming, validated.
    pub fn naming(&self) -> CliResult<FileNaming> {
        self.generator
            .naming
            .parse()
            .map_err(|e| config_error("generator.naming", e))
    }

    /// Look up a dotted key such as `generator.mode`.
    ///
    /// Returns `None` for unknown keys and unset optional values.
    pub fn get_value(&self, key: &str) -> CliResult<Option<String>> {
        let root = toml::Value::try_from(self)
            .map_err(|e| config_error("Failed to serialise configuration", e))?;

        let value = key
            .split('.')
            .try_fold(&root, |node, segment| node.get(segment));

        Ok(value.map(|v| match v {
            toml::Value::String(s) => s.clone(),
            other => other.to_string(),
        }))
    }

    /// Render the configuration as TOML.
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| config_error("Failed to serialise configuration", e))
    }
}

fn config_error(
    context: &str,
    source: impl std::error::Error + Send + Sync + 'static,
) -> CliError {
    CliError::ConfigError {
        message: format!("{context}: {source}"),
        source: Some(Box::new(source)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_are_api_and_kebab() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.mode().unwrap(), Mode::Api);
        assert_eq!(cfg.naming().unwrap(), FileNaming::Kebab);
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let file = write_config(
            "[generator]\nnaming = \"pascal\"\n\n[templates]\nlocal_path = \"stubs\"\n",
        );
        let cfg = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(cfg.naming().unwrap(), FileNaming::Pascal);
        assert_eq!(cfg.templates.local_path, Some(PathBuf::from("stubs")));
        // Untouched sections keep their defaults.
        assert_eq!(cfg.output.format, "auto");
    }

    #[test]
    fn missing_explicit_file_is_a_config_error() {
        let err = AppConfig::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn invalid_mode_is_reported_on_access() {
        let mut cfg = AppConfig::default();
        cfg.generator.mode = "desktop".into();
        let err = cfg.mode().unwrap_err();
        assert!(matches!(err, CliError::ConfigError { .. }));
    }

    #[test]
    fn get_value_walks_dotted_keys() {
        let cfg = AppConfig::default();
        assert_eq!(
            cfg.get_value("generator.mode").unwrap().as_deref(),
            Some("api")
        );
        assert_eq!(
            cfg.get_value("output.no_color").unwrap().as_deref(),
            Some("false")
        );
        assert_eq!(cfg.get_value("generator.nope").unwrap(), None);
        assert_eq!(cfg.get_value("templates.local_path").unwrap(), None);
    }

    #[test]
    fn toml_round_trips_through_load() {
        let mut cfg = AppConfig::default();
        cfg.generator.mode = "fullstack".into();
        let file = write_config(&cfg.to_toml().unwrap());

        let loaded = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(loaded.generator.mode, "fullstack");
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
