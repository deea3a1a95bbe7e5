//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use harpgen_core::domain::{FileNaming, Mode};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "harpgen",
    bin_name = "harpgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Module and file scaffolding for harpia applications",
    long_about = "harpgen generates modules, controllers, validations, tests, \
                  factories, seeds, tasks, observers and the session bundle \
                  for harpia TypeScript projects.",
    after_help = "EXAMPLES:\n\
        \x20 harpgen generate module billing/invoices\n\
        \x20 harpgen generate controller export --module invoices\n\
        \x20 harpgen generate --config session --model Account\n\
        \x20 harpgen db sync\n\
        \x20 harpgen completions bash > /usr/share/bash-completion/completions/harpgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a module, a single file, or a configuration bundle.
    #[command(
        visible_alias = "g",
        about = "Generate files from templates",
        after_help = "KINDS:\n\
            \x20 module, controller, test, validation, factory, task, seed, observer, session\n\n\
            EXAMPLES:\n\
            \x20 harpgen generate module invoices --mode fullstack\n\
            \x20 harpgen generate validation amount --module invoices --naming pascal\n\
            \x20 harpgen generate seed users --dry-run"
    )]
    Generate(GenerateArgs),

    /// Database helpers.
    #[command(
        about = "Database helpers",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 harpgen db sync\n\
            \x20 harpgen db id-type User"
    )]
    Db(DbCommands),

    /// List available templates.
    #[command(
        visible_alias = "ls",
        about = "List available templates",
        after_help = "EXAMPLES:\n\
            \x20 harpgen list\n\
            \x20 harpgen list --group controller\n\
            \x20 harpgen list --format json"
    )]
    List(ListArgs),

    /// Initialise a harpgen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 harpgen init           # default location\n\
            \x20 harpgen init --local   # ./harpgen.toml"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 harpgen completions bash > ~/.local/share/bash-completion/completions/harpgen\n\
            \x20 harpgen completions zsh  > ~/.zfunc/_harpgen\n\
            \x20 harpgen completions fish > ~/.config/fish/completions/harpgen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the harpgen configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 harpgen config get generator.mode\n\
            \x20 harpgen config list\n\
            \x20 harpgen config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `harpgen generate`.
#[derive(Debug, Default, Args)]
pub struct GenerateArgs {
    /// What to generate. Prompted for when omitted.
    #[arg(value_name = "KIND", help = "Kind to generate (module, controller, ...)")]
    pub kind: Option<String>,

    /// Name of the module or file. Module names may nest: `billing/invoices`.
    #[arg(value_name = "NAME", help = "Name to generate")]
    pub name: Option<String>,

    /// Generate a configuration bundle instead of a kind.
    #[arg(
        long = "config",
        value_name = "BUNDLE",
        value_enum,
        conflicts_with = "kind",
        help = "Generate a configuration bundle"
    )]
    pub config: Option<ConfigBundle>,

    /// Module that receives a controller, test or validation.
    #[arg(
        short = 'm',
        long = "module",
        value_name = "MODULE",
        help = "Target module (controller, test, validation)"
    )]
    pub module: Option<String>,

    /// Application mode; overrides `MODE` and the configuration file.
    #[arg(long = "mode", value_enum, help = "Application mode")]
    pub mode: Option<ModeArg>,

    /// File naming convention for generated files.
    #[arg(long = "naming", value_enum, help = "File naming convention")]
    pub naming: Option<NamingArg>,

    /// Project root (default: configuration, then the current directory).
    #[arg(short = 'r', long = "root", value_name = "DIR", help = "Project root")]
    pub root: Option<PathBuf>,

    /// Model holding the login fields (session bundle).
    #[arg(long = "model", value_name = "MODEL", help = "Login model (session)")]
    pub model: Option<String>,

    /// Field used to log in (session bundle).
    #[arg(
        long = "identifier-field",
        value_name = "FIELD",
        help = "Login field (session)"
    )]
    pub identifier_field: Option<String>,

    /// List the files that would be written without writing them.
    #[arg(long = "dry-run", help = "Show what would be generated")]
    pub dry_run: bool,
}

/// Bundles selectable with `generate --config`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfigBundle {
    /// Cookie session config, auth middleware and the session module.
    Session,
}

/// `--mode` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Api,
    Fullstack,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Api => Mode::Api,
            ModeArg::Fullstack => Mode::Fullstack,
        }
    }
}

/// `--naming` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NamingArg {
    /// `create-user.ts`
    Kebab,
    /// `CreateUser.ts`
    Pascal,
}

impl From<NamingArg> for FileNaming {
    fn from(arg: NamingArg) -> Self {
        match arg {
            NamingArg::Kebab => FileNaming::Kebab,
            NamingArg::Pascal => FileNaming::Pascal,
        }
    }
}

// ── db ────────────────────────────────────────────────────────────────────────

/// Subcommands for `harpgen db`.
#[derive(Debug, Subcommand)]
pub enum DbCommands {
    /// Regenerate `app/database/index.ts` from the schema's models.
    Sync {
        /// Project root.
        #[arg(short = 'r', long = "root", value_name = "DIR")]
        root: Option<PathBuf>,
    },
    /// Print the TypeScript type of a model's `@id` field.
    IdType {
        /// Model name as written in the schema, e.g. `User`.
        model: String,

        /// Project root.
        #[arg(short = 'r', long = "root", value_name = "DIR")]
        root: Option<PathBuf>,
    },
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `harpgen list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only templates whose id starts with this group, e.g. `controller`.
    #[arg(short = 'g', long = "group", help = "Filter by template group")]
    pub group: Option<String>,

    /// Project root whose override directory is included.
    #[arg(short = 'r', long = "root", value_name = "DIR", help = "Project root")]
    pub root: Option<PathBuf>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One id per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `harpgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `harpgen.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `harpgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `harpgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `generator.mode`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
