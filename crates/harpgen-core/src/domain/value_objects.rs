//! Domain value objects: GenerateKind, Mode, FileNaming.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! This file's only job is to define the types, their string
//! representations, and their `FromStr` parsers.
//!
//! # Adding New Kinds
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Add a planning arm in `planner.rs` (the compiler points you there)

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── GenerateKind ─────────────────────────────────────────────────────────────

/// What a single `generate` invocation produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GenerateKind {
    Module,
    Controller,
    Test,
    Validation,
    Factory,
    Task,
    Seed,
    Observer,
    SessionBundle,
}

impl GenerateKind {
    /// Every kind, in the order they are offered to users.
    pub const ALL: [GenerateKind; 9] = [
        Self::Module,
        Self::Controller,
        Self::Test,
        Self::Validation,
        Self::Factory,
        Self::Task,
        Self::Seed,
        Self::Observer,
        Self::SessionBundle,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Module => "module",
            Self::Controller => "controller",
            Self::Test => "test",
            Self::Validation => "validation",
            Self::Factory => "factory",
            Self::Task => "task",
            Self::Seed => "seed",
            Self::Observer => "observer",
            Self::SessionBundle => "session",
        }
    }

    /// Kinds that are placed inside an existing module.
    pub const fn requires_module(self) -> bool {
        matches!(self, Self::Controller | Self::Test | Self::Validation)
    }

    /// Kinds whose name argument is optional.
    pub const fn takes_name(self) -> bool {
        !matches!(self, Self::SessionBundle)
    }
}

impl fmt::Display for GenerateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GenerateKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "module" | "modules" => Ok(Self::Module),
            "controller" | "controllers" => Ok(Self::Controller),
            "test" | "tests" => Ok(Self::Test),
            "validation" | "validations" => Ok(Self::Validation),
            "factory" | "factories" => Ok(Self::Factory),
            "task" | "tasks" => Ok(Self::Task),
            "seed" | "seeds" => Ok(Self::Seed),
            "observer" | "observers" => Ok(Self::Observer),
            "session" | "session-bundle" => Ok(Self::SessionBundle),
            other => Err(DomainError::UnknownKind(other.to_string())),
        }
    }
}

// ── Mode ─────────────────────────────────────────────────────────────────────

/// Application flavour the generated code targets.
///
/// `Fullstack` adds page-rendering controllers and HTML pages on top of the
/// JSON API surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Api,
    Fullstack,
}

impl Mode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::Fullstack => "fullstack",
        }
    }

    pub const fn is_fullstack(self) -> bool {
        matches!(self, Self::Fullstack)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "api" => Ok(Self::Api),
            "fullstack" => Ok(Self::Fullstack),
            other => Err(DomainError::UnknownMode(other.to_string())),
        }
    }
}

// ── FileNaming ───────────────────────────────────────────────────────────────

/// File-name convention for generated entity files.
///
/// Applies to role and entity stems (`store.ts` vs `Store.ts`). Barrel files
/// (`index.ts`) and suffixed files (`.spec.ts`, `.seed.ts`, `.observer.ts`,
/// `.routes.ts`) stay kebab regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileNaming {
    #[default]
    Kebab,
    Pascal,
}

impl FileNaming {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Kebab => "kebab",
            Self::Pascal => "pascal",
        }
    }

    /// Apply the convention to a file stem.
    pub fn apply(self, stem: &str) -> String {
        match self {
            Self::Kebab => crate::domain::naming::to_kebab(stem),
            Self::Pascal => crate::domain::naming::to_pascal(stem),
        }
    }
}

impl fmt::Display for FileNaming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileNaming {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kebab" | "kebab-case" => Ok(Self::Kebab),
            "pascal" | "pascalcase" | "pascal-case" => Ok(Self::Pascal),
            other => Err(DomainError::UnknownNaming(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parses_singular_and_plural() {
        assert_eq!("module".parse::<GenerateKind>().unwrap(), GenerateKind::Module);
        assert_eq!("Seeds".parse::<GenerateKind>().unwrap(), GenerateKind::Seed);
        assert_eq!(
            "session".parse::<GenerateKind>().unwrap(),
            GenerateKind::SessionBundle
        );
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let err = "widget".parse::<GenerateKind>().unwrap_err();
        assert_eq!(err, DomainError::UnknownKind("widget".into()));
    }

    #[test]
    fn kind_round_trips_through_display() {
        for kind in GenerateKind::ALL {
            assert_eq!(kind.to_string().parse::<GenerateKind>().unwrap(), kind);
        }
    }

    #[test]
    fn mode_defaults_to_api() {
        assert_eq!(Mode::default(), Mode::Api);
        assert!("FULLSTACK".parse::<Mode>().unwrap().is_fullstack());
        assert!("desktop".parse::<Mode>().is_err());
    }

    #[test]
    fn file_naming_applies_convention() {
        assert_eq!(FileNaming::Kebab.apply("ValidateUser"), "validate-user");
        assert_eq!(FileNaming::Pascal.apply("validate-user"), "ValidateUser");
        assert_eq!(FileNaming::default(), FileNaming::Kebab);
    }
}
