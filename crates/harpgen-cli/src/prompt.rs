//! Interactive prompts for arguments left off the command line.
//!
//! Prompts only run when both stdin and stdout are terminals. Builds without
//! the `interactive` feature report [`CliError::FeatureNotAvailable`] instead.

use std::io::IsTerminal;

use harpgen_core::domain::GenerateKind;

use crate::error::{CliError, CliResult};

/// Whether a human is attached to answer prompts.
pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
}

#[cfg(feature = "interactive")]
mod imp {
    use dialoguer::{Input, Select, theme::ColorfulTheme};

    use super::*;

    pub fn select_kind() -> CliResult<GenerateKind> {
        let labels: Vec<&str> = GenerateKind::ALL.iter().map(|k| k.as_str()).collect();

        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("What do you want to generate?")
            .items(&labels[..])
            .default(0)
            .interact_opt()
            .map_err(prompt_error)?;

        choice
            .map(|index| GenerateKind::ALL[index])
            .ok_or(CliError::Cancelled)
    }

    pub fn text(prompt: &str) -> CliResult<String> {
        Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .interact_text()
            .map_err(prompt_error)
    }

    pub fn text_with_default(prompt: &str, default: &str) -> CliResult<String> {
        Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(default.to_string())
            .interact_text()
            .map_err(prompt_error)
    }

    fn prompt_error(err: dialoguer::Error) -> CliError {
        CliError::InvalidInput {
            message: format!("prompt failed: {err}"),
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(not(feature = "interactive"))]
mod imp {
    use super::*;

    pub fn select_kind() -> CliResult<GenerateKind> {
        Err(CliError::FeatureNotAvailable {
            feature: "interactive",
        })
    }

    pub fn text(_prompt: &str) -> CliResult<String> {
        Err(CliError::FeatureNotAvailable {
            feature: "interactive",
        })
    }

    pub fn text_with_default(_prompt: &str, _default: &str) -> CliResult<String> {
        Err(CliError::FeatureNotAvailable {
            feature: "interactive",
        })
    }
}

/// Ask which kind to generate.
pub fn select_kind() -> CliResult<GenerateKind> {
    imp::select_kind()
}

/// Ask for a free-text value.
pub fn text(prompt: &str) -> CliResult<String> {
    imp::text(prompt)
}

/// Ask for a free-text value, pre-filled with `default`.
pub fn text_with_default(prompt: &str, default: &str) -> CliResult<String> {
    imp::text_with_default(prompt, default)
}

#[cfg(all(test, not(feature = "interactive")))]
mod tests {
    use super::*;

    #[test]
    fn prompts_need_the_interactive_feature() {
        assert!(matches!(
            select_kind(),
            Err(CliError::FeatureNotAvailable { .. })
        ));
        assert!(matches!(
            text("Name"),
            Err(CliError::FeatureNotAvailable { .. })
        ));
        assert!(matches!(
            text_with_default("Model", "User"),
            Err(CliError::FeatureNotAvailable { .. })
        ));
    }
}
