use crate::domain::{error::DomainError, naming::NameForms};

/// Centralized domain validation.
///
/// All name checks live here, not scattered across entities. Every check runs
/// before any path is built, so a rejected name never touches the disk.
pub struct DomainValidator;

impl DomainValidator {
    /// A module name: one or more `/`-separated segments.
    ///
    /// Rejects empty input, `.`/`..`/empty segments, backslashes, leading
    /// `/` and drive prefixes (`C:`), and a leaf with no usable word.
    pub fn validate_module_path(raw: &str) -> Result<(), DomainError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(DomainError::EmptyName);
        }
        Self::reject_absolute(raw)?;

        for segment in raw.split('/') {
            match segment.trim() {
                "" => return Err(traversal(raw, "empty path segment")),
                "." => return Err(traversal(raw, "'.' is not allowed")),
                ".." => return Err(traversal(raw, "'..' is not allowed")),
                _ => {}
            }
        }

        Self::validate_leaf(raw, raw.rsplit('/').next().unwrap_or_default())
    }

    /// A single file's entity name. Never nests.
    pub fn validate_entity_name(raw: &str) -> Result<(), DomainError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(DomainError::EmptyName);
        }
        Self::reject_absolute(raw)?;
        if raw.contains('/') {
            return Err(traversal(raw, "only module names may contain '/'"));
        }
        if raw == "." || raw == ".." {
            return Err(traversal(raw, "name must not be a relative path marker"));
        }
        Self::validate_leaf(raw, raw)
    }

    /// A code identifier substituted into templates (model, field).
    pub fn validate_identifier(what: &str, value: &str) -> Result<(), DomainError> {
        let valid = value
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
            && value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
        if valid {
            Ok(())
        } else {
            Err(DomainError::InvalidIdentifier {
                what: what.to_string(),
                value: value.to_string(),
            })
        }
    }

    fn reject_absolute(raw: &str) -> Result<(), DomainError> {
        if raw.contains('\\') {
            return Err(traversal(raw, "backslashes are not allowed"));
        }
        let bytes = raw.as_bytes();
        let drive = bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':';
        if raw.starts_with('/') || drive {
            return Err(DomainError::AbsolutePathNotAllowed {
                path: raw.to_string(),
            });
        }
        Ok(())
    }

    fn validate_leaf(raw: &str, leaf: &str) -> Result<(), DomainError> {
        if NameForms::new(leaf.trim()).is_empty() {
            return Err(DomainError::EmptyLeafName {
                raw: raw.to_string(),
            });
        }
        Ok(())
    }
}

fn traversal(raw: &str, reason: &str) -> DomainError {
    DomainError::PathTraversal {
        raw: raw.to_string(),
        reason: reason.to_string(),
    }
}
