use super::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a template in the catalogue, e.g. `controller/api/store`.
///
/// ## Constraints
///
/// - Non-empty `/`-separated segments
/// - Segments use `[a-z0-9_-]` only
/// - No extension; stores map `<id>.txt` files to ids
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TemplateId(String);

impl TemplateId {
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let id = s.trim();
        let valid_segment = |seg: &str| {
            !seg.is_empty()
                && seg
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
        };
        if id.is_empty() || !id.split('/').all(valid_segment) {
            return Err(DomainError::InvalidTemplateId { id: s.to_string() });
        }
        Ok(Self(id.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First segment, used to group the catalogue (`controller`, `auth`, ...).
    pub fn group(&self) -> &str {
        self.0.split('/').next().unwrap_or_default()
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for TemplateId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TemplateId> for String {
    fn from(id: TemplateId) -> Self {
        id.0
    }
}

impl AsRef<str> for TemplateId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
