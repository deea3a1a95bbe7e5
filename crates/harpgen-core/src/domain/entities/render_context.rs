use serde::Serialize;
use std::collections::BTreeMap;

/// Variables handed to the template engine for one file.
///
/// A value object: `with_variable` consumes and returns a new context.
/// Serializes as a flat map, so `{{ name }}` in a template resolves
/// directly against the variables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RenderContext {
    variables: BTreeMap<String, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable, consuming self and returning the extended context.
    ///
    /// ```rust
    /// use harpgen_core::domain::RenderContext;
    ///
    /// let ctx = RenderContext::new()
    ///     .with_variable("module", "invoice")
    ///     .with_variable("name", "report");
    /// assert_eq!(ctx.get("name"), Some("report"));
    /// ```
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Insert only if the key is not set yet.
    pub fn with_default(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.entry(key.into()).or_insert_with(|| value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.variables.contains_key(key)
    }

    pub fn variables(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
