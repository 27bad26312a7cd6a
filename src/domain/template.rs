use std::collections::BTreeMap;

use super::AppError;

/// Named variables substituted into a template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateContext {
    pub variables: BTreeMap<String, String>,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }
}

/// Trait for rendering templates.
///
/// Keeps the template engine out of the domain layer.
pub trait TemplateRenderer {
    /// Render `template` with `context`; `template_name` is used for error reporting.
    fn render(
        &self,
        template: &str,
        context: &TemplateContext,
        template_name: &str,
    ) -> Result<String, AppError>;
}
