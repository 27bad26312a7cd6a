use minijinja::{Environment, UndefinedBehavior};
use std::sync::OnceLock;

use crate::domain::{AppError, TemplateContext, TemplateRenderer};

/// Template renderer using Minijinja.
///
/// Only `{{ Name }}` substitution is allowed; block and comment tags are rejected.
#[derive(Debug, Default)]
pub struct MinijinjaTemplateRenderer;

impl MinijinjaTemplateRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for MinijinjaTemplateRenderer {
    fn render(
        &self,
        template: &str,
        context: &TemplateContext,
        template_name: &str,
    ) -> Result<String, AppError> {
        if let Some(token) = disallowed_template_token(template) {
            return Err(AppError::template_render(
                template_name,
                format!("only {{{{ Name }}}} placeholders are supported, found '{}'", token),
            ));
        }

        let env = ENV.get_or_init(|| {
            let mut env = Environment::new();
            env.set_undefined_behavior(UndefinedBehavior::Strict);
            env.set_keep_trailing_newline(true);
            env
        });

        env.render_str(template, &context.variables)
            .map_err(|err| AppError::template_render(template_name, err))
    }
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

fn disallowed_template_token(template: &str) -> Option<&'static str> {
    if template.contains("{%") {
        return Some("{%");
    }
    if template.contains("{#") {
        return Some("{#");
    }
    None
}
