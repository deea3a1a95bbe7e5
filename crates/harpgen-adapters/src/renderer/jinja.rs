//! minijinja-backed template renderer.

use harpgen_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::{FileNaming, RenderContext, TemplateId, naming},
    error::HarpgenResult,
};
use minijinja::{Environment, ErrorKind, UndefinedBehavior};
use tracing::{instrument, trace};

/// Renders templates with minijinja.
///
/// Undefined variables are an error rather than an empty string, so a
/// template that references a missing context key fails loudly. The naming
/// helpers are registered as filters: `{{ name | pascal_case }}`, and
/// `{{ "store" | file_stem(naming) }}` spells a file stem the way the
/// planner named it on disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct MiniJinjaRenderer;

impl MiniJinjaRenderer {
    pub fn new() -> Self {
        Self
    }

    fn environment<'s>() -> Environment<'s> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.add_filter("pluralize", |value: String| naming::pluralize(&value));
        env.add_filter("singularize", |value: String| naming::singularize(&value));
        env.add_filter("pascal_case", |value: String| naming::to_pascal(&value));
        env.add_filter("camel_case", |value: String| naming::to_camel(&value));
        env.add_filter("kebab_case", |value: String| naming::to_kebab(&value));
        env.add_filter("snake_case", |value: String| naming::to_snake(&value));
        env.add_filter("file_stem", file_stem);
        env
    }
}

fn file_stem(value: String, convention: String) -> Result<String, minijinja::Error> {
    let convention: FileNaming = convention
        .parse()
        .map_err(|e: harpgen_core::domain::DomainError| {
            minijinja::Error::new(ErrorKind::InvalidOperation, e.to_string())
        })?;
    Ok(convention.apply(&value))
}

impl TemplateRenderer for MiniJinjaRenderer {
    #[instrument(skip(self, source, context), fields(template = %id))]
    fn render(
        &self,
        id: &TemplateId,
        source: &str,
        context: &RenderContext,
    ) -> HarpgenResult<String> {
        let failed = |e: minijinja::Error| ApplicationError::RenderingFailed {
            id: id.to_string(),
            reason: e.to_string(),
        };

        let mut env = Self::environment();
        env.add_template(id.as_str(), source).map_err(failed)?;
        let rendered = env
            .get_template(id.as_str())
            .and_then(|tmpl| tmpl.render(context))
            .map_err(failed)?;

        trace!(bytes = rendered.len(), "template rendered");
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use harpgen_core::error::HarpgenError;

    fn id(raw: &str) -> TemplateId {
        TemplateId::parse(raw).unwrap()
    }

    #[test]
    fn substitutes_variables_and_keeps_trailing_newline() {
        let ctx = RenderContext::new().with_variable("name", "invoice");
        let out = MiniJinjaRenderer::new()
            .render(&id("factory"), "export const {{ name }} = 1;\n", &ctx)
            .unwrap();
        assert_eq!(out, "export const invoice = 1;\n");
    }

    #[test]
    fn naming_filters_are_available() {
        let ctx = RenderContext::new().with_variable("name", "orderItem");
        let out = MiniJinjaRenderer::new()
            .render(
                &id("test"),
                "{{ name | pascal_case }} {{ name | kebab_case }} {{ name | snake_case }} \
                 {{ name | pluralize }} {{ 'people' | singularize }} {{ 'order-item' | camel_case }}",
                &ctx,
            )
            .unwrap();
        assert_eq!(out, "OrderItem order-item order_item orderItems person orderItem");
    }

    #[test]
    fn file_stem_follows_the_naming_convention() {
        let source = "./{{ 'check-password' | file_stem(naming) }}";
        let render = |naming: &str| {
            MiniJinjaRenderer::new()
                .render(
                    &id("auth/session/validations/index"),
                    source,
                    &RenderContext::new().with_variable("naming", naming),
                )
                .unwrap()
        };
        assert_eq!(render("kebab"), "./check-password");
        assert_eq!(render("pascal"), "./CheckPassword");
    }

    #[test]
    fn undefined_variable_fails() {
        let err = MiniJinjaRenderer::new()
            .render(&id("seed"), "{{ missing }}", &RenderContext::new())
            .unwrap_err();
        match err {
            HarpgenError::Application(ApplicationError::RenderingFailed { id, .. }) => {
                assert_eq!(id, "seed");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn syntax_error_fails() {
        let err = MiniJinjaRenderer::new()
            .render(&id("task"), "{% if %}", &RenderContext::new())
            .unwrap_err();
        assert!(matches!(
            err,
            HarpgenError::Application(ApplicationError::RenderingFailed { .. })
        ));
    }

    #[test]
    fn typescript_braces_pass_through() {
        let ctx = RenderContext::new().with_variable("name", "user");
        let out = MiniJinjaRenderer::new()
            .render(
                &id("observer"),
                "export default { created({ {{ name }} }) {} }\n",
                &ctx,
            )
            .unwrap();
        assert_eq!(out, "export default { created({ user }) {} }\n");
    }
}
