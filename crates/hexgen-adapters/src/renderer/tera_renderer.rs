//! Tera-backed template renderer.
//!
//! Templates are rendered one-off from in-memory sources; the renderer never
//! reads the filesystem or the environment, so identical inputs always give
//! identical output.

use std::error::Error as _;

use tera::{Context, Tera};

use hexgen_core::{
    application::{ApplicationError, ports::TemplateEngine},
    domain::RenderContext,
    error::HexgenResult,
};

/// Production renderer using the Tera template engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct TeraRenderer;

impl TeraRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateEngine for TeraRenderer {
    fn render(&self, name: &str, source: &str, context: &RenderContext) -> HexgenResult<String> {
        let ctx = Context::from_serialize(context).map_err(|e| {
            ApplicationError::RenderingFailed {
                template: name.to_string(),
                reason: format!("context serialization failed: {e}"),
            }
        })?;

        // Autoescape off: output is Python source, not HTML.
        Tera::one_off(source, &ctx, false).map_err(|e| {
            let reason = e
                .source()
                .map_or_else(|| e.to_string(), |cause| format!("{e}: {cause}"));
            ApplicationError::RenderingFailed {
                template: name.to_string(),
                reason,
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexgen_core::domain::{ActionSet, ModuleName};

    fn context() -> RenderContext {
        let name = ModuleName::parse("UserAccount").unwrap();
        RenderContext::new(&name, &ActionSet::all())
    }

    #[test]
    fn substitutes_both_name_forms() {
        let out = TeraRenderer::new()
            .render(
                "t",
                "class {{ model_pascal_case }}:  # table {{ model_snake_case }}",
                &context(),
            )
            .unwrap();
        assert_eq!(out, "class UserAccount:  # table user_account");
    }

    #[test]
    fn conditional_on_action_membership() {
        let src = "{% if \"create\" in actions %}yes{% else %}no{% endif %}";
        let out = TeraRenderer::new().render("t", src, &context()).unwrap();
        assert_eq!(out, "yes");
    }

    #[test]
    fn capitalize_filter_on_action() {
        let per_action = context().for_action("create");
        let out = TeraRenderer::new()
            .render("t", "class {{ action | capitalize }}UseCase:", &per_action)
            .unwrap();
        assert_eq!(out, "class CreateUseCase:");
    }

    #[test]
    fn same_inputs_same_output() {
        let src = "{% for a in actions %}{{ a }},{% endfor %}";
        let r = TeraRenderer::new();
        let first = r.render("t", src, &context()).unwrap();
        let second = r.render("t", src, &context()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, "create,list,retrieve,update,delete,");
    }

    #[test]
    fn broken_template_reports_name() {
        let err = TeraRenderer::new()
            .render("application/service.py", "{{ unclosed", &context())
            .unwrap_err();
        assert!(err.to_string().contains("application/service.py"));
    }
}
