//! Jinja2-compatible template rendering
//!
//! Renders the Terraform variables file from a Jinja template, the same
//! syntax the course repositories have always used for `*.jj2` files.

pub mod context;

pub use context::{RenderContext, build_context};

use crate::CourseError;
use minijinja::Environment;
use serde::Serialize;
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Render a template string with a serializable context
pub fn render_template_with_context<C: Serialize>(
    template: &str,
    context: &C,
) -> Result<String, CourseError> {
    debug!("Rendering Jinja template");

    let mut env = Environment::new();

    env.add_template("template", template)
        .map_err(|e| CourseError::Template(format!("Template parse error: {}", e)))?;

    let tmpl = env
        .get_template("template")
        .map_err(|e| CourseError::Template(format!("Template error: {}", e)))?;

    tmpl.render(context)
        .map_err(|e| CourseError::Template(format!("Template render error: {}", e)))
}

/// Load a template file and render it
pub async fn render_template_file<C: Serialize>(
    path: impl AsRef<Path>,
    context: &C,
) -> Result<String, CourseError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).await.map_err(|e| {
        CourseError::Template(format!("Cannot read template {}: {}", path.display(), e))
    })?;

    render_template_with_context(&source, context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CourseConfig;
    use crate::network::NetworkInfo;

    fn test_context() -> RenderContext {
        let config = CourseConfig::new("2").with_cluster_prefix("demo");
        let network = NetworkInfo {
            id: "abc-123".to_string(),
            name: "Public External IPv4 network".to_string(),
        };
        build_context(&config, 2, &network)
    }

    #[test]
    fn test_render_simple_template() {
        let template = "cluster_prefix = \"{{ cluster_prefix }}\"\nnode_count = {{ node_count }}";
        let rendered = render_template_with_context(template, &test_context()).unwrap();
        assert_eq!(rendered, "cluster_prefix = \"demo\"\nnode_count = 2");
    }

    #[test]
    fn test_render_network_variables() {
        let template = "external_network_id = \"{{ external_network_id }}\"";
        let rendered = render_template_with_context(template, &test_context()).unwrap();
        assert_eq!(rendered, "external_network_id = \"abc-123\"");
    }

    #[test]
    fn test_render_conditional() {
        let template = "{% if master_disk_size > 0 %}disk{% else %}ephemeral{% endif %}";
        let rendered = render_template_with_context(template, &test_context()).unwrap();
        assert_eq!(rendered, "ephemeral");
    }

    #[test]
    fn test_render_missing_variable() {
        // minijinja treats missing as empty string by default
        let rendered = render_template_with_context("[{{ missing_var }}]", &test_context());
        assert_eq!(rendered.unwrap(), "[]");
    }

    #[test]
    fn test_render_invalid_syntax() {
        let result = render_template_with_context("value: {{ invalid", &test_context());
        assert!(matches!(result, Err(CourseError::Template(_))));
    }

    #[tokio::test]
    async fn test_render_template_file_missing() {
        let result = render_template_file("/nonexistent/config.tfvars.jj2", &test_context()).await;
        assert!(matches!(result, Err(CourseError::Template(_))));
    }
}
