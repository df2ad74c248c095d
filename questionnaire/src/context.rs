//! Mustache-style placeholder substitution for question text.

use handlebars::Handlebars;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::Context;

/// How unresolvable placeholders are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResolutionMode {
    /// Missing values render as empty strings.
    #[default]
    Relaxed,
    /// Missing values fail the render; the raw text is shown instead.
    Strict,
}

/// Errors raised while building a template context.
#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    #[error("Context data could not be serialized: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A [`Context`] that renders `{{placeholders}}` against JSON data.
///
/// Rendering never fails: if the template is malformed (or a value is missing
/// in strict mode) the text is returned unchanged and a warning is logged.
pub struct HandlebarsContext {
    handlebars: Handlebars<'static>,
    data: Value,
}

impl HandlebarsContext {
    /// Create a context over already-built JSON data.
    pub fn new(data: Value, mode: ResolutionMode) -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(mode == ResolutionMode::Strict);
        // Question text is not HTML-escaped here; the renderer owns escaping.
        handlebars.register_escape_fn(handlebars::no_escape);
        Self { handlebars, data }
    }

    /// Create a context from any serializable value.
    pub fn from_serializable(
        data: &impl Serialize,
        mode: ResolutionMode,
    ) -> Result<Self, ContextError> {
        Ok(Self::new(serde_json::to_value(data)?, mode))
    }

    /// The data placeholders are resolved against.
    pub fn data(&self) -> &Value {
        &self.data
    }
}

impl Context for HandlebarsContext {
    fn in_context(&self, text: &str) -> String {
        if !text.contains("{{") {
            return text.to_string();
        }
        match self.handlebars.render_template(text, &self.data) {
            Ok(rendered) => rendered,
            Err(err) => {
                warn!(%err, text, "template render failed, showing raw text");
                text.to_string()
            }
        }
    }
}

impl std::fmt::Debug for HandlebarsContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlebarsContext")
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn substitutes_placeholders() {
        let context = HandlebarsContext::new(json!({"name": "Alice"}), ResolutionMode::Relaxed);
        assert_eq!(context.in_context("Hello {{name}}!"), "Hello Alice!");
    }

    #[test]
    fn plain_text_untouched() {
        let context = HandlebarsContext::new(json!({}), ResolutionMode::Strict);
        assert_eq!(context.in_context("A|B"), "A|B");
    }

    #[test]
    fn no_html_escaping() {
        let context = HandlebarsContext::new(json!({"pet": "<cat>"}), ResolutionMode::Relaxed);
        assert_eq!(context.in_context("{{pet}}"), "<cat>");
    }

    #[test]
    fn relaxed_missing_value_is_empty() {
        let context = HandlebarsContext::new(json!({}), ResolutionMode::Relaxed);
        assert_eq!(context.in_context("Hi {{name}}"), "Hi ");
    }

    #[test]
    fn strict_missing_value_keeps_raw_text() {
        let context = HandlebarsContext::new(json!({}), ResolutionMode::Strict);
        assert_eq!(context.in_context("Hi {{name}}"), "Hi {{name}}");
    }

    #[test]
    fn malformed_template_keeps_raw_text() {
        let context = HandlebarsContext::new(json!({}), ResolutionMode::Relaxed);
        assert_eq!(context.in_context("Hi {{#if}}"), "Hi {{#if}}");
    }

    #[test]
    fn from_serializable_struct() {
        #[derive(Serialize)]
        struct Respondent {
            name: String,
        }

        let context = HandlebarsContext::from_serializable(
            &Respondent {
                name: "Bob".to_string(),
            },
            ResolutionMode::Relaxed,
        )
        .unwrap();
        assert_eq!(context.in_context("{{name}}"), "Bob");
    }
}
