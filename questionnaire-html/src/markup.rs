//! HTML markup for question labels and groups.

use questionnaire::{
    Context, DisplayType, ImageMarkup, Presenter, Question, QuestionGroup, QuestionnaireConfig,
    ResponseSet, TextPosition,
};
use tracing::debug;

/// Options for HTML generation.
#[derive(Debug, Clone, Default)]
pub struct HtmlOptions {
    /// Custom CSS class prefix for all generated elements.
    pub class_prefix: String,
    /// Prefix for relative image sources.
    pub asset_prefix: Option<String>,
    /// Whether to emit help text below the label.
    pub include_help: bool,
}

impl HtmlOptions {
    /// Create new options with default values.
    pub fn new() -> Self {
        Self {
            class_prefix: "survey".to_string(),
            asset_prefix: None,
            include_help: true,
        }
    }

    /// Options taking the asset prefix from the presentation config.
    pub fn from_config(config: &QuestionnaireConfig) -> Self {
        Self {
            asset_prefix: config.asset_prefix.clone(),
            ..Self::new()
        }
    }

    /// Set a custom CSS class prefix.
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    /// Set the prefix for relative image sources.
    pub fn with_asset_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.asset_prefix = Some(prefix.into());
        self
    }

    /// Enable or disable help text.
    pub fn with_help(mut self, include: bool) -> Self {
        self.include_help = include;
        self
    }

    /// Image markup using these options.
    pub fn image_tag(&self) -> HtmlImageTag {
        HtmlImageTag {
            asset_prefix: self.asset_prefix.clone(),
        }
    }
}

/// Emits `<img>` tags for `image` questions.
#[derive(Debug, Clone, Default)]
pub struct HtmlImageTag {
    asset_prefix: Option<String>,
}

impl HtmlImageTag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_asset_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.asset_prefix = Some(prefix.into());
        self
    }

    fn resolve(&self, src: &str) -> String {
        match &self.asset_prefix {
            Some(prefix) if !src.starts_with('/') && !src.contains("://") => {
                format!("{}/{}", prefix.trim_end_matches('/'), src)
            }
            _ => src.to_string(),
        }
    }
}

impl ImageMarkup for HtmlImageTag {
    fn image_tag(&self, src: &str, alt: &str) -> String {
        format!(
            "<img src=\"{}\" alt=\"{}\" />",
            escape_html(&self.resolve(src)),
            escape_html(alt)
        )
    }
}

/// Generate the HTML fragment for one question.
///
/// The wrapper carries the question's renderer and its presentation classes,
/// so a hidden dependent question is still emitted (with `q_hidden`) for
/// client-side toggling. Dependency errors are returned unchanged.
pub fn question_html(
    presenter: &Presenter<'_>,
    question: &Question,
    responses: &ResponseSet,
    context: Option<&dyn Context>,
    locale: Option<&str>,
    options: &HtmlOptions,
) -> anyhow::Result<String> {
    let prefix = &options.class_prefix;
    let renderer = presenter.renderer(question);
    let classes = class_list(
        &format!("{prefix}-question"),
        &presenter.css_class(question, responses)?,
    );

    let mut html = format!(
        "<div class=\"{}\" data-renderer=\"{}\">\n",
        escape_html(&classes),
        escape_html(renderer.as_str())
    );

    let pre = label_text(
        question,
        presenter.text_for(question, Some(TextPosition::Pre), context, locale),
    );
    if pre.is_empty() {
        debug!(text = question.text(), "label omitted");
    } else {
        let mandatory = if question.is_mandatory() {
            format!(" <abbr class=\"{prefix}-required\">*</abbr>")
        } else {
            String::new()
        };
        html.push_str(&format!(
            "  <label class=\"{prefix}-label\">{pre}{mandatory}</label>\n"
        ));
    }

    let post = label_text(
        question,
        presenter.text_for(question, Some(TextPosition::Post), context, locale),
    );
    if !post.is_empty() {
        html.push_str(&format!("  <span class=\"{prefix}-post\">{post}</span>\n"));
    }

    if options.include_help {
        let help = presenter.help_text_for(question, context, locale);
        if !help.trim().is_empty() {
            html.push_str(&format!(
                "  <p class=\"{prefix}-help\">{}</p>\n",
                escape_html(&help)
            ));
        }
    }

    html.push_str("</div>\n");
    Ok(html)
}

/// Generate the opening of a group's fieldset, with its legend and help text.
///
/// Callers emit the member questions and then `</fieldset>`.
pub fn group_open_html(
    presenter: &Presenter<'_>,
    group: &QuestionGroup,
    responses: &ResponseSet,
    context: Option<&dyn Context>,
    locale: Option<&str>,
    options: &HtmlOptions,
) -> anyhow::Result<String> {
    let prefix = &options.class_prefix;
    let classes = class_list(&format!("{prefix}-group"), &group.css_class(responses)?);
    let mut html = format!(
        "<fieldset class=\"{}\" data-renderer=\"{}\">\n",
        escape_html(&classes),
        escape_html(group.renderer().as_str())
    );

    let legend = presenter.group_text_for(group, context, locale);
    if !legend.trim().is_empty() {
        html.push_str(&format!(
            "  <legend class=\"{prefix}-legend\">{}</legend>\n",
            escape_html(&legend)
        ));
    }

    if options.include_help {
        let help = presenter.group_help_text_for(group, context, locale);
        if !help.trim().is_empty() {
            html.push_str(&format!(
                "  <p class=\"{prefix}-help\">{}</p>\n",
                escape_html(&help)
            ));
        }
    }

    Ok(html)
}

// Wrapped image labels are already markup; blank ones are left unwrapped.
fn label_text(question: &Question, text: String) -> String {
    if question.has_display_type(DisplayType::IMAGE) && !text.trim().is_empty() {
        text
    } else {
        escape_html(&text)
    }
}

fn class_list(base: &str, tags: &str) -> String {
    if tags.is_empty() {
        base.to_string()
    } else {
        format!("{base} {tags}")
    }
}

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
