use std::fmt;

use crate::{DisplayType, Question, QuestionGroup, SurveyCatalog};

/// The resolved rendering tag for a question or group, e.g. `inline_default`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Renderer(String);

impl Renderer {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// The fallback renderer.
    pub fn default_renderer() -> Self {
        Self::new(DisplayType::DEFAULT)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for Renderer {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl QuestionGroup {
    /// The group's renderer: its display type, or `default` when blank.
    pub fn renderer(&self) -> Renderer {
        match &self.display_type {
            Some(display_type) if !display_type.is_blank() => Renderer::new(display_type.as_str()),
            _ => Renderer::default_renderer(),
        }
    }
}

impl Question {
    /// Resolve the renderer, prefixing the enclosing group's renderer.
    ///
    /// `stars` is never prefixed. Pass the group the question belongs to (or
    /// another group to render it as if it were a member).
    pub fn renderer(&self, group: Option<&QuestionGroup>) -> Renderer {
        if self.has_display_type(DisplayType::STARS) {
            return Renderer::new(DisplayType::STARS);
        }
        let group_renderer = group.map(QuestionGroup::renderer);
        let joined = [
            group_renderer.as_ref().map(Renderer::as_str),
            self.display_type().map(DisplayType::as_str),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join("_");

        if joined.trim().is_empty() {
            Renderer::default_renderer()
        } else {
            Renderer(joined)
        }
    }
}

impl SurveyCatalog {
    /// Resolve a question's renderer using the group it belongs to.
    pub fn renderer_for(&self, question: &Question) -> Renderer {
        question.renderer(self.group_of(question))
    }
}
