use std::fmt;

use crate::ResponseSet;

/// A condition deciding whether a question (or group) is shown.
///
/// Implementations evaluate their own rule grammar against the responses
/// collected so far. Any error they return is surfaced to the caller as-is.
pub trait Dependency: Send + Sync {
    /// Check whether the condition holds for the given responses.
    fn is_met(&self, responses: &ResponseSet) -> anyhow::Result<bool>;
}

impl fmt::Debug for dyn Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Dependency")
    }
}

/// Post-processes display text, e.g. by substituting template placeholders.
///
/// Passing no context leaves text unchanged.
pub trait Context: Send + Sync {
    /// Render `text` within this context.
    fn in_context(&self, text: &str) -> String;
}

/// Builds the markup for an image-type question label.
pub trait ImageMarkup: Send + Sync {
    /// Render an image reference for `src`, labelled with `alt`.
    fn image_tag(&self, src: &str, alt: &str) -> String;
}

/// Markup that leaves the image source as plain text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainImage;

impl ImageMarkup for PlainImage {
    fn image_tag(&self, src: &str, _alt: &str) -> String {
        src.to_string()
    }
}
