use std::fmt;

use serde::{Deserialize, Serialize};

/// A free-form presentation tag such as `"default"`, `"stars"` or `"image"`.
///
/// Display types compose hierarchically with their group's style, so the
/// vocabulary is left open.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayType(String);

impl DisplayType {
    pub const DEFAULT: &'static str = "default";
    pub const INLINE: &'static str = "inline";
    pub const STARS: &'static str = "stars";
    pub const IMAGE: &'static str = "image";
    pub const HIDDEN_LABEL: &'static str = "hidden_label";

    /// Create a display type from anything printable.
    pub fn new(value: impl ToString) -> Self {
        Self(value.to_string())
    }

    /// Get the tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if the tag is empty or whitespace.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Check if this tag equals the given name.
    pub fn is(&self, name: &str) -> bool {
        self.0 == name
    }
}

impl fmt::Display for DisplayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DisplayType {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for DisplayType {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for DisplayType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
