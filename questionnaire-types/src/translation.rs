use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::TranslationError;

/// Text and help text for one translatable element.
///
/// Keys may be spelled `text` or `:text` in the source document. An absent
/// key is `None`; a key set to null is `Some(None)` and clears the value on
/// [`merge`](Self::merge).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextOverride {
    #[serde(
        default,
        alias = ":text",
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub text: Option<Option<String>>,

    #[serde(
        default,
        alias = ":help_text",
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub help_text: Option<Option<String>>,
}

// Only called for keys that appear in the document.
fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl TextOverride {
    /// Create an override with base text and optional help text.
    pub fn new(text: impl Into<String>, help_text: Option<String>) -> Self {
        Self {
            text: Some(Some(text.into())),
            help_text: Some(help_text),
        }
    }

    /// The text, if set and not cleared.
    pub fn text(&self) -> Option<&str> {
        self.text.as_ref().and_then(|t| t.as_deref())
    }

    /// The help text, if set and not cleared.
    pub fn help_text(&self) -> Option<&str> {
        self.help_text.as_ref().and_then(|t| t.as_deref())
    }

    /// Overlay `other` onto this one. Keys present in `other` win, even when null.
    pub fn merge(mut self, other: &TextOverride) -> Self {
        if let Some(text) = &other.text {
            self.text = Some(text.clone());
        }
        if let Some(help_text) = &other.help_text {
            self.help_text = Some(help_text.clone());
        }
        self
    }
}

/// All overrides for a single locale of a survey.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranslationTable {
    #[serde(default, alias = ":title", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, alias = ":description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Question overrides keyed by reference identifier.
    #[serde(default, alias = ":questions")]
    pub questions: BTreeMap<String, TextOverride>,

    /// Question group overrides keyed by reference identifier.
    #[serde(default, alias = ":question_groups")]
    pub question_groups: BTreeMap<String, TextOverride>,
}

impl TranslationTable {
    /// Parse a translation table from a YAML document.
    ///
    /// An empty document yields an empty table.
    pub fn from_yaml(locale: &str, yaml: &str) -> Result<Self, TranslationError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|source| TranslationError::Yaml {
            locale: locale.to_string(),
            source,
        })
    }

    /// Get the override for a question by reference identifier.
    pub fn question(&self, reference: &str) -> Option<&TextOverride> {
        self.questions.get(reference)
    }

    /// Get the override for a question group by reference identifier.
    pub fn question_group(&self, reference: &str) -> Option<&TextOverride> {
        self.question_groups.get(reference)
    }
}
