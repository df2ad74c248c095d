/// Error type for question operations.
#[derive(Debug, thiserror::Error)]
pub enum QuestionError {
    /// A "none"-pick question was asked about its first answer but has none.
    #[error("Question has no answers to classify")]
    MissingAnswer,

    /// Question text must be present and non-blank.
    #[error("Question text cannot be empty")]
    EmptyText,

    /// The pick mode is not one of "none", "any" or "one".
    #[error("Unknown pick mode: {0}")]
    UnknownPick(String),

    /// The response class is outside the known vocabulary.
    #[error("Unknown response class: {0}")]
    UnknownResponseClass(String),
}

impl QuestionError {
    /// Check if this error is a missing-answer failure.
    pub fn is_missing_answer(&self) -> bool {
        matches!(self, Self::MissingAnswer)
    }
}

/// Error type for loading locale translation tables.
#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    /// The YAML document for a locale could not be parsed.
    #[error("Invalid translation for locale '{locale}': {source}")]
    Yaml {
        locale: String,
        #[source]
        source: serde_yaml::Error,
    },
}
