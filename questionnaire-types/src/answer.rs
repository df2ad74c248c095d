use crate::ResponseClass;

/// One of the answers offered by a question.
#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    /// The answer label.
    pub text: String,

    /// Shorter label for exports and summaries.
    pub short_text: Option<String>,

    /// Stable key used by dependency rules and translations.
    pub reference_identifier: Option<String>,

    /// What kind of value this answer collects.
    pub response_class: ResponseClass,

    /// Stable external identifier.
    pub api_id: Option<String>,
}

impl Answer {
    /// Create a new answer with the given label and response class.
    pub fn new(text: impl Into<String>, response_class: ResponseClass) -> Self {
        Self {
            text: text.into(),
            short_text: None,
            reference_identifier: None,
            response_class,
            api_id: None,
        }
    }

    /// Create a plain selectable answer.
    pub fn choice(text: impl Into<String>) -> Self {
        Self::new(text, ResponseClass::Answer)
    }

    /// Set the reference identifier.
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference_identifier = Some(reference.into());
        self
    }
}
