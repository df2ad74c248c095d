use crate::{Answer, ResponseClass, ResponseValue};

/// Error type for response access operations.
#[derive(Debug, thiserror::Error)]
pub enum ResponseError {
    #[error("Missing response for question: {0}")]
    MissingResponse(String),

    #[error("Type mismatch for question '{question}': expected {expected}, got {actual}")]
    TypeMismatch {
        question: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Invalid {class} value: {value:?}")]
    InvalidValue { class: ResponseClass, value: String },
}

/// A single recorded response: which question, which answer, what value.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// Reference identifier of the question.
    pub question: String,

    /// Reference identifier of the chosen answer, if any.
    pub answer: Option<String>,

    /// The value entered.
    pub value: ResponseValue,
}

/// The responses a respondent has given so far.
///
/// Questions may hold several responses (multi-select), kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ResponseSet {
    access_code: Option<String>,
    responses: Vec<Response>,
}

impl ResponseSet {
    /// Create a new empty response set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty response set with an access code.
    pub fn with_access_code(access_code: impl Into<String>) -> Self {
        Self {
            access_code: Some(access_code.into()),
            responses: Vec::new(),
        }
    }

    /// Get the access code, if any.
    pub fn access_code(&self) -> Option<&str> {
        self.access_code.as_deref()
    }

    /// Record a value for a question.
    pub fn insert(&mut self, question: impl Into<String>, value: impl Into<ResponseValue>) {
        self.responses.push(Response {
            question: question.into(),
            answer: None,
            value: value.into(),
        });
    }

    /// Record that an answer was picked for a question.
    pub fn pick(&mut self, question: impl Into<String>, answer: impl Into<String>) {
        self.responses.push(Response {
            question: question.into(),
            answer: Some(answer.into()),
            value: ResponseValue::Picked,
        });
    }

    /// Record raw input for a question, typed by the answer's response class.
    pub fn record(
        &mut self,
        question: impl Into<String>,
        answer: &Answer,
        raw: &str,
    ) -> Result<(), ResponseError> {
        let value = ResponseValue::parse(answer.response_class, raw)?;
        self.responses.push(Response {
            question: question.into(),
            answer: answer.reference_identifier.clone(),
            value,
        });
        Ok(())
    }

    /// Iterate over the responses for one question.
    pub fn for_question<'a>(&'a self, question: &'a str) -> impl Iterator<Item = &'a Response> {
        self.responses.iter().filter(move |r| r.question == question)
    }

    /// Get the first response for a question.
    pub fn get(&self, question: &str) -> Option<&Response> {
        self.responses.iter().find(|r| r.question == question)
    }

    /// Check if any response exists for a question.
    pub fn contains(&self, question: &str) -> bool {
        self.get(question).is_some()
    }

    /// Check if the given answer was picked for a question.
    pub fn is_picked(&self, question: &str, answer: &str) -> bool {
        self.for_question(question)
            .any(|r| r.answer.as_deref() == Some(answer))
    }

    /// Get an iterator over all responses.
    pub fn iter(&self) -> impl Iterator<Item = &Response> {
        self.responses.iter()
    }

    /// Get the number of responses.
    pub fn len(&self) -> usize {
        self.responses.len()
    }

    /// Check if there are no responses.
    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    /// Remove every response for a question, returning how many were removed.
    pub fn clear_question(&mut self, question: &str) -> usize {
        let before = self.responses.len();
        self.responses.retain(|r| r.question != question);
        before - self.responses.len()
    }

    // === Convenience accessors ===

    /// Get the string value recorded for a question.
    pub fn get_string(&self, question: &str) -> Result<&str, ResponseError> {
        match self.get(question).map(|r| &r.value) {
            Some(ResponseValue::String(s) | ResponseValue::Text(s)) => Ok(s),
            Some(other) => Err(ResponseError::TypeMismatch {
                question: question.to_string(),
                expected: "string",
                actual: other.type_name(),
            }),
            None => Err(ResponseError::MissingResponse(question.to_string())),
        }
    }

    /// Get the integer value recorded for a question.
    pub fn get_integer(&self, question: &str) -> Result<i64, ResponseError> {
        match self.get(question).map(|r| &r.value) {
            Some(ResponseValue::Integer(i)) => Ok(*i),
            Some(other) => Err(ResponseError::TypeMismatch {
                question: question.to_string(),
                expected: "integer",
                actual: other.type_name(),
            }),
            None => Err(ResponseError::MissingResponse(question.to_string())),
        }
    }

    /// Get the float value recorded for a question.
    pub fn get_float(&self, question: &str) -> Result<f64, ResponseError> {
        match self.get(question).map(|r| &r.value) {
            Some(ResponseValue::Float(f)) => Ok(*f),
            Some(other) => Err(ResponseError::TypeMismatch {
                question: question.to_string(),
                expected: "float",
                actual: other.type_name(),
            }),
            None => Err(ResponseError::MissingResponse(question.to_string())),
        }
    }
}

impl<'a> IntoIterator for &'a ResponseSet {
    type Item = &'a Response;
    type IntoIter = std::slice::Iter<'a, Response>;

    fn into_iter(self) -> Self::IntoIter {
        self.responses.iter()
    }
}
