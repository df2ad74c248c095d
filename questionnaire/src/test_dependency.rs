//! Test dependency for exercising visibility without a rule engine.
//!
//! `TestDependency` stands in for a real dependency evaluator. It is useful
//! for testing renderers and visibility logic in isolation.
//!
//! # Example
//!
//! ```rust
//! use questionnaire::{Question, ResponseSet, TestDependency};
//!
//! let question = Question::new("Why do you like it?")
//!     .unwrap()
//!     .with_dependency(TestDependency::picked("color", "red"));
//!
//! let mut responses = ResponseSet::new();
//! assert!(!question.is_triggered(&responses).unwrap());
//!
//! responses.pick("color", "red");
//! assert!(question.is_triggered(&responses).unwrap());
//! ```

use crate::{Dependency, ResponseSet};

/// A dependency with a fixed, scriptable condition.
#[derive(Debug, Clone, PartialEq)]
pub enum TestDependency {
    /// Always met.
    Met,
    /// Never met.
    Unmet,
    /// Met once the question has any response.
    Answered(String),
    /// Met once the given answer was picked for the question.
    Picked { question: String, answer: String },
    /// Evaluation fails with the given message.
    Failing(String),
}

/// Error raised by [`TestDependency::Failing`].
#[derive(Debug, thiserror::Error)]
#[error("Dependency evaluation failed: {0}")]
pub struct TestDependencyError(pub String);

impl TestDependency {
    pub fn met() -> Self {
        Self::Met
    }

    pub fn unmet() -> Self {
        Self::Unmet
    }

    /// Met when `question` has been answered.
    pub fn answered(question: impl Into<String>) -> Self {
        Self::Answered(question.into())
    }

    /// Met when `answer` was picked for `question`.
    pub fn picked(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self::Picked {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Fails evaluation with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::Failing(message.into())
    }
}

impl Dependency for TestDependency {
    fn is_met(&self, responses: &ResponseSet) -> anyhow::Result<bool> {
        match self {
            Self::Met => Ok(true),
            Self::Unmet => Ok(false),
            Self::Answered(question) => Ok(responses.contains(question)),
            Self::Picked { question, answer } => Ok(responses.is_picked(question, answer)),
            Self::Failing(message) => Err(TestDependencyError(message.clone()).into()),
        }
    }
}
