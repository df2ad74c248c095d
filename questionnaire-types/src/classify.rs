use crate::{Pick, Question, QuestionError, ResponseClass};

/// Which input widget a question needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerShape {
    /// Pick one or any from a list of answers.
    MultipleChoice,
    /// Single-line text entry.
    String,
    /// Multi-line text entry.
    Text,
    /// Numeric entry.
    Number,
    /// Typed entry of some other response class.
    Other(ResponseClass),
    /// The pick mode has not been set.
    Unpicked,
}

impl Question {
    /// Check if the respondent picks from the answers ("any" or "one").
    pub fn is_multiple_choice_answer(&self) -> bool {
        self.pick().is_some_and(|pick| pick.is_choice())
    }

    /// Check if this is a "none"-pick question whose first answer takes a string.
    pub fn is_string_answer(&self) -> Result<bool, QuestionError> {
        self.first_answer_is(ResponseClass::String)
    }

    /// Check if this is a "none"-pick question whose first answer takes text.
    pub fn is_text_answer(&self) -> Result<bool, QuestionError> {
        self.first_answer_is(ResponseClass::Text)
    }

    /// Check if this is a "none"-pick question whose first answer takes a float.
    pub fn is_number_answer(&self) -> Result<bool, QuestionError> {
        self.first_answer_is(ResponseClass::Float)
    }

    /// Classify the question into exactly one input shape.
    pub fn answer_shape(&self) -> Result<AnswerShape, QuestionError> {
        let shape = match self.pick() {
            None => AnswerShape::Unpicked,
            Some(Pick::Any | Pick::One) => AnswerShape::MultipleChoice,
            Some(Pick::None) => match self.first_answer()?.response_class {
                ResponseClass::String => AnswerShape::String,
                ResponseClass::Text => AnswerShape::Text,
                ResponseClass::Float => AnswerShape::Number,
                other => AnswerShape::Other(other),
            },
        };
        Ok(shape)
    }

    // The answers are only consulted for "none"-pick questions.
    fn first_answer_is(&self, class: ResponseClass) -> Result<bool, QuestionError> {
        if self.pick() != Some(Pick::None) {
            return Ok(false);
        }
        Ok(self.first_answer()?.response_class == class)
    }
}
