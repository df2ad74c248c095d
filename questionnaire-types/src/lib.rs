//! Core types for the questionnaire crate.
//!
//! This crate provides the data model and the presentation logic that only
//! depends on already-loaded data:
//! - `Question`, `Answer`, `QuestionGroup` - What is asked and how it is grouped
//! - `Survey`, `SurveySection`, `SurveyCatalog` - Where translations come from
//! - `ResponseSet` - What the respondent has answered so far
//! - `Dependency`, `Context`, `ImageMarkup` - Collaborators supplied by the caller

mod error;
pub use error::{QuestionError, TranslationError};

mod pick;
pub use pick::Pick;

mod display_type;
pub use display_type::DisplayType;

mod response_class;
pub use response_class::ResponseClass;

mod response_value;
pub use response_value::ResponseValue;

mod response_set;
pub use response_set::{Response, ResponseError, ResponseSet};

mod answer;
pub use answer::Answer;

mod traits;
pub use traits::{Context, Dependency, ImageMarkup, PlainImage};

mod translation;
pub use translation::{TextOverride, TranslationTable};

mod survey;
pub use survey::{Survey, SurveySection, SurveyText};

mod catalog;
pub use catalog::{GroupId, SectionId, SurveyCatalog, SurveyId};

mod group;
pub use group::QuestionGroup;

mod question;
pub use question::Question;

mod classify;
pub use classify::AnswerShape;

mod visibility;
pub use visibility::{
    GROUP_DEPENDENT_CLASS, GROUP_HIDDEN_CLASS, QUESTION_DEPENDENT_CLASS, QUESTION_HIDDEN_CLASS,
};

mod renderer;
pub use renderer::Renderer;

mod text;
pub use text::{TextPosition, image_alt, split};
