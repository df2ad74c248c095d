//! # questionnaire
//!
//! Question presentation and visibility for survey renderers. Backend-agnostic.
//!
//! Given questions that are already loaded (with their groups, sections and
//! surveys in a [`SurveyCatalog`]), this crate answers the questions a renderer
//! asks at display time:
//!
//! - Is the question shown for these responses? ([`Question::is_triggered`])
//! - Which CSS classes does it carry? ([`Question::css_class`])
//! - Which renderer draws it? ([`Question::renderer`], [`Presenter::renderer`])
//! - What is its label in this locale? ([`Presenter::text_for`])
//! - Which input widget does it need? ([`Question::answer_shape`])
//!
//! ## Usage
//!
//! ```rust
//! use questionnaire::{
//!     Pick, Presenter, QuestionDefaults, QuestionGroup, ResponseSet, Survey, SurveyCatalog,
//!     SurveySection, TestDependency, TextPosition,
//! };
//!
//! let mut catalog = SurveyCatalog::new();
//! let mut survey = Survey::new("Pets");
//! survey.add_translation_yaml("es", "questions:\n  pet:\n    text: Perro|Gato\n").unwrap();
//! let survey = catalog.add_survey(survey);
//! let section = catalog.add_section(SurveySection::new("Main", survey));
//! let group = catalog.add_group(QuestionGroup::new("Pets").with_display_type("bootstrap"));
//!
//! let question = QuestionDefaults::default()
//!     .build("Dog|Cat")
//!     .unwrap()
//!     .with_reference("pet")
//!     .with_display_type("inline")
//!     .with_dependency(TestDependency::answered("has_pets"))
//!     .in_section(section)
//!     .in_group(group);
//!
//! let presenter = Presenter::new(&catalog);
//! assert_eq!(presenter.renderer(&question), "bootstrap_inline");
//! assert_eq!(presenter.text_for(&question, Some(TextPosition::Post), None, Some("es")), "Gato");
//! assert_eq!(question.css_class(&ResponseSet::new()).unwrap(), "q_dependent q_hidden");
//! assert_eq!(question.pick(), Some(Pick::None));
//! ```
//!
//! ## Collaborators
//!
//! The caller supplies:
//! - a [`Dependency`] per dependent question (the rule engine),
//! - an optional [`Context`] for placeholder substitution ([`HandlebarsContext`] is provided),
//! - an [`ImageMarkup`] for `image` questions (see the `questionnaire-html` crate).

// Re-export all types from questionnaire-types
pub use questionnaire_types::*;

pub mod common;
pub use common::{generate_api_id, normalize};

mod defaults;
pub use defaults::{
    QuestionDefaults, apply_answer_defaults, apply_defaults, apply_group_defaults,
    apply_survey_defaults,
};

pub mod context;
pub use context::{ContextError, HandlebarsContext, ResolutionMode};

mod config;
pub use config::QuestionnaireConfig;

mod presenter;
pub use presenter::Presenter;

// Test dependency for exercising visibility without a rule engine
mod test_dependency;
pub use test_dependency::{TestDependency, TestDependencyError};
