//! Default values filled in right after a question is built.

use tracing::debug;

use crate::{Answer, DisplayType, Pick, Question, QuestionError, QuestionGroup, Survey, common};

/// Fills unset fields on freshly built questions and groups.
///
/// The slug and id generators are injectable so callers (and tests) can
/// control them; [`Default`] uses [`common::normalize`] and
/// [`common::generate_api_id`].
#[derive(Debug, Clone, Copy)]
pub struct QuestionDefaults {
    normalize: fn(&str) -> String,
    generate_id: fn() -> String,
}

impl Default for QuestionDefaults {
    fn default() -> Self {
        Self {
            normalize: common::normalize,
            generate_id: common::generate_api_id,
        }
    }
}

impl QuestionDefaults {
    /// Create defaults with custom collaborators.
    pub fn new(normalize: fn(&str) -> String, generate_id: fn() -> String) -> Self {
        Self {
            normalize,
            generate_id,
        }
    }

    /// Fill every unset field of the question.
    ///
    /// Only unset values are touched: an explicit `false` mandatory flag stays
    /// `false`, and an existing `api_id` is never replaced.
    pub fn apply(&self, question: &mut Question) {
        let mut filled = Vec::new();

        if question.mandatory_flag().is_none() {
            question.set_mandatory(Some(false));
            filled.push("is_mandatory");
        }
        if question.display_type().is_none() {
            question.set_display_type(DisplayType::DEFAULT);
            filled.push("display_type");
        }
        if question.pick().is_none() {
            question.set_pick(Some(Pick::None));
            filled.push("pick");
        }
        if question.data_export_identifier().is_none() {
            let identifier = (self.normalize)(question.text());
            question.set_data_export_identifier(Some(identifier));
            filled.push("data_export_identifier");
        }
        if question.short_text().is_none() {
            let short_text = question.text().to_string();
            question.set_short_text(Some(short_text));
            filled.push("short_text");
        }
        if question.api_id().is_none() && question.assign_api_id((self.generate_id)()) {
            filled.push("api_id");
        }

        debug!(text = question.text(), ?filled, "applied question defaults");
    }

    /// Fill the unset display type (`inline`) and `api_id` of a group.
    pub fn apply_group(&self, group: &mut QuestionGroup) {
        if group.display_type.is_none() {
            group.display_type = Some(DisplayType::new(DisplayType::INLINE));
        }
        if group.api_id.is_none() {
            group.api_id = Some((self.generate_id)());
        }
        debug!(text = %group.text, "applied group defaults");
    }

    /// Fill the unset `api_id` of a survey.
    pub fn apply_survey(&self, survey: &mut Survey) {
        if survey.api_id.is_none() {
            survey.api_id = Some((self.generate_id)());
            debug!(title = %survey.title, "applied survey defaults");
        }
    }

    /// Fill the unset `api_id` of an answer.
    pub fn apply_answer(&self, answer: &mut Answer) {
        if answer.api_id.is_none() {
            answer.api_id = Some((self.generate_id)());
        }
    }

    /// Build a question and immediately apply defaults.
    pub fn build(&self, text: impl Into<String>) -> Result<Question, QuestionError> {
        let mut question = Question::new(text)?;
        self.apply(&mut question);
        Ok(question)
    }
}

/// Apply the standard defaults to a question.
pub fn apply_defaults(question: &mut Question) {
    QuestionDefaults::default().apply(question);
}

/// Apply the standard defaults to a question group.
pub fn apply_group_defaults(group: &mut QuestionGroup) {
    QuestionDefaults::default().apply_group(group);
}

/// Apply the standard defaults to a survey.
pub fn apply_survey_defaults(survey: &mut Survey) {
    QuestionDefaults::default().apply_survey(survey);
}

/// Apply the standard defaults to an answer.
pub fn apply_answer_defaults(answer: &mut Answer) {
    QuestionDefaults::default().apply_answer(answer);
}
