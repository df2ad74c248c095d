use std::fmt;

use crate::{Question, QuestionGroup, Survey, SurveySection};

macro_rules! arena_id {
    ($name:ident, $label:literal) => {
        #[doc = concat!("Index of a ", $label, " in a `SurveyCatalog`.")]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(usize);

        impl $name {
            /// The raw arena index.
            pub fn index(&self) -> usize {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, "#{}"), self.0)
            }
        }
    };
}

arena_id!(SurveyId, "survey");
arena_id!(SectionId, "section");
arena_id!(GroupId, "group");

/// Owns the surveys, sections and question groups that questions refer to.
///
/// Questions hold ids rather than references; resolve them here.
#[derive(Debug, Default)]
pub struct SurveyCatalog {
    surveys: Vec<Survey>,
    sections: Vec<SurveySection>,
    groups: Vec<QuestionGroup>,
}

impl SurveyCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a survey and return its id.
    pub fn add_survey(&mut self, survey: Survey) -> SurveyId {
        self.surveys.push(survey);
        SurveyId(self.surveys.len() - 1)
    }

    /// Add a section and return its id.
    pub fn add_section(&mut self, section: SurveySection) -> SectionId {
        self.sections.push(section);
        SectionId(self.sections.len() - 1)
    }

    /// Add a question group and return its id.
    pub fn add_group(&mut self, group: QuestionGroup) -> GroupId {
        self.groups.push(group);
        GroupId(self.groups.len() - 1)
    }

    pub fn survey(&self, id: SurveyId) -> Option<&Survey> {
        self.surveys.get(id.0)
    }

    pub fn survey_mut(&mut self, id: SurveyId) -> Option<&mut Survey> {
        self.surveys.get_mut(id.0)
    }

    pub fn section(&self, id: SectionId) -> Option<&SurveySection> {
        self.sections.get(id.0)
    }

    pub fn group(&self, id: GroupId) -> Option<&QuestionGroup> {
        self.groups.get(id.0)
    }

    pub fn group_mut(&mut self, id: GroupId) -> Option<&mut QuestionGroup> {
        self.groups.get_mut(id.0)
    }

    /// Follow a section to the survey it belongs to.
    pub fn survey_of_section(&self, id: SectionId) -> Option<&Survey> {
        self.section(id)
            .and_then(|section| section.survey)
            .and_then(|survey| self.survey(survey))
    }

    /// The survey a question's translations come from, via its section.
    pub fn survey_for(&self, question: &Question) -> Option<&Survey> {
        question
            .section()
            .and_then(|section| self.survey_of_section(section))
    }

    /// The survey a group's translations come from, via its section.
    pub fn survey_for_group(&self, group: &QuestionGroup) -> Option<&Survey> {
        group
            .section
            .and_then(|section| self.survey_of_section(section))
    }

    /// The group a question belongs to.
    pub fn group_of(&self, question: &Question) -> Option<&QuestionGroup> {
        question.group().and_then(|group| self.group(group))
    }

    /// Get the number of surveys.
    pub fn survey_count(&self) -> usize {
        self.surveys.len()
    }
}
