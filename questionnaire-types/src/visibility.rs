use crate::{Dependency, Question, QuestionGroup, ResponseSet};

pub const QUESTION_DEPENDENT_CLASS: &str = "q_dependent";
pub const QUESTION_HIDDEN_CLASS: &str = "q_hidden";
pub const GROUP_DEPENDENT_CLASS: &str = "g_dependent";
pub const GROUP_HIDDEN_CLASS: &str = "g_hidden";

fn triggered(dependency: Option<&dyn Dependency>, responses: &ResponseSet) -> anyhow::Result<bool> {
    match dependency {
        Some(dependency) => dependency.is_met(responses),
        None => Ok(true),
    }
}

fn tags(
    dependency: Option<&dyn Dependency>,
    custom_class: Option<&str>,
    responses: &ResponseSet,
    (dependent_class, hidden_class): (&str, &str),
) -> anyhow::Result<Vec<String>> {
    let is_triggered = triggered(dependency, responses)?;
    Ok([
        dependency.map(|_| dependent_class),
        (!is_triggered).then_some(hidden_class),
        custom_class,
    ]
    .into_iter()
    .flatten()
    .map(str::to_string)
    .collect())
}

impl Question {
    /// Check if the question has a dependency.
    pub fn is_dependent(&self) -> bool {
        self.dependency().is_some()
    }

    /// Check if the question should be shown for the given responses.
    ///
    /// Questions without a dependency are always triggered. Errors from the
    /// dependency are returned unchanged.
    pub fn is_triggered(&self, responses: &ResponseSet) -> anyhow::Result<bool> {
        triggered(self.dependency(), responses)
    }

    /// Presentation tags in order: dependent marker, hidden marker, custom class.
    pub fn presentation_tags(&self, responses: &ResponseSet) -> anyhow::Result<Vec<String>> {
        tags(
            self.dependency(),
            self.custom_class(),
            responses,
            (QUESTION_DEPENDENT_CLASS, QUESTION_HIDDEN_CLASS),
        )
    }

    /// The presentation tags joined with spaces.
    pub fn css_class(&self, responses: &ResponseSet) -> anyhow::Result<String> {
        Ok(self.presentation_tags(responses)?.join(" "))
    }

    pub fn is_part_of_group(&self) -> bool {
        self.group().is_some()
    }

    pub fn is_solo(&self) -> bool {
        self.group().is_none()
    }

    /// True only when the mandatory flag is explicitly set.
    pub fn is_mandatory(&self) -> bool {
        self.mandatory_flag() == Some(true)
    }
}

impl QuestionGroup {
    pub fn is_dependent(&self) -> bool {
        self.dependency.is_some()
    }

    pub fn is_triggered(&self, responses: &ResponseSet) -> anyhow::Result<bool> {
        triggered(self.dependency.as_deref(), responses)
    }

    pub fn presentation_tags(&self, responses: &ResponseSet) -> anyhow::Result<Vec<String>> {
        tags(
            self.dependency.as_deref(),
            self.custom_class.as_deref(),
            responses,
            (GROUP_DEPENDENT_CLASS, GROUP_HIDDEN_CLASS),
        )
    }

    pub fn css_class(&self, responses: &ResponseSet) -> anyhow::Result<String> {
        Ok(self.presentation_tags(responses)?.join(" "))
    }
}
