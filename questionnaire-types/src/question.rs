use crate::{Answer, Dependency, DisplayType, GroupId, Pick, QuestionError, SectionId};

/// A single question in a survey.
///
/// Groups and sections are referenced by id and resolved through a
/// [`SurveyCatalog`](crate::SurveyCatalog). Answers and the dependency are
/// owned and dropped with the question.
#[derive(Debug)]
pub struct Question {
    /// The prompt text. Never empty.
    text: String,

    /// Shorter prompt for exports and summaries.
    short_text: Option<String>,

    /// Extra guidance shown with the prompt.
    help_text: Option<String>,

    /// Stable key used for translations and dependency rules.
    reference_identifier: Option<String>,

    /// Column name used when exporting responses.
    data_export_identifier: Option<String>,

    /// Presentation tag, composed with the group's renderer.
    display_type: Option<DisplayType>,

    /// Selection mode.
    pick: Option<Pick>,

    /// `None` until defaults have been applied or a value is set.
    is_mandatory: Option<bool>,

    /// Extra CSS class supplied by the author.
    custom_class: Option<String>,

    /// Stable external identifier, assigned once.
    api_id: Option<String>,

    group: Option<GroupId>,
    section: Option<SectionId>,
    dependency: Option<Box<dyn Dependency>>,
    answers: Vec<Answer>,

    /// Index into `answers`.
    correct_answer: Option<usize>,
}

impl Question {
    /// Create a new question with the given prompt text.
    ///
    /// No defaults are applied; fields other than `text` start unset.
    pub fn new(text: impl Into<String>) -> Result<Self, QuestionError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }
        Ok(Self {
            text,
            short_text: None,
            help_text: None,
            reference_identifier: None,
            data_export_identifier: None,
            display_type: None,
            pick: None,
            is_mandatory: None,
            custom_class: None,
            api_id: None,
            group: None,
            section: None,
            dependency: None,
            answers: Vec::new(),
            correct_answer: None,
        })
    }

    // === Builder-style setters ===

    /// Set the reference identifier.
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference_identifier = Some(reference.into());
        self
    }

    /// Set the help text.
    pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = Some(help_text.into());
        self
    }

    /// Set the display type.
    pub fn with_display_type(mut self, display_type: impl ToString) -> Self {
        self.set_display_type(display_type);
        self
    }

    /// Set the pick mode.
    pub fn with_pick(mut self, pick: Pick) -> Self {
        self.pick = Some(pick);
        self
    }

    /// Set the mandatory flag.
    pub fn with_mandatory(mut self, mandatory: bool) -> Self {
        self.is_mandatory = Some(mandatory);
        self
    }

    /// Set the custom CSS class.
    pub fn with_custom_class(mut self, class: impl Into<String>) -> Self {
        self.custom_class = Some(class.into());
        self
    }

    /// Add an answer.
    pub fn with_answer(mut self, answer: Answer) -> Self {
        self.answers.push(answer);
        self
    }

    /// Attach a dependency.
    pub fn with_dependency(mut self, dependency: impl Dependency + 'static) -> Self {
        self.dependency = Some(Box::new(dependency));
        self
    }

    /// Place the question in a group.
    pub fn in_group(mut self, group: GroupId) -> Self {
        self.group = Some(group);
        self
    }

    /// Place the question in a section.
    pub fn in_section(mut self, section: SectionId) -> Self {
        self.section = Some(section);
        self
    }

    // === Accessors ===

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn short_text(&self) -> Option<&str> {
        self.short_text.as_deref()
    }

    pub fn help_text(&self) -> Option<&str> {
        self.help_text.as_deref()
    }

    pub fn reference_identifier(&self) -> Option<&str> {
        self.reference_identifier.as_deref()
    }

    pub fn data_export_identifier(&self) -> Option<&str> {
        self.data_export_identifier.as_deref()
    }

    pub fn display_type(&self) -> Option<&DisplayType> {
        self.display_type.as_ref()
    }

    /// Check if the display type is set to exactly `name`.
    pub fn has_display_type(&self, name: &str) -> bool {
        self.display_type.as_ref().is_some_and(|d| d.is(name))
    }

    pub fn pick(&self) -> Option<Pick> {
        self.pick
    }

    /// The raw mandatory flag; `None` means unset.
    pub fn mandatory_flag(&self) -> Option<bool> {
        self.is_mandatory
    }

    pub fn custom_class(&self) -> Option<&str> {
        self.custom_class.as_deref()
    }

    pub fn api_id(&self) -> Option<&str> {
        self.api_id.as_deref()
    }

    pub fn group(&self) -> Option<GroupId> {
        self.group
    }

    pub fn section(&self) -> Option<SectionId> {
        self.section
    }

    pub fn dependency(&self) -> Option<&dyn Dependency> {
        self.dependency.as_deref()
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// Get the first answer, which determines the input shape of "none"-pick questions.
    pub fn first_answer(&self) -> Result<&Answer, QuestionError> {
        self.answers.first().ok_or(QuestionError::MissingAnswer)
    }

    /// Get the answer marked as correct, if any.
    pub fn correct_answer(&self) -> Option<&Answer> {
        self.correct_answer.and_then(|i| self.answers.get(i))
    }

    // === Setters ===

    /// Replace the prompt text. Blank text is rejected.
    pub fn set_text(&mut self, text: impl Into<String>) -> Result<(), QuestionError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }
        self.text = text;
        Ok(())
    }

    pub fn set_short_text(&mut self, short_text: Option<String>) {
        self.short_text = short_text;
    }

    pub fn set_help_text(&mut self, help_text: Option<String>) {
        self.help_text = help_text;
    }

    pub fn set_reference_identifier(&mut self, reference: Option<String>) {
        self.reference_identifier = reference;
    }

    pub fn set_data_export_identifier(&mut self, identifier: Option<String>) {
        self.data_export_identifier = identifier;
    }

    /// Set the display type. Any printable value is stored as its string form.
    pub fn set_display_type(&mut self, display_type: impl ToString) {
        self.display_type = Some(DisplayType::new(display_type));
    }

    /// Unset the display type.
    pub fn clear_display_type(&mut self) {
        self.display_type = None;
    }

    pub fn set_pick(&mut self, pick: Option<Pick>) {
        self.pick = pick;
    }

    pub fn set_mandatory(&mut self, mandatory: Option<bool>) {
        self.is_mandatory = mandatory;
    }

    pub fn set_custom_class(&mut self, class: Option<String>) {
        self.custom_class = class;
    }

    /// Assign the external identifier if none is set yet.
    ///
    /// Returns `false` and leaves the existing id in place otherwise.
    pub fn assign_api_id(&mut self, api_id: impl Into<String>) -> bool {
        if self.api_id.is_some() {
            return false;
        }
        self.api_id = Some(api_id.into());
        true
    }

    pub fn set_group(&mut self, group: Option<GroupId>) {
        self.group = group;
    }

    pub fn set_section(&mut self, section: Option<SectionId>) {
        self.section = section;
    }

    pub fn set_dependency(&mut self, dependency: Option<Box<dyn Dependency>>) {
        self.dependency = dependency;
    }

    /// Append an answer, returning its index.
    ///
    /// Answers are append-only, so `correct_answer` keeps pointing at the same answer.
    pub fn push_answer(&mut self, answer: Answer) -> usize {
        self.answers.push(answer);
        self.answers.len() - 1
    }

    /// Mark the answer at `index` as correct. Out-of-range indices are rejected.
    pub fn set_correct_answer(&mut self, index: Option<usize>) -> bool {
        match index {
            Some(i) if i >= self.answers.len() => false,
            _ => {
                self.correct_answer = index;
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ResponseClass;

    #[test]
    fn empty_text_rejected() {
        assert!(matches!(Question::new(""), Err(QuestionError::EmptyText)));
        assert!(matches!(Question::new("   "), Err(QuestionError::EmptyText)));

        let mut question = Question::new("Name?").unwrap();
        assert!(question.set_text("").is_err());
        assert_eq!(question.text(), "Name?");
    }

    #[test]
    fn display_type_stored_as_string() {
        let mut question = Question::new("Rate us").unwrap();
        question.set_display_type(5);
        assert_eq!(question.display_type().unwrap().as_str(), "5");

        question.set_display_type(DisplayType::STARS);
        assert!(question.has_display_type("stars"));

        question.clear_display_type();
        assert!(question.display_type().is_none());
    }

    #[test]
    fn api_id_assigned_once() {
        let mut question = Question::new("Name?").unwrap();
        assert!(question.assign_api_id("first"));
        assert!(!question.assign_api_id("second"));
        assert_eq!(question.api_id(), Some("first"));
    }

    #[test]
    fn correct_answer_index() {
        let mut question = Question::new("2 + 2?")
            .unwrap()
            .with_answer(Answer::choice("3"))
            .with_answer(Answer::choice("4"));

        assert!(!question.set_correct_answer(Some(2)));
        assert!(question.correct_answer().is_none());

        assert!(question.set_correct_answer(Some(1)));
        assert_eq!(question.correct_answer().unwrap().text, "4");
    }

    #[test]
    fn correct_answer_survives_appends() {
        let mut question = Question::new("Capital of France?")
            .unwrap()
            .with_answer(Answer::choice("Paris"));
        assert!(question.set_correct_answer(Some(0)));

        assert_eq!(question.push_answer(Answer::choice("Lyon")), 1);
        assert_eq!(question.answers().len(), 2);
        assert_eq!(question.correct_answer().unwrap().text, "Paris");
    }

    #[test]
    fn first_answer_missing() {
        let question = Question::new("Name?").unwrap();
        assert!(matches!(
            question.first_answer(),
            Err(QuestionError::MissingAnswer)
        ));

        let question = question.with_answer(Answer::new("Name", ResponseClass::String));
        assert_eq!(
            question.first_answer().unwrap().response_class,
            ResponseClass::String
        );
    }
}
