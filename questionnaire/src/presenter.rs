//! Per-request question presentation over a loaded catalog.

use tracing::{debug, trace};

use crate::{
    Context, ImageMarkup, PlainImage, Question, QuestionGroup, QuestionnaireConfig, Renderer,
    ResponseSet, Survey, SurveyCatalog, TextPosition,
};

/// Resolves what to show for questions of a catalog.
///
/// Holds the catalog (for group and section lookups), the image markup
/// collaborator and the presentation config. Cheap to create per request.
pub struct Presenter<'a> {
    catalog: &'a SurveyCatalog,
    images: &'a dyn ImageMarkup,
    config: QuestionnaireConfig,
}

impl<'a> Presenter<'a> {
    /// Create a presenter that leaves image sources as plain text.
    pub fn new(catalog: &'a SurveyCatalog) -> Self {
        Self {
            catalog,
            images: &PlainImage,
            config: QuestionnaireConfig::default(),
        }
    }

    /// Use the given image markup for `image` questions.
    pub fn with_images(mut self, images: &'a dyn ImageMarkup) -> Self {
        self.images = images;
        self
    }

    /// Use the given configuration.
    pub fn with_config(mut self, config: QuestionnaireConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &QuestionnaireConfig {
        &self.config
    }

    pub fn catalog(&self) -> &SurveyCatalog {
        self.catalog
    }

    /// The renderer for a question, composed with its group's renderer.
    pub fn renderer(&self, question: &Question) -> Renderer {
        let renderer = self.catalog.renderer_for(question);
        trace!(text = question.text(), %renderer, "resolved renderer");
        renderer
    }

    /// The question's label for a locale (or the configured default locale).
    pub fn text_for(
        &self,
        question: &Question,
        position: Option<TextPosition>,
        context: Option<&dyn Context>,
        locale: Option<&str>,
    ) -> String {
        let locale = self.config.locale(locale);
        let survey = self.survey_for(question, locale);
        question.text_for(position, context, survey, locale, self.images)
    }

    /// The question's help text for a locale (or the configured default locale).
    pub fn help_text_for(
        &self,
        question: &Question,
        context: Option<&dyn Context>,
        locale: Option<&str>,
    ) -> String {
        let locale = self.config.locale(locale);
        let survey = self.survey_for(question, locale);
        question.help_text_for(context, survey, locale)
    }

    /// The group's heading for a locale.
    pub fn group_text_for(
        &self,
        group: &QuestionGroup,
        context: Option<&dyn Context>,
        locale: Option<&str>,
    ) -> String {
        let locale = self.config.locale(locale);
        group.text_for(context, self.catalog.survey_for_group(group), locale)
    }

    /// The group's help text for a locale.
    pub fn group_help_text_for(
        &self,
        group: &QuestionGroup,
        context: Option<&dyn Context>,
        locale: Option<&str>,
    ) -> String {
        let locale = self.config.locale(locale);
        group.help_text_for(context, self.catalog.survey_for_group(group), locale)
    }

    /// The question's CSS class for the given responses.
    pub fn css_class(&self, question: &Question, responses: &ResponseSet) -> anyhow::Result<String> {
        question.css_class(responses)
    }

    /// Check if the question is shown: its own dependency and its group's must both hold.
    pub fn is_visible(&self, question: &Question, responses: &ResponseSet) -> anyhow::Result<bool> {
        if !question.is_triggered(responses)? {
            return Ok(false);
        }
        match self.catalog.group_of(question) {
            Some(group) => group.is_triggered(responses),
            None => Ok(true),
        }
    }

    // A missing section or survey is a valid authoring state: fall back to base text.
    fn survey_for(&self, question: &Question, locale: Option<&str>) -> Option<&'a Survey> {
        let survey = self.catalog.survey_for(question);
        if let Some(locale) = locale {
            match survey {
                None => debug!(text = question.text(), locale, "no survey for translations"),
                Some(survey) => {
                    let found = survey
                        .translations_for(locale)
                        .zip(question.reference_identifier())
                        .is_some_and(|(table, reference)| table.question(reference).is_some());
                    if !found {
                        debug!(
                            reference = question.reference_identifier(),
                            locale, "no translation override"
                        );
                    }
                }
            }
        }
        survey
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{QuestionDefaults, SurveySection, TestDependency};

    fn catalog() -> (SurveyCatalog, crate::SectionId, crate::GroupId) {
        let mut catalog = SurveyCatalog::new();
        let mut survey = Survey::new("Pets");
        survey
            .add_translation_yaml(
                "es",
                "questions:\n  pet:\n    text: \"Mascota|favorita\"\n    help_text: \"Una\"\n",
            )
            .unwrap();
        let survey = catalog.add_survey(survey);
        let section = catalog.add_section(SurveySection::new("Main", survey));
        let mut group = QuestionGroup::new("About you").in_section(section);
        QuestionDefaults::default().apply_group(&mut group);
        let group = catalog.add_group(group);
        (catalog, section, group)
    }

    #[test]
    fn text_uses_section_survey() {
        let (catalog, section, _) = catalog();
        let question = QuestionDefaults::default()
            .build("Pet|best")
            .unwrap()
            .with_reference("pet")
            .in_section(section);
        let presenter = Presenter::new(&catalog);

        assert_eq!(presenter.text_for(&question, Some(TextPosition::Pre), None, Some("es")), "Mascota");
        assert_eq!(presenter.text_for(&question, Some(TextPosition::Pre), None, None), "Pet");
        assert_eq!(presenter.help_text_for(&question, None, Some("es")), "Una");
    }

    #[test]
    fn default_locale_from_config() {
        let (catalog, section, _) = catalog();
        let question = Question::new("Pet").unwrap().with_reference("pet").in_section(section);
        let presenter = Presenter::new(&catalog).with_config(QuestionnaireConfig {
            default_locale: Some("es".to_string()),
            ..Default::default()
        });
        assert_eq!(presenter.text_for(&question, None, None, None), "Mascota|favorita");
    }

    #[test]
    fn orphan_question_falls_back_to_base_text() {
        let (catalog, _, _) = catalog();
        let question = Question::new("Pet").unwrap().with_reference("pet");
        let presenter = Presenter::new(&catalog);
        assert_eq!(presenter.text_for(&question, None, None, Some("es")), "Pet");
    }

    #[test]
    fn renderer_through_group() {
        let (catalog, _, group) = catalog();
        let question = QuestionDefaults::default().build("Name").unwrap().in_group(group);
        assert_eq!(Presenter::new(&catalog).renderer(&question), "inline_default");
    }

    #[test]
    fn visibility_includes_group() {
        let (mut catalog, _, group) = catalog();
        catalog.group_mut(group).unwrap().dependency = Some(Box::new(TestDependency::unmet()));
        let question = Question::new("Name").unwrap().in_group(group);
        let presenter = Presenter::new(&catalog);

        assert!(question.is_triggered(&ResponseSet::new()).unwrap());
        assert!(!presenter.is_visible(&question, &ResponseSet::new()).unwrap());
        assert_eq!(presenter.css_class(&question, &ResponseSet::new()).unwrap(), "");
    }
}
