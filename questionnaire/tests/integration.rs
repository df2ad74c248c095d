//! Integration tests for questionnaire

use questionnaire::{
    Answer, AnswerShape, HandlebarsContext, Pick, Presenter, Question, QuestionDefaults,
    QuestionGroup, ResolutionMode, ResponseClass, ResponseSet, Survey, SurveyCatalog,
    SurveySection, TestDependency, TestDependencyError, TextPosition, apply_defaults, split,
};
use serde_json::json;

fn question(text: &str) -> Question {
    QuestionDefaults::default().build(text).unwrap()
}

#[test]
fn test_unset_mandatory_defaults_to_false() {
    let mut q = Question::new("Name?").unwrap();
    assert_eq!(q.mandatory_flag(), None);
    apply_defaults(&mut q);
    assert_eq!(q.mandatory_flag(), Some(false));
    assert!(!q.is_mandatory());
}

#[test]
fn test_explicit_false_mandatory_kept() {
    let mut q = Question::new("Name?").unwrap().with_mandatory(false);
    apply_defaults(&mut q);
    apply_defaults(&mut q);
    assert_eq!(q.mandatory_flag(), Some(false));
}

#[test]
fn test_defaults_fill_identifiers() {
    let q = question("What is your favorite color?");
    assert_eq!(q.short_text(), Some("What is your favorite color?"));
    assert_eq!(q.data_export_identifier(), Some("what_your_favorite_color"));
    assert_eq!(q.display_type().unwrap().as_str(), "default");
    assert_eq!(q.pick(), Some(Pick::None));
    assert!(q.api_id().is_some());
}

#[test]
fn test_api_id_never_reassigned() {
    let mut q = question("Name?");
    let first = q.api_id().unwrap().to_string();
    apply_defaults(&mut q);
    assert_eq!(q.api_id(), Some(first.as_str()));
}

#[test]
fn test_renderer_idempotent() {
    let group = QuestionGroup::new("Layout").with_display_type("bootstrap");
    let q = question("Name?").with_display_type("inline");
    let first = q.renderer(Some(&group));
    let second = q.renderer(Some(&group));
    assert_eq!(first, second);
    assert_eq!(first, "bootstrap_inline");
}

#[test]
fn test_stars_ignores_group_chain() {
    let mut catalog = SurveyCatalog::new();
    let group = catalog.add_group(QuestionGroup::new("Layout").with_display_type("bootstrap"));
    let q = question("Rate us").with_display_type("stars").in_group(group);
    assert_eq!(catalog.renderer_for(&q), "stars");
    assert_eq!(q.renderer(None), "stars");
}

#[test]
fn test_solo_default_renderer() {
    let q = question("Name?");
    assert!(q.is_solo());
    assert!(!q.is_part_of_group());
    assert_eq!(q.renderer(None), "default");
}

#[test]
fn test_split_properties() {
    assert_eq!(split("A|B", Some(TextPosition::Pre)), "A");
    assert_eq!(split("A|B", Some(TextPosition::Post)), "B");
    assert_eq!(split("A", Some(TextPosition::Post)), "");
    assert_eq!(split("A|B", None), "A|B");
}

#[test]
fn test_hidden_label_is_always_empty() {
    let mut catalog = SurveyCatalog::new();
    let mut survey = Survey::new("S");
    survey
        .add_translation_yaml("fr", "questions:\n  secret:\n    text: Secret|Caché\n")
        .unwrap();
    let survey = catalog.add_survey(survey);
    let section = catalog.add_section(SurveySection::new("Main", survey));
    let q = question("Secret|Hidden")
        .with_display_type("hidden_label")
        .with_reference("secret")
        .in_section(section);

    let presenter = Presenter::new(&catalog);
    let context = HandlebarsContext::new(json!({}), ResolutionMode::Relaxed);
    for locale in [None, Some("fr")] {
        for position in [None, Some(TextPosition::Pre), Some(TextPosition::Post)] {
            assert_eq!(presenter.text_for(&q, position, None, locale), "");
            assert_eq!(presenter.text_for(&q, position, Some(&context), locale), "");
        }
    }
}

#[test]
fn test_independent_question_always_triggered() {
    let q = question("Name?");
    assert!(q.is_triggered(&ResponseSet::new()).unwrap());

    let mut responses = ResponseSet::new();
    responses.insert("other", "value");
    assert!(q.is_triggered(&responses).unwrap());
}

#[test]
fn test_presentation_tags() {
    let dependent = question("Why?").with_dependency(TestDependency::unmet());
    assert_eq!(
        dependent.presentation_tags(&ResponseSet::new()).unwrap(),
        vec!["q_dependent", "q_hidden"]
    );

    let plain = question("Name?");
    assert!(plain.presentation_tags(&ResponseSet::new()).unwrap().is_empty());
}

#[test]
fn test_dependency_triggered_by_response() {
    let q = question("Which breed?").with_dependency(TestDependency::picked("pet", "dog"));
    let mut responses = ResponseSet::new();
    assert_eq!(q.css_class(&responses).unwrap(), "q_dependent q_hidden");

    responses.pick("pet", "dog");
    assert_eq!(q.css_class(&responses).unwrap(), "q_dependent");
}

#[test]
fn test_dependency_error_propagates_unmodified() {
    let q = question("Why?").with_dependency(TestDependency::failing("bad rule"));
    let err = q.presentation_tags(&ResponseSet::new()).unwrap_err();
    assert!(err.downcast_ref::<TestDependencyError>().is_some());
    assert_eq!(err.to_string(), "Dependency evaluation failed: bad rule");
}

#[test]
fn test_classifiers_pairwise_exclusive() {
    let mut cases = vec![
        question("Pick one").with_pick(Pick::One),
        question("Pick any").with_pick(Pick::Any),
    ];
    for class in [
        ResponseClass::String,
        ResponseClass::Text,
        ResponseClass::Float,
        ResponseClass::Integer,
        ResponseClass::Answer,
    ] {
        cases.push(question("Typed").with_answer(Answer::new("Value", class)));
    }

    for q in &cases {
        let flags = [
            q.is_multiple_choice_answer(),
            q.is_string_answer().unwrap(),
            q.is_text_answer().unwrap(),
            q.is_number_answer().unwrap(),
        ];
        assert!(flags.iter().filter(|&&f| f).count() <= 1);
    }
}

#[test]
fn test_missing_answer_errors() {
    let q = question("Name?");
    assert_eq!(q.pick(), Some(Pick::None));
    assert!(q.is_string_answer().unwrap_err().is_missing_answer());
    assert!(q.is_text_answer().unwrap_err().is_missing_answer());
    assert!(q.is_number_answer().unwrap_err().is_missing_answer());
}

#[test]
fn test_answer_shape() {
    let q = question("Age").with_answer(Answer::new("Years", ResponseClass::Float));
    assert_eq!(q.answer_shape().unwrap(), AnswerShape::Number);
}

#[test]
fn test_text_in_context_then_split() {
    let q = question("Hello {{name}}|Bye {{name}}");
    let catalog = SurveyCatalog::new();
    let presenter = Presenter::new(&catalog);
    let context = HandlebarsContext::new(json!({"name": "Ann|Bob"}), ResolutionMode::Relaxed);

    // The context is applied before splitting, so a `|` in the data splits too.
    assert_eq!(
        presenter.text_for(&q, Some(TextPosition::Post), Some(&context), None),
        "Bob|Bye Ann|Bob"
    );
    assert_eq!(
        presenter.text_for(&q, Some(TextPosition::Pre), Some(&context), None),
        "Hello Ann"
    );
}

#[test]
fn test_survey_and_group_translations() {
    let mut catalog = SurveyCatalog::new();
    let mut survey = Survey::new("Pets").with_description("About pets");
    survey
        .add_translation_yaml(
            "de",
            r#"
title: Haustiere
question_groups:
  owner:
    text: Besitzer
    help_text: Über dich
"#,
        )
        .unwrap();
    let survey = catalog.add_survey(survey);
    let section = catalog.add_section(SurveySection::new("Main", survey));
    let group = QuestionGroup::new("Owner").with_reference("owner").in_section(section);
    let group = catalog.add_group(group);

    let presenter = Presenter::new(&catalog);
    let group = catalog.group(group).unwrap();
    assert_eq!(presenter.group_text_for(group, None, Some("de")), "Besitzer");
    assert_eq!(presenter.group_help_text_for(group, None, Some("de")), "Über dich");
    assert_eq!(presenter.group_text_for(group, None, None), "Owner");

    let text = catalog.survey(survey).unwrap().translation(Some("de"));
    assert_eq!(text.title, "Haustiere");
    assert_eq!(text.description.as_deref(), Some("About pets"));
}

#[test]
fn test_null_override_clears_help_text() {
    let mut catalog = SurveyCatalog::new();
    let mut survey = Survey::new("S");
    survey
        .add_translation_yaml("es", "questions:\n  q1:\n    help_text: ~\n")
        .unwrap();
    let survey = catalog.add_survey(survey);
    let section = catalog.add_section(SurveySection::new("Main", survey));
    let q = question("Name?")
        .with_reference("q1")
        .with_help_text("Base help")
        .in_section(section);

    let presenter = Presenter::new(&catalog);
    assert_eq!(presenter.help_text_for(&q, None, Some("es")), "");
    assert_eq!(presenter.text_for(&q, None, None, Some("es")), "Name?");
    assert_eq!(presenter.help_text_for(&q, None, None), "Base help");
}
