use std::collections::BTreeMap;

use crate::{SurveyId, TranslationError, TranslationTable};

/// A survey: title, description and per-locale translation tables.
#[derive(Debug, Clone, Default)]
pub struct Survey {
    pub title: String,
    pub description: Option<String>,
    pub access_code: Option<String>,
    pub api_id: Option<String>,
    translations: BTreeMap<String, TranslationTable>,
}

/// A survey's title and description after locale overrides are applied.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyText {
    pub title: String,
    pub description: Option<String>,
}

impl Survey {
    /// Create a new survey with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Register the translation table for a locale, replacing any previous one.
    pub fn add_translation(&mut self, locale: impl Into<String>, table: TranslationTable) {
        self.translations.insert(locale.into(), table);
    }

    /// Parse and register a locale's translation table from YAML.
    pub fn add_translation_yaml(
        &mut self,
        locale: impl Into<String>,
        yaml: &str,
    ) -> Result<(), TranslationError> {
        let locale = locale.into();
        let table = TranslationTable::from_yaml(&locale, yaml)?;
        self.translations.insert(locale, table);
        Ok(())
    }

    /// Get the translation table for a locale, if one is registered.
    pub fn translations_for(&self, locale: &str) -> Option<&TranslationTable> {
        self.translations.get(locale)
    }

    /// Get the registered locales in sorted order.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.translations.keys().map(String::as_str)
    }

    /// Get the survey title and description for a locale.
    ///
    /// Falls back to the base values for anything the locale does not override.
    pub fn translation(&self, locale: Option<&str>) -> SurveyText {
        let table = locale.and_then(|l| self.translations_for(l));
        SurveyText {
            title: table
                .and_then(|t| t.title.clone())
                .unwrap_or_else(|| self.title.clone()),
            description: table
                .and_then(|t| t.description.clone())
                .or_else(|| self.description.clone()),
        }
    }
}

/// A section of a survey. Questions hold a reference to their section.
#[derive(Debug, Clone, Default)]
pub struct SurveySection {
    pub title: String,
    pub reference_identifier: Option<String>,
    pub survey: Option<SurveyId>,
}

impl SurveySection {
    /// Create a section belonging to a survey.
    pub fn new(title: impl Into<String>, survey: SurveyId) -> Self {
        Self {
            title: title.into(),
            reference_identifier: None,
            survey: Some(survey),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_translation() {
        let mut survey = Survey::new("Colors").with_description("All about colors");
        survey
            .add_translation_yaml("es", "title: Colores")
            .unwrap();

        let es = survey.translation(Some("es"));
        assert_eq!(es.title, "Colores");
        assert_eq!(es.description.as_deref(), Some("All about colors"));

        let base = survey.translation(None);
        assert_eq!(base.title, "Colors");

        let unknown = survey.translation(Some("ja"));
        assert_eq!(unknown.title, "Colors");
    }

    #[test]
    fn locales_sorted() {
        let mut survey = Survey::new("Colors");
        survey.add_translation("fr", TranslationTable::default());
        survey.add_translation("de", TranslationTable::default());
        assert_eq!(survey.locales().collect::<Vec<_>>(), vec!["de", "fr"]);
    }
}
