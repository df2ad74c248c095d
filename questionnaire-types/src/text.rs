use std::{path::Path, str::FromStr};

use crate::{
    Context, DisplayType, ImageMarkup, Question, QuestionGroup, Survey, TextOverride,
};

/// Which side of a `|`-delimited label to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextPosition {
    /// The part before the first `|`.
    Pre,
    /// The part after the first `|`.
    Post,
}

impl FromStr for TextPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_start_matches(':') {
            "pre" => Ok(Self::Pre),
            "post" => Ok(Self::Post),
            other => Err(format!("unknown text position: {other}")),
        }
    }
}

/// Extract one side of a `|`-delimited string.
///
/// Only the first `|` separates; with no position the text is returned whole.
///
/// ```
/// use questionnaire_types::{TextPosition, split};
///
/// assert_eq!(split("A|B", Some(TextPosition::Pre)), "A");
/// assert_eq!(split("A|B", Some(TextPosition::Post)), "B");
/// assert_eq!(split("A", Some(TextPosition::Post)), "");
/// assert_eq!(split("A|B", None), "A|B");
/// ```
pub fn split(text: &str, position: Option<TextPosition>) -> String {
    let part = match position {
        Some(TextPosition::Pre) => text.split_once('|').map_or(text, |(pre, _)| pre),
        Some(TextPosition::Post) => text.split_once('|').map_or("", |(_, post)| post),
        None => text,
    };
    part.to_string()
}

/// Alternative label for an image: the file name without extension, capitalized.
pub fn image_alt(src: &str) -> String {
    let stem = Path::new(src)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(src);
    let mut chars = stem.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn in_context(text: &str, context: Option<&dyn Context>) -> String {
    match context {
        Some(context) => context.in_context(text),
        None => text.to_string(),
    }
}

impl Question {
    /// Base text and help text overlaid with the survey's locale override.
    ///
    /// A missing survey, locale or reference identifier means no override.
    pub fn translation(&self, survey: Option<&Survey>, locale: Option<&str>) -> TextOverride {
        let base = TextOverride::new(self.text(), self.help_text().map(str::to_string));
        let overlay = survey
            .zip(locale)
            .and_then(|(survey, locale)| survey.translations_for(locale))
            .zip(self.reference_identifier())
            .and_then(|(table, reference)| table.question(reference));
        match overlay {
            Some(overlay) => base.merge(overlay),
            None => base,
        }
    }

    /// The label to display: translated, rendered in context, split, then image-wrapped.
    ///
    /// `hidden_label` questions always produce an empty label.
    pub fn text_for(
        &self,
        position: Option<TextPosition>,
        context: Option<&dyn Context>,
        survey: Option<&Survey>,
        locale: Option<&str>,
        images: &dyn ImageMarkup,
    ) -> String {
        if self.has_display_type(DisplayType::HIDDEN_LABEL) {
            return String::new();
        }
        let translation = self.translation(survey, locale);
        let text = translation.text().unwrap_or_default();
        let text = split(&in_context(text, context), position);
        self.imaged(text, images)
    }

    /// The help text, translated and rendered in context.
    pub fn help_text_for(
        &self,
        context: Option<&dyn Context>,
        survey: Option<&Survey>,
        locale: Option<&str>,
    ) -> String {
        let translation = self.translation(survey, locale);
        let help_text = translation.help_text().unwrap_or_default();
        in_context(help_text, context)
    }

    fn imaged(&self, text: String, images: &dyn ImageMarkup) -> String {
        if self.has_display_type(DisplayType::IMAGE) && !text.trim().is_empty() {
            images.image_tag(&text, &image_alt(&text))
        } else {
            text
        }
    }
}

impl QuestionGroup {
    /// Base text and help text overlaid with the survey's locale override.
    pub fn translation(&self, survey: Option<&Survey>, locale: Option<&str>) -> TextOverride {
        let base = TextOverride::new(self.text.clone(), self.help_text.clone());
        let overlay = survey
            .zip(locale)
            .and_then(|(survey, locale)| survey.translations_for(locale))
            .zip(self.reference_identifier.as_deref())
            .and_then(|(table, reference)| table.question_group(reference));
        match overlay {
            Some(overlay) => base.merge(overlay),
            None => base,
        }
    }

    /// The group heading, translated and rendered in context.
    pub fn text_for(
        &self,
        context: Option<&dyn Context>,
        survey: Option<&Survey>,
        locale: Option<&str>,
    ) -> String {
        if self.has_display_type(DisplayType::HIDDEN_LABEL) {
            return String::new();
        }
        let translation = self.translation(survey, locale);
        let text = translation.text().unwrap_or_default();
        in_context(text, context)
    }

    /// The group help text, translated and rendered in context.
    pub fn help_text_for(
        &self,
        context: Option<&dyn Context>,
        survey: Option<&Survey>,
        locale: Option<&str>,
    ) -> String {
        let translation = self.translation(survey, locale);
        let help_text = translation.help_text().unwrap_or_default();
        in_context(help_text, context)
    }
}
