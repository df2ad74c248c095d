use crate::{Dependency, DisplayType, SectionId};

/// A group of related questions sharing a presentation style.
///
/// Groups do not own their questions; questions point at the group by id.
#[derive(Debug, Default)]
pub struct QuestionGroup {
    pub text: String,
    pub help_text: Option<String>,
    pub reference_identifier: Option<String>,
    pub display_type: Option<DisplayType>,
    pub custom_class: Option<String>,
    pub api_id: Option<String>,
    pub section: Option<SectionId>,
    pub dependency: Option<Box<dyn Dependency>>,
}

impl QuestionGroup {
    /// Create a new group with the given heading text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Set the display type.
    pub fn with_display_type(mut self, display_type: impl ToString) -> Self {
        self.display_type = Some(DisplayType::new(display_type));
        self
    }

    /// Set the reference identifier.
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference_identifier = Some(reference.into());
        self
    }

    /// Place the group in a section.
    pub fn in_section(mut self, section: SectionId) -> Self {
        self.section = Some(section);
        self
    }

    /// Attach a dependency.
    pub fn with_dependency(mut self, dependency: impl Dependency + 'static) -> Self {
        self.dependency = Some(Box::new(dependency));
        self
    }

    /// Check if the display type is set to exactly `name`.
    pub fn has_display_type(&self, name: &str) -> bool {
        self.display_type.as_ref().is_some_and(|d| d.is(name))
    }
}
