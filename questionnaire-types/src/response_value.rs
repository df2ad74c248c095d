use crate::{ResponseClass, ResponseError};

/// What a respondent entered for one answer.
///
/// Date and time answers are kept as the text the respondent typed.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseValue {
    /// Selecting the answer is the whole response.
    Picked,
    String(String),
    Text(String),
    Integer(i64),
    Float(f64),
}

impl ResponseValue {
    /// Parse raw input according to the answer's response class.
    pub fn parse(class: ResponseClass, raw: &str) -> Result<Self, ResponseError> {
        let invalid = || ResponseError::InvalidValue {
            class,
            value: raw.to_string(),
        };
        match class {
            ResponseClass::Answer => Ok(Self::Picked),
            ResponseClass::Text => Ok(Self::Text(raw.to_string())),
            ResponseClass::Integer => raw.trim().parse().map(Self::Integer).map_err(|_| invalid()),
            ResponseClass::Float => raw.trim().parse().map(Self::Float).map_err(|_| invalid()),
            ResponseClass::String
            | ResponseClass::Date
            | ResponseClass::Time
            | ResponseClass::Datetime => Ok(Self::String(raw.trim().to_string())),
        }
    }

    /// The response class this value satisfies.
    pub fn response_class(&self) -> ResponseClass {
        match self {
            Self::Picked => ResponseClass::Answer,
            Self::String(_) => ResponseClass::String,
            Self::Text(_) => ResponseClass::Text,
            Self::Integer(_) => ResponseClass::Integer,
            Self::Float(_) => ResponseClass::Float,
        }
    }

    /// Text content of string and text values.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) | Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Check if nothing meaningful was entered.
    pub fn is_blank(&self) -> bool {
        self.as_str().is_some_and(|s| s.trim().is_empty())
    }

    /// Name used in error messages.
    pub fn type_name(&self) -> &'static str {
        self.response_class().as_str()
    }
}

impl From<String> for ResponseValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for ResponseValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<i64> for ResponseValue {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<f64> for ResponseValue {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_by_class() {
        assert_eq!(
            ResponseValue::parse(ResponseClass::Integer, " 42 ").unwrap(),
            ResponseValue::Integer(42)
        );
        assert_eq!(
            ResponseValue::parse(ResponseClass::Float, "1.5").unwrap(),
            ResponseValue::Float(1.5)
        );
        assert_eq!(
            ResponseValue::parse(ResponseClass::Text, "line one\nline two").unwrap(),
            ResponseValue::Text("line one\nline two".to_string())
        );
        assert_eq!(
            ResponseValue::parse(ResponseClass::Date, "2024-01-31").unwrap(),
            ResponseValue::String("2024-01-31".to_string())
        );
        assert_eq!(
            ResponseValue::parse(ResponseClass::Answer, "ignored").unwrap(),
            ResponseValue::Picked
        );
    }

    #[test]
    fn parse_invalid_number() {
        let result = ResponseValue::parse(ResponseClass::Integer, "many");
        assert!(matches!(
            result,
            Err(ResponseError::InvalidValue { class: ResponseClass::Integer, value }) if value == "many"
        ));
    }

    #[test]
    fn class_and_blankness() {
        assert_eq!(ResponseValue::from(3.0).response_class(), ResponseClass::Float);
        assert_eq!(ResponseValue::Picked.type_name(), "answer");
        assert!(ResponseValue::from("  ").is_blank());
        assert!(!ResponseValue::Picked.is_blank());
    }
}
