use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::QuestionError;

/// The kind of value an answer collects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseClass {
    /// Selecting the answer is the response.
    #[default]
    Answer,
    /// Single-line text.
    String,
    /// Multi-line text.
    Text,
    Integer,
    Float,
    Date,
    Time,
    Datetime,
}

impl ResponseClass {
    /// The canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Answer => "answer",
            Self::String => "string",
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Date => "date",
            Self::Time => "time",
            Self::Datetime => "datetime",
        }
    }
}

impl fmt::Display for ResponseClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResponseClass {
    type Err = QuestionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_start_matches(':') {
            "answer" => Ok(Self::Answer),
            "string" => Ok(Self::String),
            "text" => Ok(Self::Text),
            "integer" => Ok(Self::Integer),
            "float" => Ok(Self::Float),
            "date" => Ok(Self::Date),
            "time" => Ok(Self::Time),
            "datetime" => Ok(Self::Datetime),
            other => Err(QuestionError::UnknownResponseClass(other.to_string())),
        }
    }
}
