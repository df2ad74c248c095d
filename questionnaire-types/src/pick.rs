use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::QuestionError;

/// How many discrete answers a question lets the respondent select.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pick {
    /// No selection; the answer is typed in (string, text, number...).
    #[default]
    None,

    /// Select any number of answers (checkboxes).
    Any,

    /// Select exactly one answer (radio buttons).
    One,
}

impl Pick {
    /// The canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Any => "any",
            Self::One => "one",
        }
    }

    /// Check if this mode selects from a list of answers.
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::Any | Self::One)
    }
}

impl fmt::Display for Pick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pick {
    type Err = QuestionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_start_matches(':') {
            "none" => Ok(Self::None),
            "any" => Ok(Self::Any),
            "one" => Ok(Self::One),
            other => Err(QuestionError::UnknownPick(other.to_string())),
        }
    }
}
