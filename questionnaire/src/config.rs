//! Presentation configuration, loaded from YAML.

use std::{fs, path::Path};

use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::context::{HandlebarsContext, ResolutionMode};

/// Settings shared by everything that presents questions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionnaireConfig {
    /// Locale used when a caller does not ask for one.
    pub default_locale: Option<String>,

    /// Fail template placeholders that have no value instead of blanking them.
    pub strict_templates: bool,

    /// Prefix for relative image sources.
    pub asset_prefix: Option<String>,
}

impl QuestionnaireConfig {
    /// Parse configuration from a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).context("Failed to parse questionnaire config")
    }

    /// Load configuration from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// The template resolution mode these settings select.
    pub fn resolution_mode(&self) -> ResolutionMode {
        if self.strict_templates {
            ResolutionMode::Strict
        } else {
            ResolutionMode::Relaxed
        }
    }

    /// Build a template context over `data` using these settings.
    pub fn template_context(&self, data: Value) -> HandlebarsContext {
        HandlebarsContext::new(data, self.resolution_mode())
    }

    /// Pick the locale to use for a request.
    pub fn locale<'a>(&'a self, requested: Option<&'a str>) -> Option<&'a str> {
        requested.or(self.default_locale.as_deref())
    }
}
