use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::template;

/// A placeholder name paired with its default substitution value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(default)]
    pub default: String,
}

/// A stored named template with content and parameter defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prompt {
    pub id: String,
    pub name: String,
    pub content: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// The whole-collection store document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptCollection {
    #[serde(default)]
    pub prompts: Vec<Prompt>,
}

impl Prompt {
    /// Create a new prompt with a fresh id and creation timestamp
    pub fn new(name: String, content: String, parameters: Vec<Parameter>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            content,
            parameters,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Replace the content and recompute `parameters` from it, carrying
    /// over prior defaults for placeholder names that still appear
    pub fn set_content(&mut self, content: String) {
        self.parameters = recompute_parameters(&content, &self.parameters);
        self.content = content;
    }

    /// Overwrite defaults for parameters matched by name; names not
    /// present in the content are ignored
    pub fn set_defaults(&mut self, defaults: &[Parameter]) {
        for param in &mut self.parameters {
            if let Some(new) = defaults.iter().find(|d| d.name == param.name) {
                param.default = new.default.clone();
            }
        }
    }
}

/// Derive the parameter list for `content`, preserving defaults from
/// `prior` by name match
pub fn recompute_parameters(content: &str, prior: &[Parameter]) -> Vec<Parameter> {
    template::extract_parameters(content)
        .into_iter()
        .map(|name| {
            let default = prior
                .iter()
                .find(|p| p.name == name)
                .map(|p| p.default.clone())
                .unwrap_or_default();
            Parameter { name, default }
        })
        .collect()
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.parameters.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} ({} parameters)", self.name, self.parameters.len())
        }
    }
}
