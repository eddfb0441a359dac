use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{FieldName, Operator};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid widget configuration: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Widget configuration has an empty field name")]
    EmptyFieldName,
}

// Serializable, comparable, explicit defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetWidgetConfig {
    pub field_name: FieldName,
    /// Maximum number of facet values to request and display.
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default)]
    pub operator: Operator,
    /// Whether contributed constraints are kept out of public filter listings.
    #[serde(default)]
    pub hidden: bool,
    /// Single-choice mode: a new selection replaces the old one.
    #[serde(default)]
    pub replace: bool,
}

impl FacetWidgetConfig {
    pub fn new(field_name: impl Into<FieldName>) -> Self {
        Self {
            field_name: field_name.into(),
            limit: None,
            operator: Operator::And,
            hidden: false,
            replace: false,
        }
    }

    pub fn from_json(body: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(body)?;
        if config.field_name.is_empty() {
            return Err(ConfigError::EmptyFieldName);
        }
        Ok(config)
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_operator(mut self, operator: Operator) -> Self {
        self.operator = operator;
        self
    }

    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn with_replace(mut self, replace: bool) -> Self {
        self.replace = replace;
        self
    }
}
