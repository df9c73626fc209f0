use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name of the single input parameter this filter reads.
pub const USERTASK_NAME: &str = "usertaskName";

#[derive(Debug, thiserror::Error)]
pub enum ParameterValidationError {
    #[error("input parameter {0} is missing or null")]
    MissingOrNull(String),

    #[error("input parameter {0} must be a string")]
    NotAString(String),

    #[error("input parameter {0} is empty")]
    Blank(String),
}

/// Untyped name → value mapping as injected by the host engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterParameters {
    values: BTreeMap<String, Value>,
}

impl FilterParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }
}

/// Typed filter configuration, checked once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    pub usertask_name: String,
}

impl FilterConfig {
    /// `usertaskName` must be present, a string, and non-blank after trimming.
    /// The stored value keeps the raw string; the search uses it verbatim.
    pub fn from_parameters(
        parameters: &FilterParameters,
    ) -> Result<Self, ParameterValidationError> {
        let value = parameters
            .get(USERTASK_NAME)
            .filter(|v| !v.is_null())
            .ok_or_else(|| ParameterValidationError::MissingOrNull(USERTASK_NAME.to_string()))?;
        let name = value
            .as_str()
            .ok_or_else(|| ParameterValidationError::NotAString(USERTASK_NAME.to_string()))?;
        if name.trim().is_empty() {
            return Err(ParameterValidationError::Blank(USERTASK_NAME.to_string()));
        }
        Ok(Self {
            usertask_name: name.to_string(),
        })
    }
}
