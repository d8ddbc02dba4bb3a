use std::path::Path;

use serde::Deserialize;

use crate::SessionError;

/// Optional YAML config; every field has a CLI/env override.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct SessionConfig {
    pub database_url: Option<String>,
    pub policy: Option<String>,
}

impl SessionConfig {
    pub fn load(path: Option<&Path>) -> Result<Self, SessionError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = std::fs::read_to_string(path)
            .map_err(|e| SessionError::Config(format!("{}: {e}", path.display())))?;
        serde_yaml::from_str(&raw).map_err(|e| SessionError::Config(e.to_string()))
    }
}
