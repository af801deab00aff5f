use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How a session sets up its games.
///
/// ```ron
/// (automated_opponent: true)
/// ```
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// X is played by a human and O answers automatically.
    pub automated_opponent: bool,
}

impl SessionConfig {
    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(text)?)
    }

    pub fn to_ron(&self) -> Result<String, ConfigError> {
        Ok(ron::to_string(self)?)
    }
}
