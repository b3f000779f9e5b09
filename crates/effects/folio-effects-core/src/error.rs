//! Error types for the effects core

/// Errors surfaced while configuring or installing the effects.
///
/// Missing page elements are never reported here: a behavior whose elements
/// are absent simply does not activate.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EffectsError {
    /// A configuration value is out of range or malformed
    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },

    /// Configuration JSON could not be parsed
    #[error("Config parse error: {reason}")]
    ConfigParse { reason: String },

    /// No global `window` (not running in a browser main thread)
    #[error("No window available")]
    MissingWindow,

    /// The window has no document attached
    #[error("No document available")]
    MissingDocument,

    /// A DOM call that installation depends on failed
    #[error("DOM error: {reason}")]
    Dom { reason: String },
}

impl EffectsError {
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    pub fn dom(reason: impl Into<String>) -> Self {
        Self::Dom {
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for EffectsError {
    fn from(err: serde_json::Error) -> Self {
        Self::ConfigParse {
            reason: err.to_string(),
        }
    }
}
