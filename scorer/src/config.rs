use serde::{Deserialize, Serialize};

/// Default for `ScorerConfig.look_ahead`.
pub const DEFAULT_LOOK_AHEAD: usize = 2;

/// Largest accepted look-ahead window.
///
/// The exact metric is quadratic in `cword.len() + look_ahead`.
pub const MAX_LOOK_AHEAD: usize = 64;

/// How letter case is treated when comparing the typed word with a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseRule {
    Sensitive,
    Insensitive,
    /// Case-insensitive unless the typed word contains an uppercase char.
    #[default]
    Smart,
}

impl CaseRule {
    /// Whether both operands should be lowercased for this typed word.
    pub fn folds(self, cword: &str) -> bool {
        match self {
            CaseRule::Sensitive => false,
            CaseRule::Insensitive => true,
            CaseRule::Smart => !cword.chars().any(char::is_uppercase),
        }
    }
}

/// Configuration knobs for `Scorer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScorerConfig {
    /// Chars of the candidate examined past the typed length.
    pub look_ahead: usize,
    pub case: CaseRule,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            look_ahead: DEFAULT_LOOK_AHEAD,
            case: CaseRule::default(),
        }
    }
}

impl ScorerConfig {
    /// Parses a JSON document; absent fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.look_ahead > MAX_LOOK_AHEAD {
            return Err(ConfigError::LookAheadTooLarge {
                max: MAX_LOOK_AHEAD,
                actual: self.look_ahead,
            });
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid scorer config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("look_ahead must be at most {max}, got {actual}")]
    LookAheadTooLarge { max: usize, actual: usize },
}
