//! Review configuration.
//!
//! Every field has a default, so a user document only names what it overrides.
//! Per-source `short_name` and `weight_adjust` fall back to the source's own defaults
//! when left out, even if other fields of that source are given.

use scorer::{CaseRule, DEFAULT_LOOK_AHEAD, ScorerConfig};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::completion::SourceKind;
use crate::context::is_word;

/// Default for `MatchOptions.exact_matches`.
pub const DEFAULT_EXACT_MATCHES: usize = 2;
/// Default for `MatchOptions.fuzzy_cutoff`.
pub const DEFAULT_FUZZY_CUTOFF: f64 = 0.6;
/// Default for `MatchOptions.max_results`.
pub const DEFAULT_MAX_RESULTS: usize = 33;
/// Default for `MatchOptions.unifying_chars`.
pub const DEFAULT_UNIFYING_CHARS: &str = "-_";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReviewConfig {
    #[serde(rename = "match")]
    pub matching: MatchOptions,
    pub sources: SourcesConfig,
}

impl ReviewConfig {
    /// Parses a JSON document over the defaults and validates the result.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        debug!(
            look_ahead = config.matching.look_ahead,
            enabled = config.sources.enabled().count(),
            "review config loaded"
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.matching.validate()?;
        self.sources.validate()
    }
}

/// Knobs for prefiltering and ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchOptions {
    pub look_ahead: usize,
    pub case: CaseRule,
    /// Leading chars a candidate must share with the typed word to skip the fuzzy cutoff.
    pub exact_matches: usize,
    /// Minimum pessimistic estimate for candidates without enough leading matches.
    pub fuzzy_cutoff: f64,
    pub max_results: usize,
    /// Non-alphanumeric chars that still count as part of a word.
    pub unifying_chars: String,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            look_ahead: DEFAULT_LOOK_AHEAD,
            case: CaseRule::default(),
            exact_matches: DEFAULT_EXACT_MATCHES,
            fuzzy_cutoff: DEFAULT_FUZZY_CUTOFF,
            max_results: DEFAULT_MAX_RESULTS,
            unifying_chars: DEFAULT_UNIFYING_CHARS.to_string(),
        }
    }
}

impl MatchOptions {
    pub fn scorer_config(&self) -> ScorerConfig {
        ScorerConfig {
            look_ahead: self.look_ahead,
            case: self.case,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.scorer_config().validate()?;
        if !(0.0..=1.0).contains(&self.fuzzy_cutoff) {
            return Err(ConfigError::FuzzyCutoff(self.fuzzy_cutoff));
        }
        if self.max_results == 0 {
            return Err(ConfigError::MaxResults);
        }
        if let Some(c) = self
            .unifying_chars
            .chars()
            .find(|&c| c.is_whitespace() || is_word(c, ""))
        {
            return Err(ConfigError::UnifyingChar(c));
        }
        Ok(())
    }
}

/// Settings of one source as written by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceOptions {
    pub enabled: bool,
    pub short_name: Option<String>,
    pub weight_adjust: Option<f64>,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            short_name: None,
            weight_adjust: None,
        }
    }
}

/// A source's settings with its defaults filled in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedSource<'a> {
    pub kind: SourceKind,
    pub enabled: bool,
    pub short_name: &'a str,
    pub weight_adjust: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourcesConfig {
    pub buffers: SourceOptions,
    pub paths: SourceOptions,
    pub tree_sitter: SourceOptions,
    pub lsp: SourceOptions,
    pub snippets: SourceOptions,
    pub tags: SourceOptions,
    pub tmux: SourceOptions,
    pub tabnine: SourceOptions,
}

impl SourcesConfig {
    pub fn get(&self, kind: SourceKind) -> &SourceOptions {
        match kind {
            SourceKind::Buffers => &self.buffers,
            SourceKind::Paths => &self.paths,
            SourceKind::TreeSitter => &self.tree_sitter,
            SourceKind::Lsp => &self.lsp,
            SourceKind::Snippets => &self.snippets,
            SourceKind::Tags => &self.tags,
            SourceKind::Tmux => &self.tmux,
            SourceKind::Tabnine => &self.tabnine,
        }
    }

    pub fn get_mut(&mut self, kind: SourceKind) -> &mut SourceOptions {
        match kind {
            SourceKind::Buffers => &mut self.buffers,
            SourceKind::Paths => &mut self.paths,
            SourceKind::TreeSitter => &mut self.tree_sitter,
            SourceKind::Lsp => &mut self.lsp,
            SourceKind::Snippets => &mut self.snippets,
            SourceKind::Tags => &mut self.tags,
            SourceKind::Tmux => &mut self.tmux,
            SourceKind::Tabnine => &mut self.tabnine,
        }
    }

    pub fn resolve(&self, kind: SourceKind) -> ResolvedSource<'_> {
        let options = self.get(kind);
        ResolvedSource {
            kind,
            enabled: options.enabled,
            short_name: options
                .short_name
                .as_deref()
                .unwrap_or(kind.default_short_name()),
            weight_adjust: options
                .weight_adjust
                .unwrap_or(kind.default_weight_adjust()),
        }
    }

    /// Enabled sources, in canonical order.
    pub fn enabled(&self) -> impl Iterator<Item = ResolvedSource<'_>> + '_ {
        SourceKind::ALL
            .into_iter()
            .map(|kind| self.resolve(kind))
            .filter(|source| source.enabled)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for kind in SourceKind::ALL {
            let options = self.get(kind);
            if options.short_name.as_deref().is_some_and(|name| name.trim().is_empty()) {
                return Err(ConfigError::EmptyShortName(kind));
            }
            match options.weight_adjust {
                Some(value) if !value.is_finite() => {
                    return Err(ConfigError::WeightAdjust { kind, value });
                }
                _ => {}
            }
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid review config: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Scorer(#[from] scorer::ConfigError),
    #[error("fuzzy_cutoff must be within [0, 1], got {0}")]
    FuzzyCutoff(f64),
    #[error("max_results must be positive")]
    MaxResults,
    #[error("unifying char {0:?} is already a word char or whitespace")]
    UnifyingChar(char),
    #[error("source {0:?} has an empty short name")]
    EmptyShortName(SourceKind),
    #[error("source {kind:?} has a non-finite weight_adjust {value}")]
    WeightAdjust { kind: SourceKind, value: f64 },
}
