//! String-level similarity primitives for completion ranking.
//!
//! Pipeline: bounded estimators (cheap prefilter) → composite metrics → ranking.
//! Ranking itself lives in `reviewer`; this crate only scores.
//! All lengths and positions are counted in `char`s, never bytes.
mod config;
mod distance;
mod metrics;
mod ratio;
mod tests;

pub use config::{CaseRule, ConfigError, DEFAULT_LOOK_AHEAD, MAX_LOOK_AHEAD, ScorerConfig};
pub use distance::{dl_distance, dl_distance_chars, osa_distance};
pub use metrics::{MatchMetrics, metrics, prefix_matches};
pub use ratio::{multi_set_ratio, quick_ratio};

/// Estimator values for one candidate, computed before the exact metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub quick: f64,
    pub multi_set: f64,
}

impl Estimate {
    /// The pessimistic combination of both estimators.
    pub fn worst(self) -> f64 {
        f64::min(self.quick, self.multi_set)
    }
}

/// A validated scoring configuration.
///
/// Built once from explicit configuration; there is no process-wide default.
#[derive(Debug, Clone)]
pub struct Scorer {
    config: ScorerConfig,
}

impl Scorer {
    pub fn new(config: ScorerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        tracing::trace!(
            look_ahead = config.look_ahead,
            case = ?config.case,
            "scorer configured"
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    /// Prepares the typed word for one scoring pass.
    ///
    /// The case policy is resolved here, once per keystroke, not once per candidate.
    pub fn query(&self, cword: &str) -> Query {
        let fold = self.config.case.folds(cword);
        Query {
            chars: fold_chars(cword, fold),
            fold,
            look_ahead: self.config.look_ahead,
        }
    }

    pub fn metrics(&self, cword: &str, candidate: &str) -> MatchMetrics {
        self.query(cword).metrics(candidate)
    }
}

/// The typed word of one pass, folded according to the case policy.
#[derive(Debug, Clone)]
pub struct Query {
    chars: Vec<char>,
    fold: bool,
    look_ahead: usize,
}

impl Query {
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn prefix_matches(&self, candidate: &str) -> usize {
        metrics::common_prefix(&self.chars, &fold_chars(candidate, self.fold))
    }

    pub fn estimate(&self, candidate: &str) -> Estimate {
        let candidate = fold_chars(candidate, self.fold);
        Estimate {
            quick: ratio::quick_ratio_chars(&self.chars, &candidate, self.look_ahead),
            multi_set: ratio::multi_set_ratio_chars(&self.chars, &candidate, self.look_ahead),
        }
    }

    pub fn metrics(&self, candidate: &str) -> MatchMetrics {
        metrics::metrics_chars(
            &self.chars,
            &fold_chars(candidate, self.fold),
            self.look_ahead,
        )
    }
}

fn fold_chars(s: &str, fold: bool) -> Vec<char> {
    if fold {
        s.chars().flat_map(char::to_lowercase).collect()
    } else {
        s.chars().collect()
    }
}
