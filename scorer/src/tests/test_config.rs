use crate::{CaseRule, ConfigError, MAX_LOOK_AHEAD, Scorer, ScorerConfig};

use super::common::assert_close;

#[test]
fn test_scorer_config_defaults_fill_missing_fields() {
    let config = ScorerConfig::from_json(r#"{ "look_ahead": 3 }"#).unwrap();
    assert_eq!(config.look_ahead, 3);
    assert_eq!(config.case, CaseRule::Smart);

    let empty = ScorerConfig::from_json("{}").unwrap();
    assert_eq!(empty, ScorerConfig::default());
}

#[test]
fn test_scorer_config_rejects_negative_look_ahead() {
    let err = ScorerConfig::from_json(r#"{ "look_ahead": -1 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)), "{err}");
}

#[test]
fn test_scorer_config_rejects_unknown_fields() {
    let err = ScorerConfig::from_json(r#"{ "lookahead": 1 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)), "{err}");
}

#[test]
fn test_scorer_rejects_oversized_look_ahead() {
    let config = ScorerConfig {
        look_ahead: MAX_LOOK_AHEAD + 1,
        ..ScorerConfig::default()
    };
    let err = Scorer::new(config).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::LookAheadTooLarge { max: MAX_LOOK_AHEAD, .. }
    ));
}

#[test]
fn test_case_rules() {
    assert!(!CaseRule::Sensitive.folds("abc"));
    assert!(CaseRule::Insensitive.folds("ABC"));
    assert!(CaseRule::Smart.folds("abc"));
    assert!(!CaseRule::Smart.folds("aBc"));
}

#[test]
fn test_smart_case_query() {
    let scorer = Scorer::new(ScorerConfig::default()).unwrap();

    let lower = scorer.query("hash");
    assert_eq!(lower.prefix_matches("HashMap"), 4);
    assert_close(lower.metrics("HashMap").edit_distance, 1.0);

    let upper = scorer.query("Hash");
    assert_eq!(upper.prefix_matches("hashmap"), 0);
    assert_eq!(upper.prefix_matches("HashMap"), 4);
}

#[test]
fn test_case_sensitive_scorer() {
    let scorer = Scorer::new(ScorerConfig {
        look_ahead: 2,
        case: CaseRule::Sensitive,
    })
    .unwrap();
    assert_eq!(scorer.metrics("ab", "AB").prefix_matches, 0);
    assert_eq!(scorer.metrics("ab", "ab").prefix_matches, 2);
}

#[test]
fn test_query_estimate_uses_window() {
    let scorer = Scorer::new(ScorerConfig::default()).unwrap();
    let query = scorer.query("ac");
    let estimate = query.estimate("ab");
    assert_close(estimate.quick, 0.5);
    assert_close(estimate.multi_set, 0.5);
    assert_close(estimate.worst(), 0.5);
    assert_eq!(query.len(), 2);
    assert!(!query.is_empty());
}
