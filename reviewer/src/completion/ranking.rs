//! Prefilters, scores, merges and orders candidates.
//!
//! Order (earlier is better):
//! 1) more leading chars shared with the typed word
//! 2) higher edit score over the look-ahead window
//! 3) heavier source weight
//! 4) shorter comparison key
//! 5) arrival order

use std::cmp::Ordering;

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use scorer::{MatchMetrics, Query};

use super::{Candidate, RankedItem};
use crate::config::{MatchOptions, SourcesConfig};
use crate::pass::PassToken;

/// Below this many candidates, scoring stays on the calling thread.
pub(crate) const PARALLEL_THRESHOLD: usize = 512;

#[derive(Debug)]
pub(crate) struct Entry {
    candidate: Candidate,
    weight: f64,
    order: usize,
}

/// Drops candidates from disabled sources and resolves each candidate's total weight.
pub(crate) fn weigh(candidates: Vec<Candidate>, sources: &SourcesConfig) -> Vec<Entry> {
    candidates
        .into_iter()
        .filter_map(|candidate| {
            let source = sources.resolve(candidate.source);
            source
                .enabled
                .then(|| (candidate.weight_adjust + source.weight_adjust, candidate))
        })
        .enumerate()
        .map(|(order, (weight, candidate))| Entry {
            candidate,
            weight,
            order,
        })
        .collect()
}

/// Merges entries with identical comparison keys.
///
/// The heaviest entry's payload wins; on equal weight the earliest does. The merged
/// entry keeps the arrival position of the first occurrence.
pub(crate) fn dedupe(entries: Vec<Entry>) -> Vec<Entry> {
    let mut slots: FxHashMap<String, usize> = FxHashMap::default();
    let mut out: Vec<Entry> = Vec::with_capacity(entries.len());

    for entry in entries {
        match slots.get(entry.candidate.sort_key()) {
            Some(&slot) => {
                let kept = &mut out[slot];
                if entry.weight > kept.weight {
                    kept.candidate = entry.candidate;
                    kept.weight = entry.weight;
                }
            }
            None => {
                slots.insert(entry.candidate.sort_key().to_string(), out.len());
                out.push(entry);
            }
        }
    }
    out
}

/// Scores every entry, dropping the ones the estimators rule out.
///
/// Returns `None` as soon as `token` is superseded.
pub(crate) fn score_all(
    query: &Query,
    entries: Vec<Entry>,
    options: &MatchOptions,
    token: &PassToken,
) -> Option<Vec<RankedItem>> {
    let score = |entry: Entry| -> Option<Option<RankedItem>> {
        if token.is_superseded() {
            return None;
        }
        Some(admit(query, entry.candidate.sort_key(), options).map(|metrics| RankedItem {
            candidate: entry.candidate,
            metrics,
            weight: entry.weight,
            order: entry.order,
        }))
    };

    let scored: Option<Vec<Option<RankedItem>>> = if entries.len() >= PARALLEL_THRESHOLD {
        entries.into_par_iter().map(score).collect()
    } else {
        entries.into_iter().map(score).collect()
    };

    Some(scored?.into_iter().flatten().collect())
}

/// Computes the exact metrics for `key`, unless the cheap estimators reject it first.
///
/// A candidate is kept when nothing is typed yet, when it shares enough leading chars,
/// or when even the pessimistic estimate clears the fuzzy cutoff.
fn admit(query: &Query, key: &str, options: &MatchOptions) -> Option<MatchMetrics> {
    if query.is_empty() {
        return Some(query.metrics(key));
    }

    let required = usize::min(options.exact_matches, query.len());
    if query.prefix_matches(key) < required && query.estimate(key).worst() < options.fuzzy_cutoff {
        return None;
    }
    Some(query.metrics(key))
}

pub(crate) fn cmp_ranked(a: &RankedItem, b: &RankedItem) -> Ordering {
    b.metrics
        .prefix_matches
        .cmp(&a.metrics.prefix_matches)
        .then_with(|| b.metrics.edit_distance.total_cmp(&a.metrics.edit_distance))
        .then_with(|| b.weight.total_cmp(&a.weight))
        .then_with(|| {
            let a_len = a.candidate.sort_key().chars().count();
            let b_len = b.candidate.sort_key().chars().count();
            a_len.cmp(&b_len)
        })
        .then_with(|| a.order.cmp(&b.order))
}

pub(crate) fn sort_ranked(items: &mut [RankedItem]) {
    if items.len() >= PARALLEL_THRESHOLD {
        items.par_sort_by(cmp_ranked);
    } else {
        items.sort_by(cmp_ranked);
    }
}
