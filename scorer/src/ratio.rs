//! Windowed similarity estimators.
//!
//! Both are near-linear and only look `look_ahead` chars past the shorter operand
//! (multi-set) or the typed word (quick). They are used to discard hopeless candidates
//! before the quadratic edit distance runs. Results are in `[0, 1]`, 1 = most similar.

use rustc_hash::FxHashMap;

use crate::metrics::common_prefix;

/// Front-biased similarity of `lhs` (the typed word) against `rhs`.
///
/// A shared literal prefix counts fully; characters shared in any order after the
/// prefix count half.
pub fn quick_ratio(lhs: &str, rhs: &str, look_ahead: usize) -> f64 {
    let lhs: Vec<char> = lhs.chars().collect();
    let rhs: Vec<char> = rhs.chars().collect();
    quick_ratio_chars(&lhs, &rhs, look_ahead)
}

/// Order-insensitive similarity: how much of the shorter side's letters the other has.
///
/// Symmetric in its operands.
pub fn multi_set_ratio(lhs: &str, rhs: &str, look_ahead: usize) -> f64 {
    let lhs: Vec<char> = lhs.chars().collect();
    let rhs: Vec<char> = rhs.chars().collect();
    multi_set_ratio_chars(&lhs, &rhs, look_ahead)
}

pub(crate) fn quick_ratio_chars(lhs: &[char], rhs: &[char], look_ahead: usize) -> f64 {
    if lhs.is_empty() {
        return 1.0;
    }
    let shorter = usize::min(lhs.len(), rhs.len());
    if shorter == 0 {
        return 0.0;
    }

    let prefix = common_prefix(lhs, rhs);
    let cutoff = usize::min(lhs.len().saturating_add(look_ahead), rhs.len());
    let lhs_rest = &lhs[prefix..];
    let rhs_rest = &rhs[usize::min(prefix, cutoff)..cutoff];
    let shuffled = common_chars(lhs_rest, rhs_rest);

    (prefix as f64 + shuffled as f64 / 2.0) / shorter as f64
}

pub(crate) fn multi_set_ratio_chars(lhs: &[char], rhs: &[char], look_ahead: usize) -> f64 {
    let shorter = usize::min(lhs.len(), rhs.len());
    if shorter == 0 {
        return 1.0;
    }

    let cutoff = shorter.saturating_add(look_ahead);
    let lhs = &lhs[..usize::min(cutoff, lhs.len())];
    let rhs = &rhs[..usize::min(cutoff, rhs.len())];

    common_chars(lhs, rhs) as f64 / shorter as f64
}

/// Size of the multiset intersection of both sides.
fn common_chars(lhs: &[char], rhs: &[char]) -> usize {
    if lhs.is_empty() || rhs.is_empty() {
        return 0;
    }

    let mut counts: FxHashMap<char, usize> = FxHashMap::default();
    for &c in lhs {
        *counts.entry(c).or_insert(0) += 1;
    }

    let mut common = 0usize;
    for c in rhs {
        match counts.get_mut(c) {
            Some(left) if *left > 0 => {
                *left -= 1;
                common += 1;
            }
            _ => {}
        }
    }
    common
}
