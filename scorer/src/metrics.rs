use crate::distance::dl_distance_chars;

/// Per-candidate score consumed by the ranking layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchMetrics {
    /// Leading chars shared by the typed word and the candidate (positional, no alignment).
    pub prefix_matches: usize,
    /// Normalized edit score in `[0, 1]` over the look-ahead window of the candidate.
    ///
    /// `1.0` means every typed char is accounted for by the window; `0.0` means nothing is.
    /// Chars the candidate carries beyond the typed length are not charged.
    pub edit_distance: f64,
}

/// Scores `candidate` against the typed word `cword`.
///
/// Total: any pair of strings, including empty ones, yields a valid record.
pub fn metrics(cword: &str, candidate: &str, look_ahead: usize) -> MatchMetrics {
    let cword: Vec<char> = cword.chars().collect();
    let candidate: Vec<char> = candidate.chars().collect();
    metrics_chars(&cword, &candidate, look_ahead)
}

/// Length of the common literal prefix, in chars.
pub fn prefix_matches(cword: &str, candidate: &str) -> usize {
    cword
        .chars()
        .zip(candidate.chars())
        .take_while(|(a, b)| a == b)
        .count()
}

pub(crate) fn metrics_chars(cword: &[char], candidate: &[char], look_ahead: usize) -> MatchMetrics {
    let prefix_matches = common_prefix(cword, candidate);
    if cword.is_empty() {
        return MatchMetrics {
            prefix_matches,
            edit_distance: 1.0,
        };
    }

    let cutoff = usize::min(cword.len().saturating_add(look_ahead), candidate.len());
    let window = &candidate[..cutoff];
    let dist = dl_distance_chars(cword, window);
    let overhang = window.len().saturating_sub(cword.len());
    let charged = dist.saturating_sub(overhang);

    MatchMetrics {
        prefix_matches,
        edit_distance: 1.0 - charged as f64 / cword.len() as f64,
    }
}

pub(crate) fn common_prefix(lhs: &[char], rhs: &[char]) -> usize {
    lhs.iter().zip(rhs).take_while(|(a, b)| a == b).count()
}
