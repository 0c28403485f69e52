//! Edit distances over `char` sequences.
//!
//! `dl_distance` is the unrestricted Damerau-Levenshtein distance: a transposition may
//! have any number of characters between the swapped pair, as long as those characters
//! are inserted or deleted separately. `osa_distance` is the restricted variant that only
//! sees swaps of characters adjacent in both strings, and can over-count:
//! `"ca"` → `"abc"` is 2 under the former and 3 under the latter.

use rustc_hash::FxHashMap;

/// Unrestricted Damerau-Levenshtein distance between two strings, in chars.
pub fn dl_distance(lhs: &str, rhs: &str) -> usize {
    let lhs: Vec<char> = lhs.chars().collect();
    let rhs: Vec<char> = rhs.chars().collect();
    dl_distance_chars(&lhs, &rhs)
}

/// [`dl_distance`] over already-decoded chars.
///
/// Lowrance-Wagner table with a sentinel row and column. For every char, `last_row`
/// remembers the last `lhs` row it occurred in; within a row, `last_col` remembers the
/// last `rhs` column that matched. A transposition from `(k, l)` to `(i, j)` costs
/// `1` plus the chars deleted and inserted in between.
pub fn dl_distance_chars(lhs: &[char], rhs: &[char]) -> usize {
    let (n, m) = (lhs.len(), rhs.len());
    if n == 0 {
        return m;
    }
    if m == 0 {
        return n;
    }

    let unreachable = n + m;
    let width = m + 2;
    let at = |i: usize, j: usize| i * width + j;

    let mut table = vec![0usize; (n + 2) * width];
    table[at(0, 0)] = unreachable;
    for i in 0..=n {
        table[at(i + 1, 0)] = unreachable;
        table[at(i + 1, 1)] = i;
    }
    for j in 0..=m {
        table[at(0, j + 1)] = unreachable;
        table[at(1, j + 1)] = j;
    }

    let mut last_row: FxHashMap<char, usize> = FxHashMap::default();
    for i in 1..=n {
        let mut last_col = 0usize;
        for j in 1..=m {
            let k = last_row.get(&rhs[j - 1]).copied().unwrap_or(0);
            let l = last_col;

            let cost = if lhs[i - 1] == rhs[j - 1] {
                last_col = j;
                0
            } else {
                1
            };

            let substitute = table[at(i, j)] + cost;
            let insert = table[at(i + 1, j)] + 1;
            let delete = table[at(i, j + 1)] + 1;
            // `k == 0` or `l == 0` lands on the sentinel border.
            let transpose = table[at(k, l)] + (i - k - 1) + 1 + (j - l - 1);

            table[at(i + 1, j + 1)] = substitute.min(insert).min(delete).min(transpose);
        }
        last_row.insert(lhs[i - 1], i);
    }

    table[at(n + 1, m + 1)]
}

/// Restricted edit distance (optimal string alignment), in chars.
///
/// Only swaps of neighbouring characters count as a single edit, and no substring may
/// be edited twice.
pub fn osa_distance(lhs: &str, rhs: &str) -> usize {
    let lhs: Vec<char> = lhs.chars().collect();
    let rhs: Vec<char> = rhs.chars().collect();
    let (n, m) = (lhs.len(), rhs.len());
    if n == 0 {
        return m;
    }
    if m == 0 {
        return n;
    }

    let width = m + 1;
    let at = |i: usize, j: usize| i * width + j;
    let mut table = vec![0usize; (n + 1) * width];
    for i in 0..=n {
        table[at(i, 0)] = i;
    }
    for j in 0..=m {
        table[at(0, j)] = j;
    }

    for i in 1..=n {
        for j in 1..=m {
            let cost = usize::from(lhs[i - 1] != rhs[j - 1]);
            let mut best = (table[at(i - 1, j)] + 1)
                .min(table[at(i, j - 1)] + 1)
                .min(table[at(i - 1, j - 1)] + cost);
            if i > 1 && j > 1 && lhs[i - 1] == rhs[j - 2] && lhs[i - 2] == rhs[j - 1] {
                best = best.min(table[at(i - 2, j - 2)] + 1);
            }
            table[at(i, j)] = best;
        }
    }

    table[at(n, m)]
}
