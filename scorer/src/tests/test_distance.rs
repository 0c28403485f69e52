use crate::{dl_distance, osa_distance};

#[test]
fn test_dl_distance_literals() {
    let cases = [
        ("", "", 0),
        ("a", "b", 1),
        ("ca", "abc", 2),
        ("cac", "aca", 2),
        ("cacaca", "acacac", 2),
        ("", "abc", 3),
        ("ab", "bca", 2),
        ("badc", "abcd", 2),
        ("supervisor", "pervisor", 2),
    ];
    for (lhs, rhs, expected) in cases {
        assert_eq!(dl_distance(lhs, rhs), expected, "{lhs:?} -> {rhs:?}");
    }
}

#[test]
fn test_dl_distance_empty_rhs_is_lhs_len() {
    assert_eq!(dl_distance("abc", ""), 3);
    assert_eq!(dl_distance("日本語", ""), 3);
}

#[test]
fn test_dl_distance_counts_chars_not_bytes() {
    assert_eq!(dl_distance("é", "e"), 1);
    assert_eq!(dl_distance("日本", "本日"), 1);
}

#[test]
fn test_dl_distance_without_shared_structure_is_longer_len() {
    assert_eq!(dl_distance("abc", "xyz"), 3);
    assert_eq!(dl_distance("ab", "wxyz"), 4);
}

#[test]
fn test_restricted_variant_misses_split_transposition() {
    assert_eq!(dl_distance("ca", "abc"), 2);
    assert_eq!(osa_distance("ca", "abc"), 3);
}

#[test]
fn test_restricted_variant_agrees_on_adjacent_swaps() {
    assert_eq!(osa_distance("ab", "ba"), 1);
    assert_eq!(dl_distance("ab", "ba"), 1);
    assert_eq!(osa_distance("kitten", "sitting"), 3);
    assert_eq!(dl_distance("kitten", "sitting"), 3);
}
