use crate::generator::{CandidateIterator, candidate_count};

fn collect_all(charset: &str, min_length: usize, max_length: usize) -> Vec<String> {
    CandidateIterator::new(charset, min_length, max_length).collect()
}

#[test]
fn test_two_symbol_space_in_order() {
    let candidates = collect_all("ab", 1, 2);
    assert_eq!(candidates, vec!["a", "b", "aa", "ab", "ba", "bb"]);
}

#[test]
fn test_rightmost_position_advances_fastest() {
    let candidates = collect_all("abc", 2, 2);
    assert_eq!(candidates.len(), 9);
    assert_eq!(candidates.first().map(String::as_str), Some("aa"));
    assert_eq!(candidates.get(1).map(String::as_str), Some("ab"));
    assert_eq!(candidates.get(2).map(String::as_str), Some("ac"));
    assert_eq!(candidates.get(3).map(String::as_str), Some("ba"));
    assert_eq!(candidates.last().map(String::as_str), Some("cc"));
}

#[test]
fn test_lengths_ascend() {
    let candidates = collect_all("ab", 1, 3);
    assert_eq!(candidates.len(), 2 + 4 + 8);
    let lengths: Vec<usize> = candidates.iter().map(String::len).collect();
    let mut sorted = lengths.clone();
    sorted.sort_unstable();
    assert_eq!(lengths, sorted);
}

#[test]
fn test_min_length_skips_shorter_candidates() {
    let candidates = collect_all("ab", 2, 2);
    assert_eq!(candidates, vec!["aa", "ab", "ba", "bb"]);
}

#[test]
fn test_inverted_bounds_yield_nothing() {
    assert!(collect_all("ab", 3, 2).is_empty());
}

#[test]
fn test_empty_charset_yields_nothing() {
    assert!(collect_all("", 1, 4).is_empty());
}

#[test]
fn test_zero_min_length_yields_empty_string_once() {
    let candidates = collect_all("ab", 0, 1);
    assert_eq!(candidates, vec!["", "a", "b"]);
}

#[test]
fn test_duplicate_symbols_are_tolerated() {
    let candidates = collect_all("aa", 1, 1);
    assert_eq!(candidates, vec!["a", "a"]);
}

#[test]
fn test_non_ascii_symbols_are_kept_whole() {
    let candidates = collect_all("é↑", 1, 2);
    assert_eq!(candidates, vec!["é", "↑", "éé", "é↑", "↑é", "↑↑"]);
}

#[test]
fn test_iterator_is_restartable() {
    let first: Vec<String> = collect_all("ab", 1, 2);
    let second: Vec<String> = collect_all("ab", 1, 2);
    assert_eq!(first, second);
}

#[test]
fn test_candidate_count_sums_powers() {
    assert_eq!(candidate_count(2, 1, 3), 14);
    assert_eq!(candidate_count(26, 1, 1), 26);
    assert_eq!(candidate_count(3, 2, 2), 9);
}

#[test]
fn test_candidate_count_degenerate_ranges() {
    assert_eq!(candidate_count(2, 3, 2), 0);
    assert_eq!(candidate_count(0, 1, 5), 0);
    assert_eq!(candidate_count(2, 0, 0), 1);
}

#[test]
fn test_candidate_count_saturates() {
    assert_eq!(candidate_count(94, 1, 1000), u128::MAX);
}
