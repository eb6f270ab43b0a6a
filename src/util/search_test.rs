use super::*;

#[test]
fn matches_regardless_of_case() {
    assert!(contains_ci("John Doe", "doe"));
    assert!(contains_ci("john doe", "DOE"));
}

#[test]
fn rejects_non_substrings() {
    assert!(!contains_ci("Jane Roe", "doe"));
}

#[test]
fn empty_needle_matches_everything() {
    assert!(contains_ci("anything", ""));
}
