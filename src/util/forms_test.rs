use super::*;

#[test]
fn keeps_trimmed_content() {
    assert_eq!(non_empty("  Professor  "), Some("Professor".to_owned()));
}

#[test]
fn whitespace_only_becomes_none() {
    assert_eq!(non_empty("   "), None);
    assert_eq!(non_empty(""), None);
}
