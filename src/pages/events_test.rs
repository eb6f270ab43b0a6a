use super::*;

fn event(title: &str, description: &str) -> EventRecord {
    EventRecord {
        id: "e1".to_owned(),
        title: title.to_owned(),
        date: "12 March 2026".to_owned(),
        venue: "Main Auditorium".to_owned(),
        description: description.to_owned(),
        image: None,
        created_at: 0,
    }
}

// === matches_event ===========================================================

#[test]
fn blank_query_matches_everything() {
    assert!(matches_event(&event("Tech Symposium", ""), ""));
    assert!(matches_event(&event("Tech Symposium", ""), "   "));
}

#[test]
fn matches_title_case_insensitively() {
    assert!(matches_event(&event("Tech Symposium", ""), "symposium"));
    assert!(matches_event(&event("Tech Symposium", ""), "TECH"));
}

#[test]
fn matches_description() {
    let e = event("Workshop", "Hands-on session on embedded Rust");
    assert!(matches_event(&e, "embedded"));
}

#[test]
fn ignores_surrounding_whitespace_in_query() {
    assert!(matches_event(&event("Tech Symposium", ""), "  tech  "));
}

#[test]
fn non_matching_query_excludes() {
    assert!(!matches_event(&event("Tech Symposium", "Annual event"), "hackathon"));
}
