//! Small helpers for authoring-form input handling.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

/// Trim an input value and drop it entirely when nothing remains, so
/// optional fields are stored as absent rather than as empty strings.
pub fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
