//! Case-insensitive substring matching for free-text search.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

/// True when `needle` occurs in `haystack`, ignoring case.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
