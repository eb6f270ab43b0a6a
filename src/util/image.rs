//! Image fallback handling for record cards.
//!
//! A missing or broken image is a rendering concern only; it never excludes
//! a record from a view.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

/// Square placeholder for roster portraits.
pub const PORTRAIT_PLACEHOLDER: &str = "https://via.placeholder.com/300x300?text=No+Image";

/// Wide placeholder for event and award banners.
pub const BANNER_PLACEHOLDER: &str = "https://via.placeholder.com/400x300?text=No+Image";

/// Resolve the URL to render: the record's own image when present and
/// non-empty, otherwise the given placeholder.
pub fn display_url<'a>(image: Option<&'a str>, placeholder: &'a str) -> &'a str {
    match image {
        Some(url) if !url.trim().is_empty() => url,
        _ => placeholder,
    }
}
