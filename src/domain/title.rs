//! Canonical title keys.
//!
//! Royalty and page-read statements frequently carry the full marketing title
//! (`"Main Title: A Subtitle"`) while the catalog stores the bare main title.
//! Both sides are reduced to the same canonical key here, once, when a record
//! is constructed; every join afterwards is plain equality.

/// Character separating a main title from its subtitle.
pub const SUBTITLE_SEPARATOR: char = ':';

/// Returns the canonical main title: everything before the first separator, trimmed.
///
/// # Examples
///
/// ```
/// use book_ad_analytics::domain::title::main_title;
///
/// assert_eq!(main_title("Dead Reckoning: A Thriller"), "Dead Reckoning");
/// assert_eq!(main_title("  Dead Reckoning "), "Dead Reckoning");
/// ```
pub fn main_title(full_title: &str) -> &str {
    full_title
        .split_once(SUBTITLE_SEPARATOR)
        .map_or(full_title, |(main, _)| main)
        .trim()
}

/// Returns the subtitle following the first separator, or an empty string.
pub fn subtitle(full_title: &str) -> &str {
    full_title
        .split_once(SUBTITLE_SEPARATOR)
        .map_or("", |(_, sub)| sub)
        .trim()
}

/// Joins a main title and subtitle back into a display title.
pub fn complete_title(main: &str, sub: &str) -> String {
    if sub.is_empty() {
        main.to_string()
    } else {
        format!("{main}{SUBTITLE_SEPARATOR} {sub}")
    }
}
