//! Case folding for free-text fields (role, company, location, industry).
//!
//! Grouping and the analytics functions compare keys exactly; callers that
//! want case-insensitive matching normalize first with these helpers.

/// Trim surrounding whitespace and lowercase.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// True if the normalized forms are equal.
pub fn eq_normalized(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

/// True if the normalized `haystack` contains the normalized `needle`.
///
/// An empty needle matches everything.
pub fn contains_normalized(haystack: &str, needle: &str) -> bool {
    normalize(haystack).contains(&normalize(needle))
}
