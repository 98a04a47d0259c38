//! Prefix and folder normalization.
//!
//! Namespace prefixes are logical names: separators are trimmed from both
//! ends, so `\App\` and `App` register the same prefix. Base folders keep
//! their leading separator (an absolute folder must stay absolute) and only
//! lose trailing ones.

/// Namespace separator in fully qualified class names.
pub const NAMESPACE_SEPARATOR: char = '\\';

/// Characters treated as separators when normalizing input.
const SEPARATORS: [char; 2] = ['\\', '/'];

/// Trim whitespace and separator characters from both ends.
///
/// Returns `None` when nothing remains, which callers map to the
/// appropriate [`AutoloadError`](crate::error::AutoloadError) variant.
pub fn trim_separators(value: &str) -> Option<&str> {
    let trimmed = value.trim().trim_matches(&SEPARATORS[..]);
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Trim whitespace from both ends and separator characters from the end
/// only, preserving absolute paths.
///
/// Returns `None` when nothing remains.
pub fn trim_trailing_separators(value: &str) -> Option<&str> {
    let trimmed = value.trim().trim_end_matches(&SEPARATORS[..]);
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
