//! Candidate file path construction.
//!
//! Turns a fully qualified class name plus a matched prefix into a relative
//! file path. The inner namespace segments become lower-cased directories
//! (a fixed convention, regardless of the class name's own casing); the
//! final segment keeps its case and becomes the file name, optionally with
//! a configured filename prefix in front of it.

use std::path::MAIN_SEPARATOR_STR;

use crate::normalize::NAMESPACE_SEPARATOR;

/// Build the relative file path for `class` under a matched `prefix`.
///
/// `App\Models\User` matched on prefix `App` with an empty class prefix and
/// extension `php` becomes `models/User.php` (on Unix). A class directly
/// under the prefix collapses to `<class_prefix><Leaf>.<extension>`.
///
/// Operates defensively on any input and never errors; malformed input
/// degrades to empty segments. Guarding happens earlier, at registration
/// time.
pub fn class_file_path(class: &str, prefix: &str, class_prefix: &str, extension: &str) -> String {
    let rest = class.get(prefix.len()..).unwrap_or("");
    let rest = rest.trim_start_matches(NAMESPACE_SEPARATOR);

    let (inner, leaf) = match rest.rfind(NAMESPACE_SEPARATOR) {
        Some(pos) => (&rest[..pos], &rest[pos + 1..]),
        None => ("", rest),
    };

    let mut path = String::new();
    if !inner.is_empty() {
        path.push_str(&inner.to_ascii_lowercase());
        path.push(NAMESPACE_SEPARATOR);
    }
    path.push_str(class_prefix);
    path.push_str(leaf);
    path.push('.');
    path.push_str(extension);

    path.replace(NAMESPACE_SEPARATOR, MAIN_SEPARATOR_STR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sep(path: &str) -> String {
        path.replace('/', MAIN_SEPARATOR_STR)
    }

    #[test]
    fn test_inner_segments_lowercased() {
        assert_eq!(
            class_file_path("App\\Models\\User", "App", "", "php"),
            sep("models/User.php")
        );
    }

    #[test]
    fn test_nested_namespace() {
        assert_eq!(
            class_file_path("Acme\\Lib\\Utils\\Formatter", "Acme\\Lib", "", "php"),
            sep("utils/Formatter.php")
        );
        assert_eq!(
            class_file_path("App\\HTTP\\Middleware\\Auth", "App", "", "php"),
            sep("http/middleware/Auth.php")
        );
    }

    #[test]
    fn test_leaf_collapses_to_filename() {
        assert_eq!(class_file_path("App\\User", "App", "", "php"), "User.php");
    }

    #[test]
    fn test_class_prefix_applied_to_filename() {
        assert_eq!(
            class_file_path("App\\Models\\User", "App", "acme.", "php"),
            sep("models/acme.User.php")
        );
        assert_eq!(
            class_file_path("App\\User", "App", "acme.", "php"),
            "acme.User.php"
        );
    }

    #[test]
    fn test_leaf_case_preserved() {
        assert_eq!(
            class_file_path("App\\Models\\HTMLParser", "App", "", "php"),
            sep("models/HTMLParser.php")
        );
    }

    #[test]
    fn test_custom_extension() {
        assert_eq!(
            class_file_path("App\\Models\\User", "App", "", "inc"),
            sep("models/User.inc")
        );
    }

    #[test]
    fn test_defensive_on_malformed_input() {
        // Prefix longer than the class name degrades to an empty remainder.
        assert_eq!(class_file_path("App", "App\\Models", "", "php"), ".php");
        // Trailing separator leaves an empty leaf.
        assert_eq!(
            class_file_path("App\\Models\\", "App", "", "php"),
            sep("models/.php")
        );
    }
}
