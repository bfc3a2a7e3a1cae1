use regex::Regex;
use std::sync::LazyLock;

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-_.]+").expect("separator pattern should be valid"));

/// Normalizes a project name for comparison.
///
/// Runs of `-`, `_` and `.` collapse to a single `-` and the result is
/// lowercased, so `My_Package`, `my-package` and `MY.PACKAGE` are the same
/// project. Applying it twice changes nothing.
pub fn canonicalize_name(name: &str) -> String {
    SEPARATORS.replace_all(name, "-").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_and_case_insensitive() {
        let expected = "my-package";
        assert_eq!(canonicalize_name("My_Package"), expected);
        assert_eq!(canonicalize_name("my-package"), expected);
        assert_eq!(canonicalize_name("MY.PACKAGE"), expected);
        assert_eq!(canonicalize_name("my__-.package"), expected);
    }

    #[test]
    fn test_idempotent() {
        for name in ["Django", "zope.interface", "ruamel.yaml.clib", "A--B__c"] {
            let once = canonicalize_name(name);
            assert_eq!(canonicalize_name(&once), once);
        }
    }

    #[test]
    fn test_leading_and_trailing_separators_kept() {
        assert_eq!(canonicalize_name("_private_"), "-private-");
    }
}
