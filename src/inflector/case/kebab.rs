use super::*;

/// Converts a `&str` to kebab-case `String`
///
/// Unlike camelCase and dot.case, kebab-case refuses input with no words in
/// it: an empty or whitespace-only string, or one made only of delimiters,
/// is a [`CaseError::Empty`].
///
/// ```
/// use caseconv::inflector::case::to_kebab_case;
///
/// assert_eq!(to_kebab_case("HelloWorld").unwrap(), "hello-world");
/// assert_eq!(to_kebab_case("hello_world").unwrap(), "hello-world");
/// assert_eq!(to_kebab_case("HELLO WORLD").unwrap(), "hello-world");
/// assert_eq!(to_kebab_case("  hello   world  ").unwrap(), "hello-world");
/// assert_eq!(to_kebab_case("hello@world").unwrap(), "hello-world");
/// assert!(to_kebab_case("").is_err());
/// ```
pub fn to_kebab_case(non_kebab_case_string: &str) -> Result<String, CaseError> {
    Case::Kebab.convert(non_kebab_case_string)
}

/// Determines if a `&str` is kebab-case
///
/// ```
/// use caseconv::inflector::case::is_kebab_case;
///
/// assert!(is_kebab_case("foo-bar-string-that-is-really-really-long"));
/// assert!(is_kebab_case("foo-bar1-string"));
///
/// assert!(!is_kebab_case("FooBarIsAReallyReallyLongString"));
/// assert!(!is_kebab_case("foo_bar"));
/// assert!(!is_kebab_case(""));
/// ```
pub fn is_kebab_case(test_string: &str) -> bool {
    Case::Kebab.is_case(test_string)
}
