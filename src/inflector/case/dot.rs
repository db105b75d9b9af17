use super::*;

/// Converts a `&str` to dot.case `String`
///
/// ```
/// use caseconv::inflector::case::to_dot_case;
///
/// assert_eq!(to_dot_case("fooBarBaz"), "foo.bar.baz");
/// assert_eq!(to_dot_case("hello_world"), "hello.world");
/// assert_eq!(to_dot_case("foo-bar-baz"), "foo.bar.baz");
/// assert_eq!(to_dot_case("foo bar baz"), "foo.bar.baz");
/// assert_eq!(to_dot_case("   "), "");
/// ```
pub fn to_dot_case(non_dot_case_string: &str) -> String {
    Case::Dot.join(&Case::Dot.tokenize(non_dot_case_string))
}

/// Determines if a `&str` is dot.case
///
/// ```
/// use caseconv::inflector::case::is_dot_case;
///
/// assert!(is_dot_case("foo.bar.baz"));
/// assert!(is_dot_case("foo"));
///
/// assert!(!is_dot_case("fooBar"));
/// assert!(!is_dot_case("foo-bar"));
/// assert!(!is_dot_case("Foo.Bar"));
/// ```
pub fn is_dot_case(test_string: &str) -> bool {
    Case::Dot.is_case(test_string)
}
