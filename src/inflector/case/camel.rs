use super::*;

/// Converts a `&str` to camelCase `String`
///
/// Input that is empty after trimming, or made only of delimiters, converts
/// to the empty string.
///
/// ```
/// use caseconv::inflector::case::to_camel_case;
///
/// assert_eq!(to_camel_case("fooBar"), "fooBar");
/// assert_eq!(to_camel_case("FOO_BAR"), "fooBar");
/// assert_eq!(to_camel_case("Foo Bar"), "fooBar");
/// assert_eq!(to_camel_case("foo_bar"), "fooBar");
/// assert_eq!(to_camel_case("foo-bar"), "fooBar");
/// assert_eq!(to_camel_case("FooBar"), "fooBar");
/// assert_eq!(to_camel_case("FooBar3"), "fooBar3");
/// assert_eq!(to_camel_case("hello_world-test case"), "helloWorldTestCase");
/// assert_eq!(to_camel_case("  "), "");
/// ```
pub fn to_camel_case(non_camelized_string: &str) -> String {
    Case::Camel.join(&Case::Camel.tokenize(non_camelized_string))
}

/// Determines if a `&str` is camelCase
///
/// ```
/// use caseconv::inflector::case::is_camel_case;
///
/// assert!(is_camel_case("foo"));
/// assert!(is_camel_case("fooBarIsReally3longString"));
///
/// assert!(!is_camel_case("Foo"));
/// assert!(!is_camel_case("foo-bar-string-that-is-really-really-long"));
/// assert!(!is_camel_case("FooBarIsAReallyReallyLongString"));
/// ```
pub fn is_camel_case(test_string: &str) -> bool {
    Case::Camel.is_case(test_string)
}
