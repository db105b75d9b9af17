//! Conversions over dynamically typed input.
//!
//! The `&str` entry points cannot be handed anything but a string. Input that
//! arrives as JSON can, and this is where such input is refused with the type
//! error its target case calls for.

use serde_json::Value;

use super::{Case, CaseError, Validation};

/// Name of the value's type as JavaScript's `typeof` reports it.
///
/// `null` is an `"object"` there, and so it is here.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null | Value::Array(_) | Value::Object(_) => "object",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
    }
}

/// Converts `value` to `case`, refusing anything that isn't a string.
///
/// ```
/// use caseconv::inflector::{value, Case, CaseError};
/// use serde_json::json;
///
/// assert_eq!(value::convert(Case::Kebab, &json!("HelloWorld")).unwrap(), "hello-world");
/// assert_eq!(value::convert(Case::Kebab, &json!(null)), Err(CaseError::Missing));
/// assert_eq!(
///     value::convert(Case::Camel, &json!(123)),
///     Err(CaseError::InvalidType { received: "number" })
/// );
/// ```
pub fn convert(case: Case, value: &Value) -> Result<String, CaseError> {
    match (value, case.validation()) {
        (Value::String(s), _) => case.convert(s),
        (Value::Null, Validation::Strict) => Err(CaseError::Missing),
        (other, Validation::Strict) => Err(CaseError::NotAString {
            received: type_name(other),
        }),
        (other, Validation::Lenient) => Err(CaseError::InvalidType {
            received: type_name(other),
        }),
    }
}

pub fn to_camel_case(value: &Value) -> Result<String, CaseError> {
    convert(Case::Camel, value)
}

pub fn to_dot_case(value: &Value) -> Result<String, CaseError> {
    convert(Case::Dot, value)
}

pub fn to_kebab_case(value: &Value) -> Result<String, CaseError> {
    convert(Case::Kebab, value)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::inflector::ErrorKind;

    #[test]
    fn strings_convert() {
        assert_eq!(to_camel_case(&json!("hello world")), Ok("helloWorld".to_owned()));
        assert_eq!(to_dot_case(&json!("fooBarBaz")), Ok("foo.bar.baz".to_owned()));
        assert_eq!(
            to_kebab_case(&json!("  hello   world  ")),
            Ok("hello-world".to_owned())
        );
    }

    #[test]
    fn camel_case_rejects_number() {
        let err = to_camel_case(&json!(123)).unwrap_err();
        assert_eq!(err, CaseError::InvalidType { received: "number" });
        assert_eq!(err.kind(), ErrorKind::Type);
    }

    #[test]
    fn camel_case_rejects_null_generically() {
        assert_eq!(
            to_camel_case(&json!(null)),
            Err(CaseError::InvalidType { received: "object" })
        )
    }

    #[test]
    fn camel_case_rejects_array_and_object() {
        assert_eq!(
            to_camel_case(&json!(["hello", "world"])),
            Err(CaseError::InvalidType { received: "object" })
        );
        assert_eq!(
            to_camel_case(&json!({ "text": "hello world" })),
            Err(CaseError::InvalidType { received: "object" })
        );
    }

    #[test]
    fn dot_case_rejects_boolean() {
        assert_eq!(
            to_dot_case(&json!(true)),
            Err(CaseError::InvalidType { received: "boolean" })
        )
    }

    #[test]
    fn camel_and_dot_case_accept_blank_strings() {
        assert_eq!(to_camel_case(&json!("   ")), Ok(String::new()));
        assert_eq!(to_dot_case(&json!("")), Ok(String::new()));
    }

    #[test]
    fn kebab_case_rejects_null() {
        let err = to_kebab_case(&json!(null)).unwrap_err();
        assert_eq!(err, CaseError::Missing);
        assert_eq!(err.kind(), ErrorKind::Type);
    }

    #[test]
    fn kebab_case_rejects_number() {
        let err = to_kebab_case(&json!(123)).unwrap_err();
        assert_eq!(err, CaseError::NotAString { received: "number" });
        assert_eq!(err.kind(), ErrorKind::Type);
    }

    #[test]
    fn kebab_case_rejects_empty_string() {
        let err = to_kebab_case(&json!("")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
    }
}
