//! String case inflections for Rust. camelCase, dot.case and kebab-case are
//! supported both as pure functions over `&str` and through the
//! [`Inflector`] trait, sharing a single tokenizer.
//!
//! ```
//! use caseconv::inflector::Inflector;
//!
//! assert_eq!("hello world".to_camel_case(), "helloWorld");
//! assert_eq!("fooBarBaz".to_dot_case(), "foo.bar.baz");
//! assert_eq!("HelloWorld".to_kebab_case().unwrap(), "hello-world");
//! ```

/// Provides case inflections
/// - Camel case
/// - Dot case
/// - Kebab case
pub mod case;
mod error;
pub mod value;

pub use case::{tokenize, Case, Delimiters, UnknownCase, Validation};

pub use case::camel::is_camel_case;
pub use case::camel::to_camel_case;

pub use case::dot::is_dot_case;
pub use case::dot::to_dot_case;

pub use case::kebab::is_kebab_case;
pub use case::kebab::to_kebab_case;

pub use error::{CaseError, ErrorKind};

#[allow(missing_docs)]
pub trait Inflector {
    fn to_camel_case(&self) -> String;
    fn is_camel_case(&self) -> bool;

    fn to_dot_case(&self) -> String;
    fn is_dot_case(&self) -> bool;

    fn to_kebab_case(&self) -> Result<String, CaseError>;
    fn is_kebab_case(&self) -> bool;

    fn to_case(&self, case: Case) -> Result<String, CaseError>;
}

impl Inflector for str {
    fn to_camel_case(&self) -> String {
        case::to_camel_case(self)
    }

    fn is_camel_case(&self) -> bool {
        case::is_camel_case(self)
    }

    fn to_dot_case(&self) -> String {
        case::to_dot_case(self)
    }

    fn is_dot_case(&self) -> bool {
        case::is_dot_case(self)
    }

    fn to_kebab_case(&self) -> Result<String, CaseError> {
        case::to_kebab_case(self)
    }

    fn is_kebab_case(&self) -> bool {
        case::is_kebab_case(self)
    }

    fn to_case(&self, case: Case) -> Result<String, CaseError> {
        case.convert(self)
    }
}
