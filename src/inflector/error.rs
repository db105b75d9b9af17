use std::fmt;

/// Why a conversion refused its input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CaseError {
    /// The input was not a string. Raised by camelCase and dot.case.
    #[error("invalid input type: expected string, but received {received}")]
    InvalidType { received: &'static str },
    /// The input was null. Raised by kebab-case.
    #[error("input cannot be null or undefined")]
    Missing,
    /// The input was neither null nor a string. Raised by kebab-case.
    #[error("input must be a string, received {received}")]
    NotAString { received: &'static str },
    /// The input had no words in it. Raised by kebab-case.
    #[error("input string cannot be empty or contain only whitespace or separators")]
    Empty,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    Type,
    Value,
}

impl CaseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CaseError::InvalidType { .. } | CaseError::Missing | CaseError::NotAString { .. } => {
                ErrorKind::Type
            }
            CaseError::Empty => ErrorKind::Value,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Type => write!(f, "type error"),
            ErrorKind::Value => write!(f, "value error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CaseError, ErrorKind};

    #[test]
    fn kinds() {
        assert_eq!(CaseError::Missing.kind(), ErrorKind::Type);
        assert_eq!(
            CaseError::InvalidType { received: "number" }.kind(),
            ErrorKind::Type
        );
        assert_eq!(CaseError::Empty.kind(), ErrorKind::Value);
    }

    #[test]
    fn messages_name_the_received_type() {
        assert_eq!(
            CaseError::NotAString { received: "number" }.to_string(),
            "input must be a string, received number"
        );
        assert_eq!(
            CaseError::InvalidType { received: "object" }.to_string(),
            "invalid input type: expected string, but received object"
        );
    }
}
