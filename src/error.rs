use std::fmt;

/// Errors returned while validating a setting value.
///
/// Every variant is produced before any live setting is touched, so a
/// rejected value leaves the previous configuration in place.
///
/// # Examples
///
/// ```
/// use audit_config::{validate, ValidationError};
///
/// let err = validate("read,bogus").unwrap_err();
/// assert_eq!(
///     err,
///     ValidationError::UnknownClass {
///         token: "bogus".to_string()
///     }
/// );
/// assert_eq!(err.to_string(), "unrecognized class \"bogus\"");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The value is not a well-formed comma-separated list
    ListSyntax {
        /// What was wrong with the list
        fault: SyntaxFault,
    },
    /// A list element does not name a log class
    UnknownClass {
        /// The element as written, including any `-` marker
        token: String,
    },
    /// Memory for the parsed list could not be reserved
    ResourceExhausted,
    /// The value is not a boolean literal
    InvalidBoolean {
        /// The rejected value
        value: String,
    },
    /// No setting is registered under this name
    UnknownSetting {
        /// The requested setting name
        name: String,
    },
}

impl ValidationError {
    pub(crate) fn list_syntax(fault: SyntaxFault) -> Self {
        ValidationError::ListSyntax { fault }
    }

    /// Returns the syntax fault if this is a list-syntax rejection.
    pub fn fault(&self) -> Option<SyntaxFault> {
        match self {
            ValidationError::ListSyntax { fault } => Some(*fault),
            _ => None,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Operators only ever see the fixed message; the fault is for logs.
            ValidationError::ListSyntax { .. } => write!(f, "List syntax is invalid"),
            ValidationError::UnknownClass { token } => {
                write!(f, "unrecognized class \"{}\"", token)
            }
            ValidationError::ResourceExhausted => write!(f, "out of memory while parsing"),
            ValidationError::InvalidBoolean { value } => {
                write!(f, "parameter requires a Boolean value, got \"{}\"", value)
            }
            ValidationError::UnknownSetting { name } => {
                write!(f, "unrecognized configuration parameter \"{}\"", name)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// The specific way a list value failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxFault {
    /// The value is empty or contains only whitespace
    EmptyInput,
    /// An element between separators is empty
    EmptyName,
    /// A quoted element is never closed
    UnterminatedQuote,
    /// Something other than a comma follows an element
    MissingSeparator,
}

impl fmt::Display for SyntaxFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxFault::EmptyInput => write!(f, "empty input"),
            SyntaxFault::EmptyName => write!(f, "empty name"),
            SyntaxFault::UnterminatedQuote => write!(f, "unterminated quoted name"),
            SyntaxFault::MissingSeparator => write!(f, "missing separator"),
        }
    }
}
