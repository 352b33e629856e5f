//! Validated, atomically published log-class configuration for audit logging.
//!
//! Administrators choose which categories of SQL activity are audited by
//! writing a comma-separated list of class names, such as `"read, write"` or
//! `"all, -misc"`. This crate turns that list into a [`LogClass`] bit-set and
//! publishes it to the readers that decide, statement by statement, whether
//! to emit an audit entry.
//!
//! A change happens in two phases:
//! - **Validate**: [`validate`] parses the value and returns a [`Candidate`]
//!   or a [`ValidationError`]. It has no side effects.
//! - **Commit**: [`AuditSettings::commit`] publishes a candidate with a
//!   single atomic store, or does nothing when handed `None`.
//!
//! Readers call [`AuditSettings::log_classes`] or [`AuditSettings::logs`] at
//! any time without locking.
//!
//! # Core Types
//!
//! - [`LogClass`]: Bit flags for DDL, FUNCTION, MISC, MISC_SET, READ, ROLE, WRITE
//! - [`Candidate`]: Proof that a value passed validation
//! - [`AuditSettings`]: The live `pgaudit.log` and `pgaudit.log_catalog` values
//! - [`ValidationError`]: Why a value was rejected
//!
//! # Examples
//!
//! ```
//! use audit_config::{validate, AuditSettings, LogClass};
//!
//! let settings = AuditSettings::new();
//!
//! // Phase one: nothing observable changes, even on success
//! let candidate = validate("ALL,-WRITE").expect("valid class list");
//! assert_eq!(settings.log_classes(), LogClass::NONE);
//!
//! // Phase two: publish
//! settings.commit(Some(candidate));
//! assert!(settings.logs(LogClass::READ));
//! assert!(!settings.logs(LogClass::WRITE));
//!
//! // Invalid values are rejected before anything is touched
//! assert!(validate("read,bogus").is_err());
//! assert!(settings.logs(LogClass::READ));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod candidate;
mod class;
mod error;
mod list;
pub mod registry;
mod settings;
mod validate;

#[cfg(test)]
mod test_utils;

pub use candidate::Candidate;
pub use class::{resolve, ClassToken, LogClass, MetaClass};
pub use error::{SyntaxFault, ValidationError};
pub use settings::{parse_bool, AuditSettings, DEFAULT_LOG_CATALOG, DEFAULT_LOG_CLASSES};
pub use validate::{validate, NEGATION_MARKER};
