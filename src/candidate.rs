use crate::LogClass;

/// A log-class value that passed validation and has not been published yet.
///
/// `Candidate` is the handle that connects the two phases of a setting
/// change: [`validate`](crate::validate) is the only way to obtain one, and
/// [`AuditSettings::commit`](crate::AuditSettings::commit) is the only way to
/// make it live. Holding a `Candidate` proves the value was accepted.
///
/// # Construction Invariants
///
/// There is no public constructor and no `Default`, `From<u32>` or
/// `From<LogClass>` implementation, so arbitrary words cannot be published.
///
/// ```compile_fail
/// use audit_config::{Candidate, LogClass};
///
/// // This will not compile - no public constructor:
/// let candidate = Candidate::new(LogClass::ALL);
/// ```
///
/// # Examples
///
/// ```
/// use audit_config::{validate, LogClass};
///
/// let candidate = validate("read,write").expect("valid list");
/// assert_eq!(candidate.classes(), LogClass::READ | LogClass::WRITE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    classes: LogClass,
}

impl Candidate {
    /// Wraps a value without validating it.
    ///
    /// Only the validator and the boot-default path may call this.
    pub(crate) fn new_unchecked(classes: LogClass) -> Self {
        Self { classes }
    }

    /// Returns the validated classes.
    pub fn classes(&self) -> LogClass {
        self.classes
    }
}
