//! Live audit settings and the commit half of a setting change.
//!
//! [`AuditSettings`] is read on every audit decision, from any thread, without
//! locking. Each setting is a single atomic word, so a reader sees either the
//! value before a commit or the value after it, never a mix of the two.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use crate::{Candidate, LogClass, ValidationError};

/// Classes logged before any value is committed.
pub const DEFAULT_LOG_CLASSES: LogClass = LogClass::NONE;

/// Whether statements touching only catalog relations are logged by default.
pub const DEFAULT_LOG_CATALOG: bool = true;

static GLOBAL: AuditSettings = AuditSettings::new();

/// The live `pgaudit.log` and `pgaudit.log_catalog` values.
///
/// One instance is written by the thread applying configuration changes
/// and read concurrently by audit decisions. [`AuditSettings::global`] is
/// the process-wide instance; independent instances can be created with
/// [`AuditSettings::new`].
///
/// # Example
///
/// ```
/// use audit_config::{validate, AuditSettings, LogClass};
///
/// let settings = AuditSettings::new();
/// assert_eq!(settings.log_classes(), LogClass::NONE);
///
/// let candidate = validate("read,write").unwrap();
/// settings.commit(Some(candidate));
///
/// assert!(settings.logs(LogClass::READ));
/// assert!(!settings.logs(LogClass::DDL));
/// ```
#[derive(Debug)]
pub struct AuditSettings {
    log_classes: AtomicU32,
    log_catalog: AtomicBool,
}

impl AuditSettings {
    /// Creates settings holding the defaults: nothing logged, catalog logging on.
    pub const fn new() -> Self {
        Self {
            log_classes: AtomicU32::new(DEFAULT_LOG_CLASSES.bits()),
            log_catalog: AtomicBool::new(DEFAULT_LOG_CATALOG),
        }
    }

    /// Returns the process-wide settings.
    pub fn global() -> &'static AuditSettings {
        &GLOBAL
    }

    /// Publishes a validated value.
    ///
    /// `None` means the change was withdrawn after validation and leaves the
    /// live value untouched. The value is replaced with one atomic swap.
    pub fn commit(&self, candidate: Option<Candidate>) {
        let Some(candidate) = candidate else {
            tracing::debug!(target: "audit_config", "log class assignment suppressed");
            return;
        };

        let new = candidate.classes();
        let previous =
            LogClass::from_bits_retain(self.log_classes.swap(new.bits(), Ordering::AcqRel));

        tracing::info!(
            target: "audit_config",
            previous = %previous,
            current = %new,
            bits = new.bits(),
            "log classes committed"
        );
    }

    /// Returns the live classes.
    pub fn log_classes(&self) -> LogClass {
        LogClass::from_bits_retain(self.log_classes.load(Ordering::Acquire))
    }

    /// Returns true if any of the given classes is being logged.
    pub fn logs(&self, class: LogClass) -> bool {
        self.log_classes().intersects(class)
    }

    /// Returns whether statements on catalog relations only are logged.
    pub fn log_catalog(&self) -> bool {
        self.log_catalog.load(Ordering::Acquire)
    }

    /// Sets whether statements on catalog relations only are logged.
    ///
    /// Any boolean is accepted; there is nothing to validate.
    pub fn set_log_catalog(&self, enabled: bool) {
        let previous = self.log_catalog.swap(enabled, Ordering::AcqRel);

        tracing::info!(
            target: "audit_config",
            previous,
            current = enabled,
            "log_catalog committed"
        );
    }
}

impl Default for AuditSettings {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a boolean setting literal.
///
/// Accepts `true`/`false`, `yes`/`no`, `on`/`off` and `1`/`0`, ignoring ASCII
/// case. Words may be shortened to any prefix that is still unambiguous, so
/// `t`, `ye` and `of` are valid but `o` is not.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidBoolean`] for anything else.
///
/// # Examples
///
/// ```
/// use audit_config::parse_bool;
///
/// assert_eq!(parse_bool("On"), Ok(true));
/// assert_eq!(parse_bool("f"), Ok(false));
/// assert!(parse_bool("o").is_err());
/// ```
pub fn parse_bool(value: &str) -> Result<bool, ValidationError> {
    // (word, shortest accepted prefix, meaning)
    const WORDS: [(&str, usize, bool); 8] = [
        ("true", 1, true),
        ("false", 1, false),
        ("yes", 1, true),
        ("no", 1, false),
        ("on", 2, true),
        ("off", 2, false),
        ("1", 1, true),
        ("0", 1, false),
    ];

    WORDS
        .iter()
        .find(|(word, min_len, _)| {
            value.len() >= *min_len
                && value.len() <= word.len()
                && word.as_bytes()[..value.len()].eq_ignore_ascii_case(value.as_bytes())
        })
        .map(|(_, _, meaning)| *meaning)
        .ok_or_else(|| ValidationError::InvalidBoolean {
            value: value.to_string(),
        })
}
