//! Named settings and the two-phase apply path used by hosts.
//!
//! A host that receives `SET pgaudit.log = '...'` (or reloads its
//! configuration) calls [`AuditSettings::set`], which validates the value
//! and commits it only if validation succeeded.

use std::fmt;

use crate::{parse_bool, validate, AuditSettings, Candidate, ValidationError};
use crate::settings::{DEFAULT_LOG_CATALOG, DEFAULT_LOG_CLASSES};

/// How a setting's string value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    /// Comma-separated list of log classes
    ClassList,
    /// Boolean literal
    Boolean,
}

impl fmt::Display for SettingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingKind::ClassList => write!(f, "list"),
            SettingKind::Boolean => write!(f, "bool"),
        }
    }
}

/// Static description of a setting, as shown to operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingDefinition {
    /// Fully qualified setting name
    pub name: &'static str,
    /// One-line description
    pub description: &'static str,
    /// Value the setting holds before anything is committed
    pub boot_value: &'static str,
    /// How values are parsed
    pub kind: SettingKind,
}

/// `pgaudit.log`: the classes of statements logged by session audit logging.
pub const LOG: SettingDefinition = SettingDefinition {
    name: "pgaudit.log",
    description: "Specifies which classes of statements will be logged by session audit \
                  logging. Multiple classes can be provided using a comma-separated list \
                  and classes can be subtracted by prefacing the class with a - sign.",
    boot_value: "none",
    kind: SettingKind::ClassList,
};

/// `pgaudit.log_catalog`: whether statements on catalog relations only are logged.
pub const LOG_CATALOG: SettingDefinition = SettingDefinition {
    name: "pgaudit.log_catalog",
    description: "Specifies that session logging should be enabled in the case where all \
                  relations in a statement are in pg_catalog. Disabling this setting will \
                  reduce noise in the log from tools like psql and PgAdmin that query the \
                  catalog heavily.",
    boot_value: "on",
    kind: SettingKind::Boolean,
};

/// Every setting this crate defines.
pub const DEFINITIONS: [SettingDefinition; 2] = [LOG, LOG_CATALOG];

/// Looks up a setting by name, ignoring ASCII case.
pub fn definition(name: &str) -> Option<&'static SettingDefinition> {
    DEFINITIONS
        .iter()
        .find(|def| def.name.eq_ignore_ascii_case(name))
}

impl AuditSettings {
    /// Validates and applies a value for a named setting.
    ///
    /// Nothing is changed unless the value validates.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::UnknownSetting`] if no setting has this name
    /// - Any error from [`validate`] for `pgaudit.log`
    /// - [`ValidationError::InvalidBoolean`] for `pgaudit.log_catalog`
    ///
    /// # Example
    ///
    /// ```
    /// use audit_config::{AuditSettings, LogClass};
    ///
    /// let settings = AuditSettings::new();
    /// settings.set("pgaudit.log", "all, -misc").unwrap();
    /// assert!(settings.set("pgaudit.log", "read,bogus").is_err());
    ///
    /// assert!(settings.logs(LogClass::READ));
    /// assert!(!settings.logs(LogClass::MISC_SET));
    /// ```
    pub fn set(&self, name: &str, value: &str) -> Result<(), ValidationError> {
        let def = lookup(name)?;
        match def.kind {
            SettingKind::ClassList => {
                let candidate = validate(value)?;
                self.commit(Some(candidate));
            }
            SettingKind::Boolean => {
                let enabled = parse_bool(value)?;
                self.set_log_catalog(enabled);
            }
        }
        Ok(())
    }

    /// Renders the live value of a named setting.
    ///
    /// The class list renders in a canonical form that validates back to
    /// the same value; booleans render as `on` or `off`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownSetting`] if no setting has this name.
    pub fn show(&self, name: &str) -> Result<String, ValidationError> {
        let def = lookup(name)?;
        Ok(match def.kind {
            SettingKind::ClassList => self.log_classes().to_string(),
            SettingKind::Boolean => (if self.log_catalog() { "on" } else { "off" }).to_string(),
        })
    }

    /// Restores every setting to its boot value.
    pub fn reset(&self) {
        self.commit(Some(Candidate::new_unchecked(DEFAULT_LOG_CLASSES)));
        self.set_log_catalog(DEFAULT_LOG_CATALOG);
    }
}

fn lookup(name: &str) -> Result<&'static SettingDefinition, ValidationError> {
    definition(name).ok_or_else(|| ValidationError::UnknownSetting {
        name: name.to_string(),
    })
}
