use crate::{
    class::{resolve, ClassToken},
    list::split_list,
    Candidate, LogClass, ValidationError,
};

/// Marks a list element as subtractive when it is the first character.
pub const NEGATION_MARKER: char = '-';

/// Validates a `pgaudit.log` value without touching any live setting.
///
/// Elements are folded left to right, starting from no classes: a plain
/// element adds its bits and an element prefixed with `-` removes them.
/// `none` and `all` take part in the fold like any other name, so
/// `"all,-write"` is everything except WRITE and `"ddl,none"` is still DDL.
///
/// # Errors
///
/// - [`ValidationError::ListSyntax`] if the value is not a well-formed list
/// - [`ValidationError::UnknownClass`] for the first unrecognized element
/// - [`ValidationError::ResourceExhausted`] if the parsed list cannot be stored
///
/// # Examples
///
/// ```
/// use audit_config::{validate, LogClass};
///
/// let candidate = validate("READ,WRITE,-READ").unwrap();
/// assert_eq!(candidate.classes(), LogClass::WRITE);
///
/// let candidate = validate("all,-misc").unwrap();
/// assert!(!candidate.classes().intersects(LogClass::MISC | LogClass::MISC_SET));
/// ```
pub fn validate(raw: &str) -> Result<Candidate, ValidationError> {
    let result = fold_classes(raw);

    match &result {
        Ok(candidate) => tracing::debug!(
            target: "audit_config",
            value = %raw,
            classes = %candidate.classes(),
            bits = candidate.classes().bits(),
            "validated log class list"
        ),
        Err(err) => tracing::warn!(
            target: "audit_config",
            value = %raw,
            error = %err,
            fault = ?err.fault(),
            "rejected log class list"
        ),
    }

    result
}

fn fold_classes(raw: &str) -> Result<Candidate, ValidationError> {
    let elements = split_list(raw)?;

    let mut classes = LogClass::NONE;
    for element in &elements {
        let (name, subtract) = match element.strip_prefix(NEGATION_MARKER) {
            Some(name) => (name, true),
            None => (&**element, false),
        };

        let bits = match resolve(name) {
            ClassToken::Unrecognized => {
                return Err(ValidationError::UnknownClass {
                    token: element.to_string(),
                })
            }
            token => token.bits().unwrap_or(LogClass::NONE),
        };

        // insert/remove keep bits outside the declared classes
        if subtract {
            classes.remove(bits);
        } else {
            classes.insert(bits);
        }
    }

    Ok(Candidate::new_unchecked(classes))
}
