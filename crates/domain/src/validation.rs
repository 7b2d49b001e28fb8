//! Teacher document validation
//!
//! Checks run against the flat [`FieldMap`] view of a teacher, where any
//! field can be missing or hold a value of the wrong type. Checks run in a
//! fixed order and stop at the first failure.

use crate::error::DomainError;
use crate::value_objects::{FieldMap, FieldValue};

/// Document keys of the fixed teacher fields.
pub mod field_names {
    pub const FIRST_NAME: &str = "firstName";
    pub const LAST_NAME: &str = "lastName";
    pub const FULL_TIME_EMPLOYEE: &str = "fullTimeEmployee";
    pub const LOCATION: &str = "location";
    pub const YEARS_OF_EXPERIENCE: &str = "yearsOfExperience";
}

use field_names::{FIRST_NAME, FULL_TIME_EMPLOYEE, LAST_NAME, LOCATION, YEARS_OF_EXPERIENCE};

/// Fields every teacher document must carry, in check order.
pub const REQUIRED_FIELDS: [&str; 4] = [FIRST_NAME, LAST_NAME, FULL_TIME_EMPLOYEE, LOCATION];

/// Every fixed (non-extra) field name.
pub const FIXED_FIELDS: [&str; 5] = [
    FIRST_NAME,
    LAST_NAME,
    FULL_TIME_EMPLOYEE,
    LOCATION,
    YEARS_OF_EXPERIENCE,
];

/// Returns true if `key` names one of the fixed teacher fields.
pub fn is_fixed_field(key: &str) -> bool {
    FIXED_FIELDS.contains(&key)
}

/// Require a field to be present and non-null.
fn require_present<'a>(
    document: &'a FieldMap,
    field_name: &'static str,
) -> Result<&'a FieldValue, DomainError> {
    match document.get(field_name) {
        None => Err(DomainError::validation(format!("{} is required", field_name))),
        Some(FieldValue::Null) => Err(DomainError::validation(format!(
            "{} cannot be null",
            field_name
        ))),
        Some(value) => Ok(value),
    }
}

/// Require a field's value to have the expected type.
fn require_type(
    value: &FieldValue,
    expected: &'static str,
    field_name: &'static str,
) -> Result<(), DomainError> {
    if value.type_name() != expected {
        return Err(DomainError::validation(format!(
            "{} must be a {}, got {}",
            field_name,
            expected,
            value.type_name()
        )));
    }
    Ok(())
}

/// Parse a JSON object into a teacher document.
///
/// Only the JSON shape is checked here; run [`check_teacher`] or
/// [`validate_teacher`] on the result for the field rules.
///
/// # Errors
///
/// Returns `DomainError::Parse` if `json` is not a JSON object.
pub fn parse_document(json: &str) -> Result<FieldMap, DomainError> {
    Ok(serde_json::from_str(json)?)
}

/// Check a teacher document, reporting the first failing check.
///
/// Order: required fields present and non-null, `firstName`/`lastName` are
/// strings, `fullTimeEmployee` is a boolean, `location` is a string, and
/// `yearsOfExperience` (if present) is a number.
///
/// # Errors
///
/// Returns `DomainError::Validation` naming the failed check.
pub fn check_teacher(document: &FieldMap) -> Result<(), DomainError> {
    for field_name in REQUIRED_FIELDS {
        require_present(document, field_name)?;
    }

    let typed_checks = [
        (FIRST_NAME, "string"),
        (LAST_NAME, "string"),
        (FULL_TIME_EMPLOYEE, "boolean"),
        (LOCATION, "string"),
    ];
    for (field_name, expected) in typed_checks {
        require_type(require_present(document, field_name)?, expected, field_name)?;
    }

    if let Some(years) = document.get(YEARS_OF_EXPERIENCE) {
        require_type(years, "number", YEARS_OF_EXPERIENCE)?;
    }

    Ok(())
}

/// Validate a teacher document.
///
/// Returns false on the first failing check, after logging which check
/// failed. Use [`check_teacher`] when the failure reason is needed as a value.
///
/// ```
/// use staffroom_domain::{validate_teacher, FieldMap, FieldValue};
///
/// let mut document = FieldMap::new();
/// document.insert("firstName".into(), FieldValue::from("Jane"));
/// document.insert("lastName".into(), FieldValue::from("Doe"));
/// document.insert("fullTimeEmployee".into(), FieldValue::from(false));
/// assert!(!validate_teacher(&document));
///
/// document.insert("location".into(), FieldValue::from("California"));
/// assert!(validate_teacher(&document));
/// ```
pub fn validate_teacher(document: &FieldMap) -> bool {
    match check_teacher(document) {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Teacher validation failed");
            false
        }
    }
}
