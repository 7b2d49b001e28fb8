//! TeacherRecord aggregate - a teacher with fixed and open-ended attributes
//!
//! # Design
//!
//! - **Typed fixed fields**: `firstName`, `lastName`, `fullTimeEmployee` and
//!   `location` are always present; `yearsOfExperience` is an `Option`, so
//!   "omitted" and "zero" stay distinct.
//! - **Read-only identity**: the name fields are set by the constructor and
//!   have no setters.
//! - **Open extras**: any other attribute lives in a separate [`FieldMap`]
//!   and is merged with the fixed fields only in the flat document view
//!   ([`TeacherRecord::to_document`]), which is also the serde representation.
//!
//! Extras never hold a fixed field's name. [`TeacherRecord::create`] writes a
//! colliding extra into the typed field when its value has the field's type
//! and drops it otherwise. [`TeacherRecord::with_extra`] and
//! [`TeacherRecord::insert_extra`] refuse fixed names outright. The accessors,
//! the document view and the info block therefore always agree.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;
use crate::validation::field_names::{
    FIRST_NAME, FULL_TIME_EMPLOYEE, LAST_NAME, LOCATION, YEARS_OF_EXPERIENCE,
};
use crate::validation::{check_teacher, is_fixed_field};
use crate::value_objects::{format_number, FieldMap, FieldValue};

/// A teacher record
///
/// # Example
///
/// ```
/// use staffroom_domain::{FieldMap, FieldValue, TeacherRecord};
///
/// let mut extras = FieldMap::new();
/// extras.insert("department".into(), FieldValue::from("English"));
///
/// let teacher = TeacherRecord::create("Alice", "Brown", true, "Florida", Some(8.0), Some(extras));
///
/// assert_eq!(teacher.first_name(), "Alice");
/// assert_eq!(teacher.years_of_experience(), Some(8.0));
/// assert_eq!(teacher.extra("department"), Some(&FieldValue::from("English")));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FieldMap", into = "FieldMap")]
pub struct TeacherRecord {
    // Identity (read-only after construction)
    first_name: String,
    last_name: String,

    full_time_employee: bool,
    location: String,
    years_of_experience: Option<f64>,

    extras: FieldMap,
}

impl TeacherRecord {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create a teacher from the four required fields.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        full_time_employee: bool,
        location: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            full_time_employee,
            location: location.into(),
            years_of_experience: None,
            extras: FieldMap::new(),
        }
    }

    /// Create a teacher from the required fields, an optional experience
    /// value and an optional set of extra fields.
    ///
    /// Never fails. An extra named after a fixed field overrides that field
    /// when the value has the field's type and is dropped otherwise. Both
    /// cases are logged.
    pub fn create(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        full_time_employee: bool,
        location: impl Into<String>,
        years_of_experience: Option<f64>,
        extra_fields: Option<FieldMap>,
    ) -> Self {
        let mut record = Self::new(first_name, last_name, full_time_employee, location);
        record.years_of_experience = years_of_experience;
        for (key, value) in extra_fields.unwrap_or_default() {
            record.apply_extra(key, value);
        }
        record
    }

    fn apply_extra(&mut self, key: String, value: FieldValue) {
        if !is_fixed_field(&key) {
            self.extras.insert(key, value);
            return;
        }

        match (key.as_str(), value) {
            (FIRST_NAME, FieldValue::String(value)) => self.first_name = value,
            (LAST_NAME, FieldValue::String(value)) => self.last_name = value,
            (LOCATION, FieldValue::String(value)) => self.location = value,
            (FULL_TIME_EMPLOYEE, FieldValue::Bool(value)) => self.full_time_employee = value,
            (YEARS_OF_EXPERIENCE, FieldValue::Number(value)) => {
                self.years_of_experience = Some(value)
            }
            (_, other) => {
                tracing::warn!(
                    field = %key,
                    got = other.type_name(),
                    "Dropped extra field with the wrong type for a fixed teacher field"
                );
                return;
            }
        }
        tracing::warn!(field = %key, "Extra field overrides a fixed teacher field");
    }

    /// Set the years of experience.
    pub fn with_years_of_experience(mut self, years: f64) -> Self {
        self.years_of_experience = Some(years);
        self
    }

    /// Attach an extra field while building the record.
    ///
    /// Fixed field names are ignored with a warning; use the typed
    /// constructor arguments or setters for those.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        let key = key.into();
        if is_fixed_field(&key) {
            tracing::warn!(field = %key, "Ignored extra field with a fixed teacher field name");
            return self;
        }
        self.extras.insert(key, value.into());
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    #[inline]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns "first last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    #[inline]
    pub fn full_time_employee(&self) -> bool {
        self.full_time_employee
    }

    #[inline]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[inline]
    pub fn years_of_experience(&self) -> Option<f64> {
        self.years_of_experience
    }

    /// Returns an extra field's value, if set.
    pub fn extra(&self, key: &str) -> Option<&FieldValue> {
        self.extras.get(key)
    }

    #[inline]
    pub fn extras(&self) -> &FieldMap {
        &self.extras
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Set whether the teacher works full time. Returns the previous value.
    pub fn set_full_time_employee(&mut self, full_time_employee: bool) -> bool {
        std::mem::replace(&mut self.full_time_employee, full_time_employee)
    }

    /// Set the teacher's location. Returns the previous location.
    pub fn set_location(&mut self, location: impl Into<String>) -> String {
        std::mem::replace(&mut self.location, location.into())
    }

    /// Set or clear the years of experience. Returns the previous value.
    pub fn set_years_of_experience(&mut self, years: Option<f64>) -> Option<f64> {
        std::mem::replace(&mut self.years_of_experience, years)
    }

    /// Add or replace an extra field. Returns the previous value, if any.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Constraint` if `key` names a fixed field. Name
    /// fields are read-only and the others have typed setters.
    pub fn insert_extra(
        &mut self,
        key: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Result<Option<FieldValue>, DomainError> {
        let key = key.into();
        if is_fixed_field(&key) {
            return Err(DomainError::constraint(format!(
                "{} is a fixed teacher field and cannot be set as an extra",
                key
            )));
        }
        Ok(self.extras.insert(key, value.into()))
    }

    /// Remove an extra field, returning its value.
    pub fn remove_extra(&mut self, key: &str) -> Option<FieldValue> {
        self.extras.remove(key)
    }

    // =========================================================================
    // Document view
    // =========================================================================

    /// Flatten the record: fixed fields, then extras.
    ///
    /// `yearsOfExperience` is only written when present.
    pub fn to_document(&self) -> FieldMap {
        let mut document = FieldMap::new();
        document.insert(FIRST_NAME.to_string(), self.first_name.as_str().into());
        document.insert(LAST_NAME.to_string(), self.last_name.as_str().into());
        document.insert(
            FULL_TIME_EMPLOYEE.to_string(),
            self.full_time_employee.into(),
        );
        document.insert(LOCATION.to_string(), self.location.as_str().into());
        if let Some(years) = self.years_of_experience {
            document.insert(YEARS_OF_EXPERIENCE.to_string(), years.into());
        }
        document.extend(self.extras.clone());
        document
    }
}

fn take_string(document: &mut FieldMap, key: &'static str) -> Result<String, DomainError> {
    match document.remove(key) {
        Some(FieldValue::String(value)) => Ok(value),
        _ => Err(DomainError::validation(format!("{} must be a string", key))),
    }
}

/// Builds a record from a document that passes [`check_teacher`].
/// Keys other than the fixed fields become extras.
impl TryFrom<FieldMap> for TeacherRecord {
    type Error = DomainError;

    fn try_from(mut document: FieldMap) -> Result<Self, Self::Error> {
        check_teacher(&document)?;

        let first_name = take_string(&mut document, FIRST_NAME)?;
        let last_name = take_string(&mut document, LAST_NAME)?;
        let location = take_string(&mut document, LOCATION)?;
        let full_time_employee = match document.remove(FULL_TIME_EMPLOYEE) {
            Some(FieldValue::Bool(value)) => value,
            _ => {
                return Err(DomainError::validation(format!(
                    "{} must be a boolean",
                    FULL_TIME_EMPLOYEE
                )))
            }
        };
        let years_of_experience = match document.remove(YEARS_OF_EXPERIENCE) {
            None => None,
            Some(FieldValue::Number(years)) => Some(years),
            Some(_) => {
                return Err(DomainError::validation(format!(
                    "{} must be a number",
                    YEARS_OF_EXPERIENCE
                )))
            }
        };

        Ok(Self {
            first_name,
            last_name,
            full_time_employee,
            location,
            years_of_experience,
            extras: document,
        })
    }
}

impl From<TeacherRecord> for FieldMap {
    fn from(record: TeacherRecord) -> Self {
        record.to_document()
    }
}

/// Human-readable teacher information block.
impl fmt::Display for TeacherRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.full_name())?;
        writeln!(f, "Full-time Employee: {}", self.full_time_employee)?;
        writeln!(f, "Location: {}", self.location)?;
        match self.years_of_experience {
            Some(years) => writeln!(f, "Years of Experience: {}", format_number(years))?,
            None => writeln!(f, "Years of Experience: Not specified")?,
        }

        if !self.extras.is_empty() {
            writeln!(f, "Additional Attributes:")?;
            for (key, value) in &self.extras {
                writeln!(f, "  {}: {}", key, value)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::FIXED_FIELDS;

    fn extras(pairs: Vec<(&str, FieldValue)>) -> FieldMap {
        pairs
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect()
    }

    #[test]
    fn test_new_sets_required_fields_only() {
        let teacher = TeacherRecord::new("John", "Smith", true, "New York");

        assert_eq!(teacher.first_name(), "John");
        assert_eq!(teacher.last_name(), "Smith");
        assert!(teacher.full_time_employee());
        assert_eq!(teacher.location(), "New York");
        assert_eq!(teacher.years_of_experience(), None);
        assert!(teacher.extras().is_empty());

        let document = teacher.to_document();
        assert_eq!(document.len(), 4);
        assert!(!document.contains_key(YEARS_OF_EXPERIENCE));
    }

    #[test]
    fn test_create_with_experience_and_extras() {
        let teacher = TeacherRecord::create(
            "Alice",
            "Brown",
            true,
            "Florida",
            Some(8.0),
            Some(extras(vec![
                ("contract", FieldValue::from(true)),
                ("department", FieldValue::from("English")),
                ("hasPhD", FieldValue::from(true)),
                ("specialization", FieldValue::from("Literature")),
            ])),
        );

        assert_eq!(teacher.years_of_experience(), Some(8.0));
        assert_eq!(teacher.extras().len(), 4);

        let document = teacher.to_document();
        assert_eq!(document.len(), 9);
        assert_eq!(document[YEARS_OF_EXPERIENCE], FieldValue::Number(8.0));
        assert_eq!(document["specialization"], FieldValue::from("Literature"));
    }

    #[test]
    fn test_create_without_experience_omits_field() {
        let teacher = TeacherRecord::create(
            "Bob",
            "Wilson",
            false,
            "Oregon",
            None,
            Some(extras(vec![
                ("contract", FieldValue::from(false)),
                ("isSubstitute", FieldValue::from(true)),
                (
                    "availableDays",
                    FieldValue::from(vec!["Monday", "Wednesday", "Friday"]),
                ),
            ])),
        );

        let document = teacher.to_document();
        assert!(!document.contains_key(YEARS_OF_EXPERIENCE));
        assert_eq!(document.len(), 7);
    }

    #[test]
    fn test_zero_experience_is_kept() {
        let teacher = TeacherRecord::create("Zoe", "Park", true, "Ohio", Some(0.0), None);
        assert_eq!(teacher.years_of_experience(), Some(0.0));
        assert_eq!(
            teacher.to_document()[YEARS_OF_EXPERIENCE],
            FieldValue::Number(0.0)
        );
    }

    #[test]
    fn test_colliding_extra_overrides_fixed_field() {
        let teacher = TeacherRecord::create(
            "Jane",
            "Doe",
            false,
            "California",
            None,
            Some(extras(vec![
                ("location", FieldValue::from("Nevada")),
                ("yearsOfExperience", FieldValue::from(4)),
            ])),
        );

        assert_eq!(teacher.location(), "Nevada");
        assert_eq!(teacher.years_of_experience(), Some(4.0));
        assert!(teacher.extras().is_empty());
        assert_eq!(teacher.to_document()[LOCATION], FieldValue::from("Nevada"));
        assert!(teacher.to_string().contains("Location: Nevada\n"));

        let json = serde_json::to_string(&teacher).unwrap();
        let parsed: TeacherRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, teacher);
    }

    #[test]
    fn test_mistyped_colliding_extra_is_dropped() {
        let teacher = TeacherRecord::create(
            "Jane",
            "Doe",
            false,
            "California",
            None,
            Some(extras(vec![
                ("location", FieldValue::from(5)),
                ("fullTimeEmployee", FieldValue::from("yes")),
                ("yearsOfExperience", FieldValue::Null),
            ])),
        );

        assert_eq!(teacher.location(), "California");
        assert!(!teacher.full_time_employee());
        assert_eq!(teacher.years_of_experience(), None);
        assert!(teacher.extras().is_empty());
        assert_eq!(
            teacher.to_document()[LOCATION],
            FieldValue::from("California")
        );

        let json = serde_json::to_string(&teacher).unwrap();
        let parsed: TeacherRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, teacher);
    }

    #[test]
    fn test_with_extra_ignores_fixed_fields() {
        let teacher = TeacherRecord::new("John", "Smith", true, "New York")
            .with_extra("firstName", "Evil")
            .with_extra("fullTimeEmployee", false)
            .with_extra("room", "204B");

        assert_eq!(teacher.first_name(), "John");
        assert!(teacher.full_time_employee());
        assert_eq!(teacher.extras().len(), 1);
        assert_eq!(teacher.to_document()[FIRST_NAME], FieldValue::from("John"));

        let parsed: TeacherRecord =
            serde_json::from_value(serde_json::to_value(&teacher).unwrap()).unwrap();
        assert_eq!(parsed, teacher);
    }

    #[test]
    fn test_mutable_fields() {
        let mut teacher = TeacherRecord::new("John", "Smith", true, "New York")
            .with_years_of_experience(5.0)
            .with_extra("contract", true);

        assert!(teacher.set_full_time_employee(false));
        assert_eq!(teacher.set_location("Boston"), "New York");
        assert_eq!(teacher.set_years_of_experience(Some(7.0)), Some(5.0));
        assert_eq!(
            teacher.insert_extra("contract", false),
            Ok(Some(FieldValue::Bool(true)))
        );
        assert_eq!(
            teacher.insert_extra("newAttribute", "This is dynamically added"),
            Ok(None)
        );

        assert!(!teacher.full_time_employee());
        assert_eq!(teacher.location(), "Boston");
        assert_eq!(teacher.years_of_experience(), Some(7.0));
        assert_eq!(teacher.extra("contract"), Some(&FieldValue::Bool(false)));
        assert_eq!(teacher.first_name(), "John");
    }

    #[test]
    fn test_insert_extra_rejects_fixed_fields() {
        let mut teacher = TeacherRecord::new("John", "Smith", true, "New York");
        for key in FIXED_FIELDS {
            let result = teacher.insert_extra(key, "x");
            assert!(matches!(result, Err(DomainError::Constraint(_))), "{}", key);
        }
        assert!(teacher.extras().is_empty());
    }

    #[test]
    fn test_remove_extra() {
        let mut teacher = TeacherRecord::new("A", "B", true, "C").with_extra("room", "204B");
        assert_eq!(teacher.remove_extra("room"), Some(FieldValue::from("204B")));
        assert_eq!(teacher.remove_extra("room"), None);
    }

    #[test]
    fn test_try_from_document() {
        let document = TeacherRecord::new("Robert", "Johnson", true, "Texas")
            .with_years_of_experience(10.0)
            .with_extra("officeNumber", "204B")
            .to_document();

        let teacher = TeacherRecord::try_from(document).unwrap();
        assert_eq!(teacher.full_name(), "Robert Johnson");
        assert_eq!(teacher.years_of_experience(), Some(10.0));
        assert_eq!(teacher.extra("officeNumber"), Some(&FieldValue::from("204B")));
        assert_eq!(teacher.extras().len(), 1);
    }

    #[test]
    fn test_try_from_invalid_document() {
        let mut document = TeacherRecord::new("A", "B", true, "C").to_document();
        document.remove(LOCATION);
        assert!(matches!(
            TeacherRecord::try_from(document),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_serde_uses_flat_document() {
        let teacher = TeacherRecord::new("Sarah", "Davis", true, "Washington")
            .with_years_of_experience(12.0)
            .with_extra("publications", 15);

        let json = serde_json::to_value(&teacher).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "firstName": "Sarah",
                "lastName": "Davis",
                "fullTimeEmployee": true,
                "location": "Washington",
                "yearsOfExperience": 12,
                "publications": 15
            })
        );
        assert_eq!(
            serde_json::to_string(&teacher.to_document()[YEARS_OF_EXPERIENCE]).unwrap(),
            "12"
        );

        let parsed: TeacherRecord = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, teacher);
    }

    #[test]
    fn test_deserialize_rejects_invalid_document() {
        let result = serde_json::from_str::<TeacherRecord>(
            r#"{"firstName":"A","lastName":"B","fullTimeEmployee":"yes","location":"C"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_display_with_experience_and_extras() {
        let teacher = TeacherRecord::new("Sarah", "Davis", true, "Washington")
            .with_years_of_experience(12.0)
            .with_extra("department", "Physics")
            .with_extra("publications", 15);

        assert_eq!(
            teacher.to_string(),
            "Name: Sarah Davis\n\
             Full-time Employee: true\n\
             Location: Washington\n\
             Years of Experience: 12\n\
             Additional Attributes:\n\
             \x20 department: \"Physics\"\n\
             \x20 publications: 15\n"
        );
    }

    #[test]
    fn test_display_without_experience() {
        let teacher = TeacherRecord::new("Bob", "Wilson", false, "Oregon");
        let output = teacher.to_string();
        assert!(output.contains("Years of Experience: Not specified"));
        assert!(!output.contains("Additional Attributes"));
    }
}
