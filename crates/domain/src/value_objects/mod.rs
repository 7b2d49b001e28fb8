//! Value objects - Immutable objects defined by their attributes

mod field_value;
mod salary;
mod subject;

pub(crate) use field_value::format_number;
pub use field_value::{FieldMap, FieldValue};
pub use salary::Salary;
pub use subject::{is_valid_subject, teach_class, teach_class_str, Subject};
