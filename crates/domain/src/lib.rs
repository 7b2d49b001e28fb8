//! Staffroom domain: teacher records, staff roles, and school subjects.

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod validation;
pub mod value_objects;

pub use aggregates::TeacherRecord;

pub use entities::{
    create_employee, execute_work, is_director, Director, Employee, EmployeeKind, StaffDuties,
    Teacher, TEACHER_SALARY_CEILING,
};

pub use error::DomainError;

pub use validation::{
    check_teacher, parse_document, validate_teacher, FIXED_FIELDS, REQUIRED_FIELDS,
};

pub use value_objects::{
    is_valid_subject, teach_class, teach_class_str, FieldMap, FieldValue, Salary, Subject,
};
