//! Domain entities - Staff roles

mod employee;

pub use employee::{
    create_employee, execute_work, is_director, Director, Employee, EmployeeKind, StaffDuties,
    Teacher, TEACHER_SALARY_CEILING,
};
