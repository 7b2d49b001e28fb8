//! Employee roles - Directors and Teachers
//!
//! Both roles share the [`StaffDuties`] surface and differ only in the
//! strings they return. The role is an explicit tag fixed at construction
//! ([`EmployeeKind`]), so dispatch is an exhaustive match rather than a
//! check for which methods a value happens to expose.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::Salary;

/// Salaries strictly below this amount produce a Teacher.
pub const TEACHER_SALARY_CEILING: f64 = 500.0;

/// Operations every staff member supports.
pub trait StaffDuties {
    fn work_from_home(&self) -> &'static str;

    fn get_coffee_break(&self) -> &'static str;
}

/// The Director role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Director;

impl Director {
    pub fn work_director_tasks(&self) -> &'static str {
        "Getting to director tasks"
    }
}

impl StaffDuties for Director {
    fn work_from_home(&self) -> &'static str {
        "Working from home"
    }

    fn get_coffee_break(&self) -> &'static str {
        "Getting a coffee break"
    }
}

/// The Teacher role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Teacher;

impl Teacher {
    pub fn work_teacher_tasks(&self) -> &'static str {
        "Getting to work"
    }
}

impl StaffDuties for Teacher {
    fn work_from_home(&self) -> &'static str {
        "Cannot work from home"
    }

    fn get_coffee_break(&self) -> &'static str {
        "Cannot have a break"
    }
}

/// Discriminant of an [`Employee`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeKind {
    Director,
    Teacher,
}

impl EmployeeKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            EmployeeKind::Director => "Director",
            EmployeeKind::Teacher => "Teacher",
        }
    }
}

impl fmt::Display for EmployeeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A staff member in one of the two roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "EmployeeKind", into = "EmployeeKind")]
pub enum Employee {
    Director(Director),
    Teacher(Teacher),
}

impl Employee {
    /// Picks a role from a salary.
    ///
    /// Numeric salaries below 500 yield a Teacher. Everything else, including
    /// exactly 500, NaN and non-numeric input, yields a Director.
    ///
    /// ```
    /// use staffroom_domain::{Employee, EmployeeKind};
    ///
    /// assert_eq!(Employee::from_salary(499).kind(), EmployeeKind::Teacher);
    /// assert_eq!(Employee::from_salary(500).kind(), EmployeeKind::Director);
    /// ```
    pub fn from_salary(salary: impl Into<Salary>) -> Self {
        let salary = salary.into();
        let employee = match salary.amount() {
            Some(amount) if amount < TEACHER_SALARY_CEILING => Employee::Teacher(Teacher),
            _ => Employee::Director(Director),
        };
        tracing::debug!(%salary, role = %employee.kind(), "Created employee");
        employee
    }

    pub fn kind(&self) -> EmployeeKind {
        match self {
            Employee::Director(_) => EmployeeKind::Director,
            Employee::Teacher(_) => EmployeeKind::Teacher,
        }
    }

    #[inline]
    pub fn is_director(&self) -> bool {
        self.kind() == EmployeeKind::Director
    }

    pub fn as_director(&self) -> Option<&Director> {
        match self {
            Employee::Director(director) => Some(director),
            Employee::Teacher(_) => None,
        }
    }

    pub fn as_teacher(&self) -> Option<&Teacher> {
        match self {
            Employee::Teacher(teacher) => Some(teacher),
            Employee::Director(_) => None,
        }
    }

    /// Runs the role-specific task operation.
    pub fn execute_work(&self) -> &'static str {
        match self {
            Employee::Director(director) => director.work_director_tasks(),
            Employee::Teacher(teacher) => teacher.work_teacher_tasks(),
        }
    }

    fn duties(&self) -> &dyn StaffDuties {
        match self {
            Employee::Director(director) => director,
            Employee::Teacher(teacher) => teacher,
        }
    }
}

impl StaffDuties for Employee {
    fn work_from_home(&self) -> &'static str {
        self.duties().work_from_home()
    }

    fn get_coffee_break(&self) -> &'static str {
        self.duties().get_coffee_break()
    }
}

impl From<EmployeeKind> for Employee {
    fn from(kind: EmployeeKind) -> Self {
        match kind {
            EmployeeKind::Director => Employee::Director(Director),
            EmployeeKind::Teacher => Employee::Teacher(Teacher),
        }
    }
}

impl From<Employee> for EmployeeKind {
    fn from(employee: Employee) -> Self {
        employee.kind()
    }
}

impl From<Director> for Employee {
    fn from(director: Director) -> Self {
        Employee::Director(director)
    }
}

impl From<Teacher> for Employee {
    fn from(teacher: Teacher) -> Self {
        Employee::Teacher(teacher)
    }
}

/// Creates a fresh employee for the given salary. See [`Employee::from_salary`].
pub fn create_employee(salary: impl Into<Salary>) -> Employee {
    Employee::from_salary(salary)
}

pub fn is_director(employee: &Employee) -> bool {
    employee.is_director()
}

/// Dispatches to the employee's role-specific task operation.
pub fn execute_work(employee: &Employee) -> &'static str {
    employee.execute_work()
}
