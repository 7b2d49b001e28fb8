//! School subjects and the class dispatcher

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// A subject that can be taught. Closed set: `"Math"` and `"History"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    Math,
    History,
}

impl Subject {
    /// All subjects, in declaration order
    pub fn all() -> &'static [Subject] {
        &[Subject::Math, Subject::History]
    }

    /// The subject's canonical name
    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::Math => "Math",
            Subject::History => "History",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match on the canonical names.
impl FromStr for Subject {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Math" => Ok(Subject::Math),
            "History" => Ok(Subject::History),
            _ => Err(DomainError::invalid_subject(s)),
        }
    }
}

impl TryFrom<&str> for Subject {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Returns true iff `value` names a subject exactly.
///
/// Use as a guard before [`teach_class_str`] on untrusted input.
///
/// ```
/// use staffroom_domain::is_valid_subject;
///
/// assert!(is_valid_subject("Math"));
/// assert!(!is_valid_subject("Science"));
/// ```
pub fn is_valid_subject(value: &str) -> bool {
    value.parse::<Subject>().is_ok()
}

/// Describes today's class for a subject.
pub fn teach_class(subject: Subject) -> &'static str {
    match subject {
        Subject::Math => "Teaching Math",
        Subject::History => "Teaching History",
    }
}

/// [`teach_class`] for loosely-typed input, such as text from a command line.
///
/// # Errors
///
/// Returns `DomainError::InvalidSubject` if `subject` is not `"Math"` or
/// `"History"`.
pub fn teach_class_str(subject: &str) -> Result<&'static str, DomainError> {
    let subject: Subject = subject.parse()?;
    Ok(teach_class(subject))
}
