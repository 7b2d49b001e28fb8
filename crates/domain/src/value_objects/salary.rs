//! Salary input for the employee factory

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use super::field_value::{format_number, FieldValue};

/// A salary as handed to [`create_employee`](crate::create_employee).
///
/// The factory accepts anything a caller might pass, numeric or not; only a
/// numeric amount can select the Teacher role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Salary {
    Amount(f64),
    NotNumeric(String),
}

impl Salary {
    /// The numeric amount, if any
    pub fn amount(&self) -> Option<f64> {
        match self {
            Salary::Amount(amount) => Some(*amount),
            Salary::NotNumeric(_) => None,
        }
    }
}

impl fmt::Display for Salary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Salary::Amount(amount) => f.write_str(&format_number(*amount)),
            Salary::NotNumeric(raw) => write!(f, "{:?}", raw),
        }
    }
}

/// Text that parses as a finite number is an amount; anything else, including
/// `inf` and `NaN`, is kept verbatim.
impl FromStr for Salary {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().parse::<f64>() {
            Ok(amount) if amount.is_finite() => Salary::Amount(amount),
            _ => Salary::NotNumeric(s.to_string()),
        })
    }
}

impl From<f64> for Salary {
    fn from(amount: f64) -> Self {
        Salary::Amount(amount)
    }
}

impl From<i32> for Salary {
    fn from(amount: i32) -> Self {
        Salary::Amount(f64::from(amount))
    }
}

impl From<FieldValue> for Salary {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Number(amount) => Salary::Amount(amount),
            FieldValue::String(raw) => Salary::NotNumeric(raw),
            other => Salary::NotNumeric(other.to_string()),
        }
    }
}
