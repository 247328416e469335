use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::JobError;

/// Salary as submitted by a client: a JSON number or a numeric string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SalaryInput {
  Number(f64),
  Text(String),
}

impl SalaryInput {
  /// Coerces the input to a finite amount; `field` names the input in errors
  pub fn to_amount(&self, field: &str) -> Result<f64, JobError> {
    let amount = match self {
      SalaryInput::Number(n) => Some(*n),
      SalaryInput::Text(s) => s.trim().parse::<f64>().ok(),
    };

    amount
      .filter(|n| n.is_finite())
      .ok_or_else(|| JobError::Validation(format!("{} must be a number", field)))
  }
}

impl From<f64> for SalaryInput {
  fn from(value: f64) -> Self {
    SalaryInput::Number(value)
  }
}

// Application Status
//
// A flat set: every status may be overwritten by any other, including itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
  Pending,
  Accepted,
  Rejected,
}

impl ApplicationStatus {
  pub fn as_str(&self) -> &'static str {
    match self {
      ApplicationStatus::Pending => "pending",
      ApplicationStatus::Accepted => "accepted",
      ApplicationStatus::Rejected => "rejected",
    }
  }
}

impl FromStr for ApplicationStatus {
  type Err = JobError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "pending" => Ok(ApplicationStatus::Pending),
      "accepted" => Ok(ApplicationStatus::Accepted),
      "rejected" => Ok(ApplicationStatus::Rejected),
      _ => Err(JobError::Validation(format!("Invalid status: {}", s))),
    }
  }
}

impl fmt::Display for ApplicationStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
