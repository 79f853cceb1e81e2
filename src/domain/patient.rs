//! Walk-in patient queue entries.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::{QUEUE_NUMBER_OFFSET, QUEUE_NUMBER_PREFIX};
use crate::errors::AppError;

/// Where a patient is in today's visit. Any value may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PatientStatus {
    Waiting,
    #[serde(rename = "With Doctor")]
    WithDoctor,
    Completed,
}

impl PatientStatus {
    pub const ALL: [PatientStatus; 3] = [
        PatientStatus::Waiting,
        PatientStatus::WithDoctor,
        PatientStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PatientStatus::Waiting => "Waiting",
            PatientStatus::WithDoctor => "With Doctor",
            PatientStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for PatientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatientStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PatientStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| AppError::validation(format!("Unknown patient status \"{}\"", s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum PatientPriority {
    #[default]
    Normal,
    Urgent,
}

impl PatientPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatientPriority::Normal => "Normal",
            PatientPriority::Urgent => "Urgent",
        }
    }
}

impl fmt::Display for PatientPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatientPriority {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Normal" => Ok(PatientPriority::Normal),
            "Urgent" => Ok(PatientPriority::Urgent),
            other => Err(AppError::validation(format!(
                "Unknown patient priority \"{}\"",
                other
            ))),
        }
    }
}

/// Queue number handed to a walk-in patient, e.g. `A101`.
///
/// Derived from the number of patients already stored, so it is only
/// sequential while rows are never removed and inserts do not race.
pub fn queue_number(existing_patients: u64) -> String {
    format!(
        "{}{}",
        QUEUE_NUMBER_PREFIX,
        QUEUE_NUMBER_OFFSET + existing_patients
    )
}

/// Patient as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[schema(example = "A101")]
    pub queue_number: String,
    pub arrival: DateTime<Utc>,
    pub status: PatientStatus,
    pub priority: PatientPriority,
    #[schema(example = 2)]
    pub attending_doctor_id: Option<i32>,
}

/// Fields for a new queue entry
#[derive(Debug, Clone)]
pub struct NewPatient {
    pub name: String,
    pub priority: PatientPriority,
}

/// Staff-driven status change
#[derive(Debug, Clone)]
pub struct PatientStatusChange {
    pub status: PatientStatus,
    pub attending_doctor_id: Option<i32>,
}
