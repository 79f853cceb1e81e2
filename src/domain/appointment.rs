//! Scheduled appointments with doctors.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::config::PLACEHOLDER_PATIENT_ID_RANGE;
use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Canceled,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "Pending",
            AppointmentStatus::Confirmed => "Confirmed",
            AppointmentStatus::Canceled => "Canceled",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(AppointmentStatus::Pending),
            "Confirmed" => Ok(AppointmentStatus::Confirmed),
            "Canceled" => Ok(AppointmentStatus::Canceled),
            other => Err(AppError::validation(format!(
                "Unknown appointment status \"{}\"",
                other
            ))),
        }
    }
}

/// Appointment as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    #[schema(example = 1)]
    pub id: i32,
    /// Placeholder identifier, not linked to a patient row
    #[schema(example = "P417")]
    pub patient_id: String,
    #[schema(example = "John Roe")]
    pub patient_name: String,
    #[schema(example = "Follow-up")]
    pub reason: String,
    pub time: DateTime<Utc>,
    pub status: AppointmentStatus,
    #[schema(example = 1)]
    pub doctor_id: i32,
}

/// Fields for a new appointment. Status is not caller-controlled.
#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub patient_name: String,
    pub reason: String,
    pub time: DateTime<Utc>,
    pub doctor_id: i32,
}

/// Reschedule patch; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct AppointmentChanges {
    pub patient_name: Option<String>,
    pub reason: Option<String>,
    pub time: Option<DateTime<Utc>>,
    pub doctor_id: Option<i32>,
}

impl AppointmentChanges {
    pub fn is_empty(&self) -> bool {
        self.patient_name.is_none()
            && self.reason.is_none()
            && self.time.is_none()
            && self.doctor_id.is_none()
    }
}

/// Random `P{n}` stand-in for the patient id column, `n` in `0..1000`.
pub fn placeholder_patient_id() -> String {
    format!("P{}", rand::thread_rng().gen_range(0..PLACEHOLDER_PATIENT_ID_RANGE))
}

const ZONED_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M%#z",
];

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse an appointment time.
///
/// Accepts ISO 8601 date strings: RFC 3339, minute precision with an
/// offset or `Z`, a space instead of `T`, and a bare date (midnight).
/// Values without an offset are read as UTC.
pub fn parse_appointment_time(raw: &str) -> Result<DateTime<Utc>, AppError> {
    let raw = raw.trim();
    parse_with_offset(raw)
        .or_else(|| parse_naive(raw.strip_suffix('Z').unwrap_or(raw)))
        .ok_or_else(|| AppError::validation(format!("\"{}\" is not a valid date string", raw)))
}

fn parse_with_offset(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .or_else(|| {
            ZONED_FORMATS
                .iter()
                .find_map(|format| DateTime::parse_from_str(raw, format).ok())
        })
        .map(|parsed| parsed.with_timezone(&Utc))
}

fn parse_naive(raw: &str) -> Option<DateTime<Utc>> {
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

/// Serde adapter for required time fields in request bodies.
pub fn deserialize_time<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_appointment_time(&raw).map_err(serde::de::Error::custom)
}

/// Serde adapter for optional time fields in patch bodies.
pub fn deserialize_optional_time<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| parse_appointment_time(&raw).map_err(serde::de::Error::custom))
        .transpose()
}
