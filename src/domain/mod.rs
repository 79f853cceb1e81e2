//! Domain layer - Core business entities and logic
//!
//! Record types for the front desk (staff users, patients, doctors,
//! appointments) independent of persistence and HTTP concerns.

pub mod appointment;
pub mod doctor;
pub mod password;
pub mod patient;
pub mod user;

pub use appointment::{
    placeholder_patient_id, Appointment, AppointmentChanges, AppointmentStatus, NewAppointment,
};
pub use doctor::Doctor;
pub use password::Password;
pub use patient::{
    queue_number, NewPatient, Patient, PatientPriority, PatientStatus, PatientStatusChange,
};
pub use user::{User, UserResponse};
