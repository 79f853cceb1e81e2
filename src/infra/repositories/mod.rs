//! Repository layer - Data access abstraction
//!
//! One repository trait per record type, each backed by a SeaORM store.
//! The traits are automocked for service tests.

mod appointment_repository;
mod base;
mod doctor_repository;
pub(crate) mod entities;
mod patient_repository;
mod user_repository;

pub use appointment_repository::{AppointmentRepository, AppointmentStore};
pub use base::{ReadRepository, WriteRepository};
pub use doctor_repository::{DoctorRepository, DoctorStore};
pub use patient_repository::{PatientRepository, PatientStore};
pub use user_repository::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use appointment_repository::MockAppointmentRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use doctor_repository::MockDoctorRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use patient_repository::MockPatientRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
