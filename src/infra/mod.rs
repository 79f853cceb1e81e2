//! Infrastructure layer - External systems integration
//!
//! - Database connection and migrations
//! - SeaORM-backed repositories

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{
    AppointmentRepository, AppointmentStore, DoctorRepository, DoctorStore, PatientRepository,
    PatientStore, UserRepository, UserStore,
};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{
    MockAppointmentRepository, MockDoctorRepository, MockPatientRepository, MockUserRepository,
};
