//! Application services layer - Use cases and business logic.
//!
//! Services depend on the repository traits, never on SeaORM directly,
//! so each one can be tested against automocked repositories.

mod appointment_service;
mod auth_service;
pub mod container;
mod doctor_service;
mod patient_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use appointment_service::{AppointmentManager, AppointmentService};
pub use auth_service::{AuthService, Authenticator, Claims, TokenResponse};
pub use doctor_service::{DoctorManager, DoctorService};
pub use patient_service::{PatientManager, PatientService};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
