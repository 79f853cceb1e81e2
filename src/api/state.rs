//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::Database;
use crate::services::{
    AppointmentService, AuthService, DoctorService, PatientService, ServiceContainer, Services,
};

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub patient_service: Arc<dyn PatientService>,
    pub doctor_service: Arc<dyn DoctorService>,
    pub appointment_service: Arc<dyn AppointmentService>,
    /// Database handle, for health checks
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from a connected database and config.
    pub fn from_config(database: Arc<Database>, config: Config) -> Self {
        let container = Services::from_connection(database.get_connection(), config);
        Self::from_container(&container, database)
    }

    /// Create application state from any service container.
    pub fn from_container(container: &dyn ServiceContainer, database: Arc<Database>) -> Self {
        Self {
            auth_service: container.auth(),
            patient_service: container.patients(),
            doctor_service: container.doctors(),
            appointment_service: container.appointments(),
            database,
        }
    }
}
