//! Service container - one place that wires stores into services.

use std::sync::Arc;

use super::{
    AppointmentManager, AppointmentService, AuthService, Authenticator, DoctorManager,
    DoctorService, PatientManager, PatientService,
};
use crate::config::Config;
use crate::infra::{AppointmentStore, DoctorStore, PatientStore, UserStore};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    fn auth(&self) -> Arc<dyn AuthService>;

    fn patients(&self) -> Arc<dyn PatientService>;

    fn doctors(&self) -> Arc<dyn DoctorService>;

    fn appointments(&self) -> Arc<dyn AppointmentService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    patient_service: Arc<dyn PatientService>,
    doctor_service: Arc<dyn DoctorService>,
    appointment_service: Arc<dyn AppointmentService>,
}

impl Services {
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        patient_service: Arc<dyn PatientService>,
        doctor_service: Arc<dyn DoctorService>,
        appointment_service: Arc<dyn AppointmentService>,
    ) -> Self {
        Self {
            auth_service,
            patient_service,
            doctor_service,
            appointment_service,
        }
    }

    /// Create service container from database connection and config
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: Config) -> Self {
        let users = Arc::new(UserStore::new(db.clone()));
        let patients = Arc::new(PatientStore::new(db.clone()));
        let doctors = Arc::new(DoctorStore::new(db.clone()));
        let appointments = Arc::new(AppointmentStore::new(db));

        Self::new(
            Arc::new(Authenticator::new(users, config)),
            Arc::new(PatientManager::new(patients)),
            Arc::new(DoctorManager::new(doctors)),
            Arc::new(AppointmentManager::new(appointments)),
        )
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn patients(&self) -> Arc<dyn PatientService> {
        self.patient_service.clone()
    }

    fn doctors(&self) -> Arc<dyn DoctorService> {
        self.doctor_service.clone()
    }

    fn appointments(&self) -> Arc<dyn AppointmentService> {
        self.appointment_service.clone()
    }
}
