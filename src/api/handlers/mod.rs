//! HTTP request handlers.

pub mod appointment_handler;
pub mod auth_handler;
pub mod doctor_handler;
pub mod health_handler;
pub mod patient_handler;

pub use appointment_handler::appointment_routes;
pub use auth_handler::auth_routes;
pub use doctor_handler::doctor_routes;
pub use health_handler::health;
pub use patient_handler::patient_routes;
