//! Clinic front desk - patient queue, appointments and staff auth
//!
//! One crate for both sides of the front desk: an Axum REST API backed by
//! SeaORM, and a terminal client that renders the dashboard from it.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Patients, doctors, appointments and staff users
//! - **services**: Use cases on top of the repository traits
//! - **infra**: Database connection, migrations and repositories
//! - **api**: HTTP handlers, middleware, and routes
//! - **client**: Terminal dashboard talking to the API
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server (migrates and seeds doctors)
//! cargo run -- serve
//!
//! # Sign in and watch the queue
//! cargo run -- login --email desk@clinic.example --password s3cretpass
//! cargo run -- dashboard --tab queue
//! ```

pub mod api;
pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Appointment, Doctor, Password, Patient, User};
pub use errors::{AppError, AppResult};
