//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.
//! Enum-valued columns are stored as their display text.

pub mod appointment;
pub mod doctor;
pub mod patient;
pub mod user;
