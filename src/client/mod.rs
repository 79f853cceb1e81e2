//! Front-desk terminal client.
//!
//! Talks to the REST API over HTTP, keeps the login in a session file
//! and renders the dashboard tabs as plain-text tables.

mod api;
pub mod dashboard;
pub mod forms;
mod session;

pub use api::FrontDeskClient;
pub use dashboard::{Snapshot, Tab};
pub use session::{Session, SessionStore};
