//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Args, Parser, Subcommand};

use crate::client::Tab;
use crate::config::DEFAULT_API_URL;
use crate::domain::{PatientPriority, PatientStatus};

/// Clinic front desk - API server and terminal dashboard
#[derive(Parser, Debug)]
#[command(name = "frontdesk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Base URL of the front-desk API (client commands)
    #[arg(long, global = true, env = "FRONTDESK_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Run database migrations
    Migrate(MigrateArgs),

    /// Create a staff account
    Signup(CredentialsArgs),

    /// Sign in and remember the token
    Login(CredentialsArgs),

    /// Forget the stored token
    Logout,

    /// Show the dashboard, refreshing every 30 seconds
    Dashboard(DashboardArgs),

    /// Manage the walk-in queue
    Queue(QueueArgs),

    /// Manage appointments
    Appointments(AppointmentsArgs),

    /// List doctors
    Doctors,
}

/// Arguments for the serve command; unset values fall back to the config
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset and re-run all migrations
    Fresh,
}

#[derive(Args, Debug)]
pub struct CredentialsArgs {
    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub password: String,
}

#[derive(Args, Debug)]
pub struct DashboardArgs {
    /// Tab to display
    #[arg(long, value_enum, default_value_t = Tab::Overview)]
    pub tab: Tab,

    /// Render once and exit instead of polling
    #[arg(long)]
    pub once: bool,
}

#[derive(Args, Debug)]
pub struct QueueArgs {
    #[command(subcommand)]
    pub action: QueueAction,
}

#[derive(Subcommand, Debug)]
pub enum QueueAction {
    /// Add a walk-in patient
    Add {
        #[arg(long)]
        name: String,

        /// Normal or Urgent
        #[arg(long, default_value = "Normal")]
        priority: PatientPriority,
    },
    /// Change a patient's status ("Waiting", "With Doctor", "Completed")
    Status {
        id: i32,

        status: PatientStatus,

        /// Attending doctor; omitted clears the assignment
        #[arg(long)]
        doctor: Option<i32>,
    },
}

#[derive(Args, Debug)]
pub struct AppointmentsArgs {
    #[command(subcommand)]
    pub action: AppointmentsAction,
}

#[derive(Subcommand, Debug)]
pub enum AppointmentsAction {
    /// Book an appointment
    Add {
        #[arg(long)]
        patient_name: String,

        #[arg(long)]
        reason: String,

        /// e.g. 2024-05-01T09:30
        #[arg(long)]
        time: String,

        /// Doctor id
        #[arg(long)]
        doctor: i32,
    },
    /// Change any of an appointment's fields
    Reschedule {
        id: i32,

        #[arg(long)]
        patient_name: Option<String>,

        #[arg(long)]
        reason: Option<String>,

        #[arg(long)]
        time: Option<String>,

        #[arg(long)]
        doctor: Option<i32>,
    },
    /// Cancel an appointment (it stays listed as Canceled)
    Cancel { id: i32 },
}
