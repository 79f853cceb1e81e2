//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Authentication & Security
// =============================================================================

/// Default JWT token expiration in hours
pub const DEFAULT_JWT_EXPIRATION_HOURS: i64 = 24;

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Seconds per hour (for token expiration calculation)
pub const SECONDS_PER_HOUR: i64 = 3600;

/// JWT token type identifier
pub const TOKEN_TYPE_BEARER: &str = "Bearer";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port (the dashboard expects the API on 3001)
pub const DEFAULT_SERVER_PORT: u16 = 3001;

// =============================================================================
// Database
// =============================================================================

pub const DEFAULT_DB_HOST: &str = "localhost";
pub const DEFAULT_DB_PORT: u16 = 5432;
pub const DEFAULT_DB_USERNAME: &str = "postgres";
pub const DEFAULT_DB_PASSWORD: &str = "password";
pub const DEFAULT_DB_DATABASE: &str = "clinic";

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: u64 = 8;

// =============================================================================
// Front desk
// =============================================================================

/// Queue numbers start at `A101` for the first patient of an empty table.
pub const QUEUE_NUMBER_PREFIX: &str = "A";
pub const QUEUE_NUMBER_OFFSET: u64 = 101;

/// Upper bound (exclusive) of the placeholder `P{n}` patient id on appointments
pub const PLACEHOLDER_PATIENT_ID_RANGE: u32 = 1000;

/// Doctors inserted on first startup when the table is empty: (name, specialization)
pub const DEFAULT_DOCTORS: &[(&str, &str)] = &[
    ("Dr. Smith", "General Practice"),
    ("Dr. Johnson", "Pediatrics"),
    ("Dr. Lee", "Cardiology"),
];

// =============================================================================
// Front-desk client
// =============================================================================

/// Default API base URL used by the terminal client
pub const DEFAULT_API_URL: &str = "http://localhost:3001";

/// Dashboard polling interval in seconds
pub const DASHBOARD_POLL_SECONDS: u64 = 30;

/// Client request timeout in seconds
pub const CLIENT_TIMEOUT_SECONDS: u64 = 10;

/// Session file location under the home directory
pub const SESSION_DIR_NAME: &str = ".frontdesk";
pub const SESSION_FILE_NAME: &str = "session.json";
