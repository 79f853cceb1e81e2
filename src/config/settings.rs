//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_DB_DATABASE, DEFAULT_DB_HOST, DEFAULT_DB_PASSWORD, DEFAULT_DB_PORT,
    DEFAULT_DB_USERNAME, DEFAULT_JWT_EXPIRATION_HOURS, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
    MIN_JWT_SECRET_LENGTH,
};

const DEV_JWT_SECRET: &str = "dev-secret-key-minimum-32-chars!!";

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    jwt_secret: String,
    pub jwt_expiration_hours: i64,
    pub server_host: String,
    pub server_port: u16,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("jwt_secret", &"[REDACTED]")
            .field("jwt_expiration_hours", &self.jwt_expiration_hours)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: compose_database_url(
                DEFAULT_DB_USERNAME,
                DEFAULT_DB_PASSWORD,
                DEFAULT_DB_HOST,
                DEFAULT_DB_PORT,
                DEFAULT_DB_DATABASE,
            ),
            jwt_secret: DEV_JWT_SECRET.to_string(),
            jwt_expiration_hours: DEFAULT_JWT_EXPIRATION_HOURS,
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `DATABASE_URL` wins when set; otherwise the URL is assembled from
    /// `DB_HOST`, `DB_PORT`, `DB_USERNAME`, `DB_PASSWORD` and `DB_DATABASE`.
    ///
    /// # Panics
    /// Panics if JWT_SECRET is not set in release builds or is too short.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            if cfg!(debug_assertions) {
                tracing::warn!("JWT_SECRET not set, using insecure default for development");
                DEV_JWT_SECRET.to_string()
            } else {
                panic!("JWT_SECRET environment variable must be set in production");
            }
        });

        if jwt_secret.len() < MIN_JWT_SECRET_LENGTH {
            panic!(
                "JWT_SECRET must be at least {} characters long",
                MIN_JWT_SECRET_LENGTH
            );
        }

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| {
            compose_database_url(
                &env::var("DB_USERNAME").unwrap_or_else(|_| DEFAULT_DB_USERNAME.to_string()),
                &env::var("DB_PASSWORD").unwrap_or_else(|_| DEFAULT_DB_PASSWORD.to_string()),
                &env::var("DB_HOST").unwrap_or_else(|_| DEFAULT_DB_HOST.to_string()),
                env::var("DB_PORT")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_DB_PORT),
                &env::var("DB_DATABASE").unwrap_or_else(|_| DEFAULT_DB_DATABASE.to_string()),
            )
        });

        Self {
            database_url,
            jwt_secret,
            jwt_expiration_hours: env::var("JWT_EXPIRATION_HOURS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_JWT_EXPIRATION_HOURS),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
        }
    }

    /// Replace the signing secret (tests and embedded setups).
    pub fn with_jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = secret.into();
        self
    }

    /// Get JWT secret bytes for token signing/verification.
    pub fn jwt_secret_bytes(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn compose_database_url(username: &str, password: &str, host: &str, port: u16, database: &str) -> String {
    format!("postgres://{}:{}@{}:{}/{}", username, password, host, port, database)
}
