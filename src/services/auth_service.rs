//! Authentication service - staff signup, signin and token checks.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::{Config, SECONDS_PER_HOUR, TOKEN_TYPE_BEARER};
use crate::domain::{Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// JWT claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub exp: i64,
    pub iat: i64,
}

/// Token response returned after a successful signin
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
    /// Token type (always "Bearer")
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Token lifetime in seconds
    #[schema(example = 86400)]
    pub expires_in: i64,
}

#[async_trait]
pub trait AuthService: Send + Sync {
    /// Create a staff account; fails with Conflict if the email is taken
    async fn signup(&self, email: String, password: String) -> AppResult<User>;

    /// Check credentials and issue a bearer token
    async fn signin(&self, email: String, password: String) -> AppResult<TokenResponse>;

    /// Verify a bearer token and extract its claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

pub struct Authenticator {
    users: Arc<dyn UserRepository>,
    config: Config,
}

impl Authenticator {
    pub fn new(users: Arc<dyn UserRepository>, config: Config) -> Self {
        Self { users, config }
    }

    fn issue_token(&self, user: &User) -> AppResult<TokenResponse> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(self.config.jwt_expiration_hours);

        let claims = Claims {
            sub: user.id,
            email: user.email.clone(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret_bytes()),
        )?;

        Ok(TokenResponse {
            access_token: token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in: self.config.jwt_expiration_hours * SECONDS_PER_HOUR,
        })
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn signup(&self, email: String, password: String) -> AppResult<User> {
        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict("Email"));
        }

        let password_hash = Password::new(&password)?.into_string();
        let user = self.users.create(email, password_hash).await?;
        tracing::info!(user_id = %user.id, "Staff account created");

        Ok(user)
    }

    async fn signin(&self, email: String, password: String) -> AppResult<TokenResponse> {
        let user = self.users.find_by_email(&email).await?;

        // Unknown emails still pay for one hash verification.
        let stored = match &user {
            Some(user) => Password::from_hash(user.password_hash.as_str()),
            None => Password::unknown_user(),
        };
        let password_valid = stored.verify(&password);

        match user {
            Some(user) if password_valid => self.issue_token(&user),
            _ => {
                tracing::debug!("Rejected signin attempt");
                Err(AppError::InvalidCredentials)
            }
        }
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }
}
