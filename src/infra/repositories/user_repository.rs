//! Staff account repository.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, SqlErr};
use uuid::Uuid;

use super::base::WriteRepository;
use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::User;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by email address (exact match)
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Insert a new account with an already hashed password.
    /// A taken email is a Conflict, even when two signups race.
    async fn create(&self, email: String, password_hash: String) -> AppResult<User>;
}

pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl WriteRepository<UserEntity, ActiveModel> for UserStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let model = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?;

        Ok(model.map(User::from))
    }

    async fn create(&self, email: String, password_hash: String) -> AppResult<User> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(email),
            password_hash: Set(password_hash),
            created_at: Set(chrono::Utc::now()),
        };

        let model = self.insert_model(active_model).await.map_err(|e| match e {
            AppError::Database(ref err)
                if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) =>
            {
                AppError::conflict("Email")
            }
            other => other,
        })?;
        Ok(User::from(model))
    }
}
