//! User repository - persistence contract and SeaORM implementation.
//!
//! This layer owns the translation between domain entities and persisted
//! rows, and is the only place where store-native errors are turned into
//! domain errors.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, SqlErr,
};
use uuid::Uuid;

#[cfg(test)]
use mockall::automock;

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::User;
use crate::errors::{AppError, AppResult};

/// Persistence contract for users.
///
/// `find_*` methods return `Ok(None)` for well-formed but unknown keys,
/// never an error.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user row, keyed by the store's unique email constraint.
    async fn create(&self, user: User) -> AppResult<User>;

    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// List all users, store-default ordering
    async fn list(&self) -> AppResult<Vec<User>>;
}

/// SeaORM-backed implementation of `UserRepository`.
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance over a database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn create(&self, user: User) -> AppResult<User> {
        let email = user.email().as_str().to_string();
        let active: ActiveModel = (&user).into();

        // No find-then-insert pre-check: the unique constraint resolves
        // concurrent creates for the same email, and the structured
        // violation signal tells us which error to surface.
        match active.insert(&self.db).await {
            Ok(model) => Ok(User::from(model)),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    Err(AppError::UserAlreadyExists(email))
                }
                _ => Err(AppError::Database(err)),
            },
        }
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let model = UserEntity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let model = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?;
        Ok(model.map(User::from))
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find().all(&self.db).await?;
        Ok(models.into_iter().map(User::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn model(email: &str) -> user::Model {
        let now = Utc::now();
        user::Model {
            id: Uuid::new_v4(),
            email: email.to_string(),
            hashed_password: Some("$argon2id$stored".to_string()),
            role: "user".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn find_by_id_returns_none_for_unknown_key() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<user::Model>::new()])
            .into_connection();

        let store = UserStore::new(db);
        let result = store.find_by_id(Uuid::new_v4()).await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn find_by_email_returns_none_for_unknown_key() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<user::Model>::new()])
            .into_connection();

        let store = UserStore::new(db);
        let result = store.find_by_email("nobody@example.com").await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn find_by_email_maps_row_to_domain() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model("found@example.com")]])
            .into_connection();

        let store = UserStore::new(db);
        let user = store
            .find_by_email("found@example.com")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(user.email().as_str(), "found@example.com");
    }

    #[tokio::test]
    async fn list_maps_all_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model("a@b.co"), model("c@d.co")]])
            .into_connection();

        let store = UserStore::new(db);
        let users = store.list().await.unwrap();

        assert_eq!(users.len(), 2);
    }
}
