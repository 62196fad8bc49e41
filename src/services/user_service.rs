//! User service - Handles user-related business logic.
//!
//! The service owns the validation step: domain objects are constructed
//! (and validated) here before anything reaches the repository. Errors
//! from validation and persistence propagate to the caller unchanged;
//! translating them to HTTP is the API layer's job.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{CreateUser, Email, User};
use crate::errors::AppResult;
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List all users
    async fn get_users(&self) -> AppResult<Vec<User>>;

    /// Validate and persist a new user
    async fn create_user(&self, dto: CreateUser) -> AppResult<User>;
}

/// Concrete implementation of UserService.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance over a repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn get_users(&self) -> AppResult<Vec<User>> {
        self.repo.list().await
    }

    async fn create_user(&self, dto: CreateUser) -> AppResult<User> {
        let email = Email::new(&dto.email)?;
        let user = User::create(Uuid::new_v4(), email, &dto.password)?;

        self.repo.create(user).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::Utc;

    use crate::domain::UserRole;
    use crate::errors::AppError;
    use crate::infra::repositories::MockUserRepository;

    fn stored_user(email: &str) -> User {
        let now = Utc::now();
        User::from_persistence(
            Uuid::new_v4(),
            email.to_string(),
            Some("$argon2id$stored".to_string()),
            "user",
            now,
            now,
        )
    }

    fn dto(email: &str, password: &str) -> CreateUser {
        CreateUser {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn get_users_passes_through() {
        let mut repo = MockUserRepository::new();
        repo.expect_list()
            .returning(|| Ok(vec![stored_user("a@b.co"), stored_user("c@d.co")]));

        let service = UserManager::new(Arc::new(repo));
        let users = service.get_users().await.unwrap();

        assert_eq!(users.len(), 2);
    }

    #[tokio::test]
    async fn create_user_persists_validated_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_create().returning(|user| Ok(user));

        let service = UserManager::new(Arc::new(repo));
        let user = service
            .create_user(dto("new@example.com", "password123"))
            .await
            .unwrap();

        assert_eq!(user.email().as_str(), "new@example.com");
        assert_eq!(user.role(), UserRole::User);
        assert_eq!(user.created_at(), user.updated_at());
        // The repository receives a hash, never the plaintext
        assert!(user.password().unwrap().verify("password123"));
        assert_ne!(user.password().unwrap().as_str(), "password123");
    }

    #[tokio::test]
    async fn create_user_rejects_invalid_email_before_persistence() {
        let mut repo = MockUserRepository::new();
        repo.expect_create().never();

        let service = UserManager::new(Arc::new(repo));
        let result = service.create_user(dto("bad-email", "password123")).await;

        assert!(
            matches!(result, Err(AppError::InvalidEmail(ref e)) if e == "bad-email")
        );
    }

    #[tokio::test]
    async fn create_user_rejects_weak_password_before_persistence() {
        let mut repo = MockUserRepository::new();
        repo.expect_create().never();

        let service = UserManager::new(Arc::new(repo));
        let result = service.create_user(dto("new@example.com", "short")).await;

        assert!(matches!(result, Err(AppError::WeakPassword)));
    }

    #[tokio::test]
    async fn create_user_propagates_duplicate_error_unchanged() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .returning(|user| Err(AppError::UserAlreadyExists(user.email().to_string())));

        let service = UserManager::new(Arc::new(repo));
        let result = service
            .create_user(dto("dup@x.com", "Secure123"))
            .await;

        assert!(
            matches!(result, Err(AppError::UserAlreadyExists(ref e)) if e == "dup@x.com")
        );
    }
}
