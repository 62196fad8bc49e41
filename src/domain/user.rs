//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::{ROLE_ADMIN, ROLE_USER};
use crate::errors::AppResult;

use super::{Email, Password};

/// User roles enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Admin,
}

impl UserRole {
    /// Check if this role has admin privileges
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

impl From<&str> for UserRole {
    fn from(s: &str) -> Self {
        match s {
            ROLE_ADMIN => UserRole::Admin,
            _ => UserRole::User,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "{}", ROLE_ADMIN),
            UserRole::User => write!(f, "{}", ROLE_USER),
        }
    }
}

/// User domain entity.
///
/// Immutable once constructed; state changes go through functional
/// updates that return a new instance.
#[derive(Debug, Clone)]
pub struct User {
    id: Uuid,
    email: Email,
    password: Option<Password>,
    role: UserRole,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    /// Validating factory for new users.
    ///
    /// Enforces the password-length invariant (hashing the plaintext on
    /// the way in) and stamps both timestamps with the same instant.
    ///
    /// # Errors
    /// Returns `AppError::WeakPassword` for passwords shorter than the
    /// configured minimum.
    pub fn create(id: Uuid, email: Email, password: &str) -> AppResult<Self> {
        let password = Password::new(password)?;
        let now = Utc::now();

        Ok(Self {
            id,
            email,
            password: Some(password),
            role: UserRole::User,
            created_at: now,
            updated_at: now,
        })
    }

    /// Trusting factory for rows read back from the store.
    ///
    /// The persisted row is assumed already valid; nothing is re-checked.
    pub fn from_persistence(
        id: Uuid,
        email: String,
        hashed_password: Option<String>,
        role: &str,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email: Email::from_trusted(email),
            password: hashed_password.map(Password::from_hash),
            role: UserRole::from(role),
            created_at,
            updated_at,
        }
    }

    /// Project into the client-facing representation.
    ///
    /// The password hash is never included.
    pub fn to_response(&self) -> UserResponse {
        UserResponse {
            id: self.id,
            email: self.email.as_str().to_string(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Check if user has admin role
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Return a copy with the role replaced; all other fields identical.
    pub fn change_role(self, role: UserRole) -> Self {
        Self { role, ..self }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password(&self) -> Option<&Password> {
        self.password.as_ref()
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// User creation data transfer object
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateUser {
    /// User email address
    #[schema(example = "user@example.com")]
    pub email: String,
    /// User password (minimum 8 characters)
    #[schema(example = "SecurePass123!", min_length = 8)]
    pub password: String,
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// Unique user identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    /// User email address
    #[schema(example = "user@example.com")]
    pub email: String,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        user.to_response()
    }
}
