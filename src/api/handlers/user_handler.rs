//! User handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::domain::{CreateUser, UserResponse};
use crate::errors::AppResult;

/// Hard-coded authenticated-user projection kept for the demo frontend.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthUserResponse {
    #[schema(example = "1")]
    pub id: String,
    #[schema(example = "john.doe@example.com")]
    pub email: String,
    #[schema(example = "1234567890")]
    pub token: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/create", post(create_user))
        .route("/auth", get(get_auth_user))
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = [UserResponse])
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = state.user_service.get_users().await?;
    tracing::debug!(count = users.len(), "users from service");

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users/create",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created successfully", body = UserResponse),
        (status = 400, description = "Invalid email format or weak password"),
        (status = 409, description = "User with this email already exists")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = state.user_service.create_user(payload).await?;
    tracing::debug!(id = %user.id(), "user created");

    Ok((StatusCode::CREATED, Json(user.to_response())))
}

/// Get the demo authenticated user
// TODO: remove this endpoint once the frontend stops depending on it
#[utoipa::path(
    get,
    path = "/users/auth",
    tag = "Users",
    responses(
        (status = 200, description = "Demo authenticated user", body = AuthUserResponse)
    )
)]
pub async fn get_auth_user() -> Json<AuthUserResponse> {
    let now = Utc::now();

    Json(AuthUserResponse {
        id: "1".to_string(),
        email: "john.doe@example.com".to_string(),
        token: "1234567890".to_string(),
        created_at: now,
        updated_at: now,
    })
}
