//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::user_handler;
use crate::domain::{CreateUser, UserResponse, UserRole};

/// OpenAPI documentation for the Auth System API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Auth System API",
        version = "0.1.0",
        description = "Demo authentication/user-management backend with Axum and SeaORM",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        user_handler::list_users,
        user_handler::create_user,
        user_handler::get_auth_user,
    ),
    components(
        schemas(
            UserRole,
            UserResponse,
            CreateUser,
            user_handler::AuthUserResponse,
        )
    ),
    tags(
        (name = "Users", description = "User management operations")
    )
)]
pub struct ApiDoc;
