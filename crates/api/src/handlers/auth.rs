//! Handlers for the `/auth` resource (login, register).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use pokeadmin_core::error::CoreError;
use pokeadmin_db::models::user::UserResponse;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::services::auth::LoginResponse;
use crate::services::users::NewUser;
use crate::state::AppState;

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// POST /auth/login
///
/// Unknown email and wrong password produce the same 401.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    input.validate()?;

    let user = state
        .auth
        .validate_user(&input.email, &input.password)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Invalid credentials".into())))?;

    Ok(Json(state.auth.login(&user)?))
}

/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<NewUser>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    input.validate()?;
    let user = state.auth.register(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}
