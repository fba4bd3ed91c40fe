//! Handlers for the `/users` resource. Every route requires a bearer token.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pokeadmin_core::types::DbId;
use pokeadmin_db::models::user::UserResponse;
use validator::Validate;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::services::users::{NewUser, UserChanges};
use crate::state::AppState;

/// GET /users
pub async fn list(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<UserResponse>>> {
    Ok(Json(state.users.find_all().await?))
}

/// POST /users
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<NewUser>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    input.validate()?;
    let user = state.users.create(input).await?;
    tracing::info!(
        created_id = user.id,
        by = auth.user_id,
        by_email = %auth.email,
        "User created via API"
    );
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /users/{id}
pub async fn get_one(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserResponse>> {
    Ok(Json(state.users.find_one(id).await?))
}

/// PATCH /users/{id}
pub async fn update(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UserChanges>,
) -> AppResult<Json<UserResponse>> {
    input.validate()?;
    Ok(Json(state.users.update(id, input).await?))
}

/// DELETE /users/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    state.users.remove(id).await?;
    tracing::info!(
        deleted_id = id,
        by = auth.user_id,
        by_email = %auth.email,
        "User deleted via API"
    );
    Ok(StatusCode::NO_CONTENT)
}
