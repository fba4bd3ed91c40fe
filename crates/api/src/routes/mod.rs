pub mod auth;
pub mod health;
pub mod pokemon;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// ```text
/// /auth/login                  login (public)
/// /auth/register               register (public)
///
/// /users                       list, create (auth required)
/// /users/{id}                  get, update, delete (auth required)
///
/// /pokemon                     paged list (public)
/// /pokemon/search              name search (public)
/// /pokemon/by-type             type filter (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", users::router())
        .nest("/pokemon", pokemon::router())
}
