//! Route definitions for the `/pokemon` catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::pokemon;
use crate::state::AppState;

/// Routes mounted at `/pokemon`.
///
/// ```text
/// GET /           -> list
/// GET /search     -> search
/// GET /by-type    -> by_type
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pokemon::list))
        .route("/search", get(pokemon::search))
        .route("/by-type", get(pokemon::by_type))
}
