//! Handlers for the public `/pokemon` catalog routes.

use axum::extract::{Query, State};
use axum::Json;
use pokeadmin_catalog::CreatureDetail;

use crate::error::AppResult;
use crate::query::{CatalogPageParams, SearchParams, TypeParams};
use crate::state::AppState;

/// GET /pokemon?limit=&offset=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<CatalogPageParams>,
) -> AppResult<Json<Vec<CreatureDetail>>> {
    let page = state
        .catalog
        .list_page(params.limit(), params.offset())
        .await?;
    Ok(Json(page))
}

/// GET /pokemon/search?term=
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<CreatureDetail>> {
    Json(state.catalog.search(&params.term).await)
}

/// GET /pokemon/by-type?type=
pub async fn by_type(
    State(state): State<AppState>,
    Query(params): Query<TypeParams>,
) -> Json<Vec<CreatureDetail>> {
    Json(state.catalog.filter_by_type(&params.kind).await)
}
