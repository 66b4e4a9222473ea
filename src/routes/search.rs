use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};

use crate::{
    error::AppResult,
    response::{ApiResponse, Meta},
    routes::params::SearchQuery,
    search::SearchOutcome,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(search_catalog))
}

#[utoipa::path(
    get,
    path = "/api/search",
    params(
        ("q" = Option<String>, Query, description = "Free-text query; blank returns the empty result")
    ),
    responses(
        (status = 200, description = "Matched products plus matched facets", body = ApiResponse<SearchOutcome>),
        (status = 500, description = "Catalog read failed"),
    ),
    tag = "Search"
)]
pub async fn search_catalog(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<ApiResponse<SearchOutcome>>> {
    let outcome = state.search.run(&query.q).await?;
    let total = outcome.products.len() as i64;
    Ok(Json(ApiResponse::success(
        "Search results",
        outcome,
        Some(Meta::new(1, total, total)),
    )))
}
