//! JSON views of the catalog and of the filtered listing.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::filter::{listing, CategoryKey};
use crate::models::Profile;
use crate::routes::page::ViewParams;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub key: CategoryKey,
    pub label: &'static str,
    pub heading: &'static str,
    pub active: bool,
}

/// GET /api/v1/profile
pub async fn handle_get_profile(State(state): State<AppState>) -> Json<Profile> {
    Json(state.catalog.profile.clone())
}

/// GET /api/v1/categories
pub async fn handle_get_categories(
    Query(params): Query<ViewParams>,
) -> Result<Json<Vec<CategoryResponse>>, AppError> {
    let view = params.into_state()?;
    let categories = CategoryKey::ALL
        .into_iter()
        .map(|key| CategoryResponse {
            key,
            label: key.label(),
            heading: key.heading(),
            active: view.is_active(key),
        })
        .collect();
    Ok(Json(categories))
}

/// GET /api/v1/listing
pub async fn handle_get_listing(
    State(state): State<AppState>,
    Query(params): Query<ViewParams>,
) -> Result<Response, AppError> {
    let view = params.into_state()?;
    // The listing borrows from the catalog, so serialize before the handler returns.
    Ok(Json(listing(&state.catalog, &view)).into_response())
}
