use axum::{extract::State, Json};
use serde::Serialize;
use tracing::instrument;

use super::repo_types::ServiceCategory;
use crate::{error::ApiError, state::AppState};

#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    pub success: bool,
    pub data: Vec<ServiceCategory>,
}

/// GET /api/services/categories
#[instrument(skip(state))]
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoryListResponse>, ApiError> {
    let data = state
        .store
        .list_categories()
        .await
        .map_err(ApiError::internal("Failed to fetch service categories"))?;
    Ok(Json(CategoryListResponse {
        success: true,
        data,
    }))
}
