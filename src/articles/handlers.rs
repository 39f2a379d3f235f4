use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use tracing::{debug, instrument};

use super::dto::{ArticleListResponse, ArticleQuery};
use super::repo_types::ArticleFilter;
use crate::{error::ApiError, state::AppState};

/// GET /api/articles?category=&limit=&offset=
#[instrument(skip(state))]
pub async fn list_articles(
    State(state): State<AppState>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<ArticleListResponse>, ApiError> {
    // an unreadable query string means no parameters, never a rejection
    let q: ArticleQuery = match pairs {
        Ok(Query(pairs)) => pairs.into_iter().collect(),
        Err(rejection) => {
            debug!(%rejection, "ignoring query string");
            ArticleQuery::default()
        }
    };
    let filter = ArticleFilter::from(q);
    let articles = state
        .store
        .list_articles(&filter)
        .await
        .map_err(ApiError::internal("Failed to fetch articles"))?;

    debug!(count = articles.len(), ?filter, "articles listed");
    Ok(Json(ArticleListResponse {
        success: true,
        total: articles.len(),
        articles,
    }))
}
