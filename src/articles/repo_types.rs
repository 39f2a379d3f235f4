use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

/// Published article as stored in `articles`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub thumbnail_url: Option<String>,
    pub author: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
    pub is_published: bool,
    pub read_time: Option<i32>,
}

/// What the listing endpoint asks the store for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleFilter {
    pub category: Option<String>,
    pub limit: i64,
    pub offset: i64,
}

impl Default for ArticleFilter {
    fn default() -> Self {
        Self {
            category: None,
            limit: 10,
            offset: 0,
        }
    }
}
