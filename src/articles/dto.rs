use serde::Serialize;

use crate::articles::repo_types::{Article, ArticleFilter};

/// Raw query string. Numbers stay strings here so that junk input falls back to
/// the defaults instead of failing extraction.
#[derive(Debug, Default)]
pub struct ArticleQuery {
    pub category: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

/// Built from the decoded `key=value` pairs. A repeated key keeps its first
/// value and unknown keys are ignored.
impl FromIterator<(String, String)> for ArticleQuery {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut q = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "category" => &mut q.category,
                "limit" => &mut q.limit,
                "offset" => &mut q.offset,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        q
    }
}

fn non_negative(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|n| *n >= 0)
}

impl From<ArticleQuery> for ArticleFilter {
    fn from(q: ArticleQuery) -> Self {
        let defaults = ArticleFilter::default();
        Self {
            category: q.category.filter(|c| !c.is_empty()),
            limit: non_negative(q.limit.as_deref()).unwrap_or(defaults.limit),
            offset: non_negative(q.offset.as_deref()).unwrap_or(defaults.offset),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ArticleListResponse {
    pub success: bool,
    pub articles: Vec<Article>,
    /// Rows on this page, not the total number of matches.
    pub total: usize,
}
