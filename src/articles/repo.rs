use sqlx::PgPool;

use crate::articles::repo_types::{Article, ArticleFilter};
use crate::query::SelectQuery;

const SELECT_ARTICLES: &str = r#"SELECT id, title, excerpt, content, category, thumbnail_url, author,
       created_at, updated_at, is_published, read_time
FROM articles"#;

pub(crate) fn list_query(filter: &ArticleFilter) -> SelectQuery {
    SelectQuery::new(SELECT_ARTICLES)
        .filter("is_published = true")
        .eq_opt("category", filter.category.clone())
        .order_by("created_at DESC")
        .page(filter.limit, filter.offset)
}

/// Published articles, newest first, one page at a time.
pub async fn list_published(db: &PgPool, filter: &ArticleFilter) -> anyhow::Result<Vec<Article>> {
    let mut qb = list_query(filter).into_builder();
    let rows = qb.build_query_as::<Article>().fetch_all(db).await?;
    Ok(rows)
}
