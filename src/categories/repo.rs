use sqlx::PgPool;

use crate::categories::repo_types::ServiceCategory;
use crate::query::SelectQuery;

/// Active categories in display order.
pub async fn list_active(db: &PgPool) -> anyhow::Result<Vec<ServiceCategory>> {
    let mut qb = SelectQuery::new("SELECT id, name, sort_order, is_active FROM service_categories")
        .filter("is_active = true")
        .order_by("sort_order, name")
        .into_builder();
    let rows = qb.build_query_as::<ServiceCategory>().fetch_all(db).await?;
    Ok(rows)
}
