use sqlx::PgPool;

use crate::bookings::repo_types::{Booking, NewBooking, INITIAL_STATUS};
use crate::query::SelectQuery;

const SELECT_BOOKINGS: &str = r#"SELECT b.id, b.name, b.email, b.phone, b.service_id, b.service_name,
       b.preferred_date::text AS preferred_date, b.preferred_time::text AS preferred_time,
       b.message, b.address, b.status, b.created_at,
       s.name AS service_title, c.name AS category_name
FROM bookings b
LEFT JOIN services s ON s.id = b.service_id
LEFT JOIN service_categories c ON c.id = s.category_id"#;

pub async fn list_all(db: &PgPool) -> anyhow::Result<Vec<Booking>> {
    let mut qb = SelectQuery::new(SELECT_BOOKINGS)
        .order_by("b.created_at DESC")
        .into_builder();
    let rows = qb.build_query_as::<Booking>().fetch_all(db).await?;
    Ok(rows)
}

/// Inserts a booking with the initial status and returns its id.
pub async fn insert(db: &PgPool, b: &NewBooking) -> anyhow::Result<i64> {
    let id = sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO bookings
            (name, email, phone, service_id, service_name,
             preferred_date, preferred_time, message, address, status)
        VALUES ($1, $2, $3, $4, $5, $6::date, $7::time, $8, $9, $10)
        RETURNING id
        "#,
    )
    .bind(&b.name)
    .bind(&b.email)
    .bind(&b.phone)
    .bind(b.service_id) // Option → NULL
    .bind(&b.service_name)
    .bind(&b.preferred_date)
    .bind(&b.preferred_time)
    .bind(&b.message)
    .bind(&b.address)
    .bind(INITIAL_STATUS)
    .fetch_one(db)
    .await?;
    Ok(id)
}
