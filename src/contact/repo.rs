use sqlx::PgPool;

use crate::contact::dto::{NewContact, INITIAL_STATUS};

/// Stores a contact form submission and returns its id.
pub async fn insert(db: &PgPool, c: &NewContact) -> anyhow::Result<i64> {
    let id = sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO contact_submissions
            (name, email, phone, service, message, preferred_contact, status)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id
        "#,
    )
    .bind(&c.name)
    .bind(&c.email)
    .bind(&c.phone)
    .bind(&c.service)
    .bind(&c.message)
    .bind(&c.preferred_contact)
    .bind(INITIAL_STATUS)
    .fetch_one(db)
    .await?;
    Ok(id)
}
