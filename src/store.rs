use async_trait::async_trait;
use sqlx::PgPool;

use crate::articles::repo_types::{Article, ArticleFilter};
use crate::bookings::repo_types::{Booking, NewBooking};
use crate::categories::repo_types::ServiceCategory;
use crate::contact::dto::NewContact;
use crate::{articles, bookings, categories, contact};

/// Everything the HTTP handlers need from the database.
#[async_trait]
pub trait SiteStore: Send + Sync {
    async fn list_articles(&self, filter: &ArticleFilter) -> anyhow::Result<Vec<Article>>;
    async fn list_bookings(&self) -> anyhow::Result<Vec<Booking>>;
    async fn create_booking(&self, booking: &NewBooking) -> anyhow::Result<i64>;
    async fn create_contact(&self, contact: &NewContact) -> anyhow::Result<i64>;
    async fn list_categories(&self) -> anyhow::Result<Vec<ServiceCategory>>;
    /// Cheap round trip used by the health check.
    async fn ping(&self) -> anyhow::Result<()>;
}

#[derive(Clone)]
pub struct PgStore {
    db: PgPool,
}

impl PgStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SiteStore for PgStore {
    async fn list_articles(&self, filter: &ArticleFilter) -> anyhow::Result<Vec<Article>> {
        articles::repo::list_published(&self.db, filter).await
    }

    async fn list_bookings(&self) -> anyhow::Result<Vec<Booking>> {
        bookings::repo::list_all(&self.db).await
    }

    async fn create_booking(&self, booking: &NewBooking) -> anyhow::Result<i64> {
        bookings::repo::insert(&self.db, booking).await
    }

    async fn create_contact(&self, c: &NewContact) -> anyhow::Result<i64> {
        contact::repo::insert(&self.db, c).await
    }

    async fn list_categories(&self) -> anyhow::Result<Vec<ServiceCategory>> {
        categories::repo::list_active(&self.db).await
    }

    async fn ping(&self) -> anyhow::Result<()> {
        sqlx::query("SELECT 1").execute(&self.db).await?;
        Ok(())
    }
}
