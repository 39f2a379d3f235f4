//! In-memory [`SiteStore`] for handler tests. Mirrors the filtering and ordering
//! the SQL in each `repo.rs` performs.

use std::sync::Mutex;

use async_trait::async_trait;
use time::{Duration, OffsetDateTime};

use crate::articles::repo_types::{Article, ArticleFilter};
use crate::bookings::repo_types::{Booking, NewBooking, INITIAL_STATUS as BOOKING_STATUS};
use crate::categories::repo_types::ServiceCategory;
use crate::contact::dto::{NewContact, INITIAL_STATUS as CONTACT_STATUS};
use crate::store::SiteStore;

#[derive(Debug, Clone)]
pub struct StoredContact {
    pub id: i64,
    pub contact: NewContact,
    pub status: &'static str,
}

#[derive(Default)]
struct Tables {
    articles: Vec<Article>,
    bookings: Vec<Booking>,
    contacts: Vec<StoredContact>,
    categories: Vec<ServiceCategory>,
    next_id: i64,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    unreachable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails the way a refused connection would.
    pub fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::default()
        }
    }

    pub fn with_articles(self, articles: Vec<Article>) -> Self {
        self.tables.lock().unwrap().articles = articles;
        self
    }

    pub fn with_categories(self, categories: Vec<ServiceCategory>) -> Self {
        self.tables.lock().unwrap().categories = categories;
        self
    }

    pub fn bookings(&self) -> Vec<Booking> {
        self.tables.lock().unwrap().bookings.clone()
    }

    pub fn contacts(&self) -> Vec<StoredContact> {
        self.tables.lock().unwrap().contacts.clone()
    }

    fn check(&self) -> anyhow::Result<()> {
        if self.unreachable {
            anyhow::bail!("error communicating with database: Connection refused (os error 111)");
        }
        Ok(())
    }
}

/// Article fixture; `age_minutes` orders fixtures relative to each other.
pub fn article(id: i64, category: &str, published: bool, age_minutes: i64) -> Article {
    Article {
        id,
        title: format!("Article {id}"),
        excerpt: None,
        content: Some("body".into()),
        category: Some(category.into()),
        thumbnail_url: None,
        author: Some("Staff".into()),
        created_at: OffsetDateTime::UNIX_EPOCH + Duration::days(20_000)
            - Duration::minutes(age_minutes),
        updated_at: None,
        is_published: published,
        read_time: Some(3),
    }
}

pub fn category(id: i64, name: &str, sort_order: i32, is_active: bool) -> ServiceCategory {
    ServiceCategory {
        id,
        name: name.into(),
        sort_order,
        is_active,
    }
}

#[async_trait]
impl SiteStore for MemoryStore {
    async fn list_articles(&self, filter: &ArticleFilter) -> anyhow::Result<Vec<Article>> {
        self.check()?;
        let tables = self.tables.lock().unwrap();
        let mut rows: Vec<Article> = tables
            .articles
            .iter()
            .filter(|a| a.is_published)
            .filter(|a| match &filter.category {
                Some(c) => a.category.as_deref() == Some(c.as_str()),
                None => true,
            })
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows
            .into_iter()
            .skip(filter.offset as usize)
            .take(filter.limit as usize)
            .collect())
    }

    async fn list_bookings(&self) -> anyhow::Result<Vec<Booking>> {
        self.check()?;
        let mut rows = self.tables.lock().unwrap().bookings.clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn create_booking(&self, b: &NewBooking) -> anyhow::Result<i64> {
        self.check()?;
        let mut tables = self.tables.lock().unwrap();
        tables.next_id += 1;
        let id = tables.next_id;
        tables.bookings.push(Booking {
            id,
            name: b.name.clone(),
            email: b.email.clone(),
            phone: b.phone.clone(),
            service_id: b.service_id,
            service_name: b.service_name.clone(),
            preferred_date: b.preferred_date.clone(),
            preferred_time: b.preferred_time.clone(),
            message: b.message.clone(),
            address: b.address.clone(),
            status: BOOKING_STATUS.into(),
            created_at: OffsetDateTime::now_utc(),
            service_title: None,
            category_name: None,
        });
        Ok(id)
    }

    async fn create_contact(&self, c: &NewContact) -> anyhow::Result<i64> {
        self.check()?;
        let mut tables = self.tables.lock().unwrap();
        tables.next_id += 1;
        let id = tables.next_id;
        tables.contacts.push(StoredContact {
            id,
            contact: c.clone(),
            status: CONTACT_STATUS,
        });
        Ok(id)
    }

    async fn list_categories(&self) -> anyhow::Result<Vec<ServiceCategory>> {
        self.check()?;
        let mut rows: Vec<ServiceCategory> = self
            .tables
            .lock()
            .unwrap()
            .categories
            .iter()
            .filter(|c| c.is_active)
            .cloned()
            .collect();
        rows.sort_by(|a, b| (a.sort_order, &a.name).cmp(&(b.sort_order, &b.name)));
        Ok(rows)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.check()
    }
}
