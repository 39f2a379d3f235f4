use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

/// Every booking starts here; callers cannot choose a status.
pub const INITIAL_STATUS: &str = "pending";

/// Booking row joined with its service and category names.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service_id: Option<i64>,
    pub service_name: Option<String>,
    pub preferred_date: Option<String>, // rendered by postgres as YYYY-MM-DD
    pub preferred_time: Option<String>,
    pub message: Option<String>,
    pub address: Option<String>,
    pub status: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub service_title: Option<String>,
    pub category_name: Option<String>,
}

/// Validated insert payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service_id: Option<i64>,
    pub service_name: Option<String>,
    pub preferred_date: Option<String>,
    pub preferred_time: Option<String>,
    pub message: Option<String>,
    pub address: Option<String>,
}
