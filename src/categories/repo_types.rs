use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ServiceCategory {
    pub id: i64,
    pub name: String,
    pub sort_order: i32,
    pub is_active: bool,
}
