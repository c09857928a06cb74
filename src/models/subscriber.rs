use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Subscriber {
    pub id: i64,
    pub user_id: i64,
    /// Resolved from the users table by the tag lookup; empty everywhere else.
    #[sqlx(default)]
    #[serde(default)]
    pub email: String,
    pub tag: String,
    pub created_at: DateTime<Utc>,
}
