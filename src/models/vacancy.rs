use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

use crate::utils::validation::within_500_bytes;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, Validate)]
pub struct Vacancy {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    #[validate(length(min = 1), custom(function = within_500_bytes))]
    pub title: String,
    #[validate(length(min = 1), custom(function = within_500_bytes))]
    pub company: String,
    pub active: bool,
    #[validate(length(min = 1, max = 5), custom(function = no_duplicate_tags))]
    pub tags: Vec<String>,
    /// Optimistic-lock token. Starts at 1 and increases by exactly one on
    /// every successful update.
    pub version: i32,
}

pub fn no_duplicate_tags(tags: &[String]) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for tag in tags {
        if !seen.insert(tag.as_str()) {
            let mut error = ValidationError::new("duplicate_tags");
            error.message = Some("tags must not contain duplicate values".into());
            return Err(error);
        }
    }
    Ok(())
}
