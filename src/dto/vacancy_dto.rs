use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::vacancy::no_duplicate_tags;
use crate::utils::validation::within_500_bytes;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateVacancyPayload {
    #[validate(length(min = 1), custom(function = within_500_bytes))]
    pub title: String,
    #[validate(length(min = 1), custom(function = within_500_bytes))]
    pub company: String,
    #[validate(length(min = 1, max = 5), custom(function = no_duplicate_tags))]
    pub tags: Vec<String>,
}
