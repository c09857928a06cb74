//! Page, sort and metadata handling shared by the list queries.

use serde::Serialize;
use validator::{Validate, ValidationError};

/// Listing parameters. Must pass `validate()` before being handed to a
/// repository; `sort_column` panics on values that never went through the
/// safelist check.
#[derive(Debug, Clone, Validate)]
#[validate(schema(function = validate_sort))]
pub struct Filters {
    #[validate(range(min = 1, max = 10_000_000))]
    pub page: i64,
    #[validate(range(min = 1, max = 100))]
    pub page_size: i64,
    pub sort: String,
    pub sort_safelist: Vec<&'static str>,
}

impl Filters {
    /// The bare column name for the ORDER BY clause, with any leading `-`
    /// stripped. Only safelisted values ever reach the query text.
    pub fn sort_column(&self) -> &str {
        for candidate in &self.sort_safelist {
            if self.sort == *candidate {
                return self.sort.trim_start_matches('-');
            }
        }
        panic!("unsafe sort parameter: {}", self.sort)
    }

    pub fn sort_direction(&self) -> &'static str {
        if self.sort.starts_with('-') {
            "DESC"
        } else {
            "ASC"
        }
    }

    pub fn limit(&self) -> i64 {
        self.page_size
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.page_size
    }
}

fn validate_sort(filters: &Filters) -> Result<(), ValidationError> {
    if filters.sort_safelist.iter().any(|s| *s == filters.sort) {
        return Ok(());
    }
    let mut error = ValidationError::new("sort");
    error.message = Some("invalid sort value".into());
    Err(error)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Metadata {
    pub current_page: i64,
    pub page_size: i64,
    pub first_page: i64,
    pub last_page: i64,
    pub total_records: i64,
}

impl Metadata {
    /// Summary of one result page. An empty result set yields the zero value.
    pub fn calculate(total_records: i64, page: i64, page_size: i64) -> Metadata {
        if total_records == 0 {
            return Metadata::default();
        }

        Metadata {
            current_page: page,
            page_size,
            first_page: 1,
            last_page: (total_records + page_size - 1) / page_size,
            total_records,
        }
    }
}
