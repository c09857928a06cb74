//! In-memory implementations of the repository traits with the same
//! observable behavior as the PostgreSQL ones: token matching, tag
//! containment, the version compare-and-swap and window-count pagination.
//! Used by tests and useful for development without a database.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::dto::subscriber_dto::CreateSubscriberPayload;
use crate::dto::vacancy_dto::CreateVacancyPayload;
use crate::error::{Error, Result};
use crate::filters::{Filters, Metadata};
use crate::models::subscriber::Subscriber;
use crate::models::vacancy::Vacancy;

use super::subscriber::SubscriberRepository;
use super::vacancy::VacancyRepository;

fn tokens(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect()
}

/// Mirrors `to_tsvector('simple', document) @@ plainto_tsquery('simple', query)`:
/// every token of the query must appear in the document. A query with no
/// tokens matches nothing.
fn text_matches(document: &str, query: &str) -> bool {
    let query_tokens = tokens(query);
    if query_tokens.is_empty() {
        return false;
    }
    let document_tokens = tokens(document);
    query_tokens.iter().all(|t| document_tokens.contains(t))
}

#[derive(Default)]
struct VacancyState {
    next_id: i64,
    rows: HashMap<i64, Vacancy>,
}

#[derive(Clone, Default)]
pub struct InMemoryVacancyRepository {
    state: Arc<RwLock<VacancyState>>,
}

impl InMemoryVacancyRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VacancyRepository for InMemoryVacancyRepository {
    async fn insert(&self, payload: &CreateVacancyPayload) -> Result<Vacancy> {
        let mut state = self.state.write().await;
        state.next_id += 1;
        let vacancy = Vacancy {
            id: state.next_id,
            created_at: Utc::now(),
            title: payload.title.clone(),
            company: payload.company.clone(),
            active: false,
            tags: payload.tags.clone(),
            version: 1,
        };
        state.rows.insert(vacancy.id, vacancy.clone());
        Ok(vacancy)
    }

    async fn get(&self, id: i64) -> Result<Vacancy> {
        if id < 1 {
            return Err(Error::NotFound);
        }
        let state = self.state.read().await;
        state.rows.get(&id).cloned().ok_or(Error::NotFound)
    }

    async fn get_all(
        &self,
        title: &str,
        tags: &[String],
        filters: &Filters,
    ) -> Result<(Vec<Vacancy>, Metadata)> {
        let sort_column = filters.sort_column();
        let descending = filters.sort_direction() == "DESC";

        let state = self.state.read().await;
        let mut matched: Vec<Vacancy> = state
            .rows
            .values()
            .filter(|v| title.is_empty() || text_matches(&v.title, title))
            .filter(|v| tags.iter().all(|t| v.tags.contains(t)))
            .cloned()
            .collect();
        drop(state);

        matched.sort_by(|a, b| {
            let by_column = match sort_column {
                "id" => a.id.cmp(&b.id),
                "title" => a.title.cmp(&b.title),
                "company" => a.company.cmp(&b.company),
                other => panic!("unsupported sort column: {}", other),
            };
            let by_column = if descending {
                by_column.reverse()
            } else {
                by_column
            };
            // The id tie-break stays ascending regardless of direction.
            by_column.then(a.id.cmp(&b.id))
        });

        let total_records = matched.len() as i64;
        let start = filters.offset().min(total_records) as usize;
        let end = (filters.offset() + filters.limit()).min(total_records) as usize;
        let page = matched[start..end].to_vec();

        // The SQL window count rides on returned rows, so a page past the end
        // carries no count and reports zero metadata. Same here.
        let window_total = if page.is_empty() { 0 } else { total_records };
        let metadata = Metadata::calculate(window_total, filters.page, filters.page_size);
        Ok((page, metadata))
    }

    async fn update(&self, vacancy: &Vacancy) -> Result<Vacancy> {
        if vacancy.id < 1 {
            return Err(Error::NotFound);
        }
        let mut state = self.state.write().await;
        match state.rows.get_mut(&vacancy.id) {
            Some(stored) if stored.version == vacancy.version => {
                stored.title = vacancy.title.clone();
                stored.company = vacancy.company.clone();
                stored.tags = vacancy.tags.clone();
                stored.active = vacancy.active;
                stored.version += 1;
                Ok(stored.clone())
            }
            // A missing row and a stale version report the same conflict.
            _ => Err(Error::EditConflict),
        }
    }

    async fn delete(&self, id: i64) -> Result<()> {
        if id < 1 {
            return Err(Error::NotFound);
        }
        let mut state = self.state.write().await;
        if state.rows.remove(&id).is_none() {
            return Err(Error::NotFound);
        }
        Ok(())
    }
}

#[derive(Default)]
struct SubscriberState {
    next_id: i64,
    rows: HashMap<i64, Subscriber>,
    // user_id to email, standing in for the external users table.
    emails: HashMap<i64, String>,
}

#[derive(Clone, Default)]
pub struct InMemorySubscriberRepository {
    state: Arc<RwLock<SubscriberState>>,
}

impl InMemorySubscriberRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a user email for the tag lookup to join against, the way the
    /// SQL implementation joins the users table.
    pub async fn register_user(&self, user_id: i64, email: &str) {
        let mut state = self.state.write().await;
        state.emails.insert(user_id, email.to_string());
    }
}

#[async_trait]
impl SubscriberRepository for InMemorySubscriberRepository {
    async fn insert(&self, payload: &CreateSubscriberPayload) -> Result<Subscriber> {
        let mut state = self.state.write().await;
        state.next_id += 1;
        let subscriber = Subscriber {
            id: state.next_id,
            user_id: payload.user_id,
            email: String::new(),
            tag: payload.tag.clone(),
            created_at: Utc::now(),
        };
        state.rows.insert(subscriber.id, subscriber.clone());
        Ok(subscriber)
    }

    async fn get_all_by_user(&self, user_id: i64) -> Result<Vec<Subscriber>> {
        let state = self.state.read().await;
        let mut subscribers: Vec<Subscriber> = state
            .rows
            .values()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect();
        subscribers.sort_by_key(|s| s.id);
        Ok(subscribers)
    }

    async fn get_all_by_tag(&self, tag: &str) -> Result<Vec<Subscriber>> {
        let state = self.state.read().await;
        let mut subscribers: Vec<Subscriber> = state
            .rows
            .values()
            .filter(|s| text_matches(&s.tag, tag))
            .filter_map(|s| {
                // Inner-join semantics: rows without a known user are dropped.
                state.emails.get(&s.user_id).map(|email| {
                    let mut with_email = s.clone();
                    with_email.email = email.clone();
                    with_email
                })
            })
            .collect();
        subscribers.sort_by_key(|s| s.id);
        Ok(subscribers)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        if id < 1 {
            return Err(Error::NotFound);
        }
        let mut state = self.state.write().await;
        if state.rows.remove(&id).is_none() {
            return Err(Error::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_case_insensitively_on_non_alphanumerics() {
        assert_eq!(tokens("Backend Engineer"), vec!["backend", "engineer"]);
        assert_eq!(tokens("go, rust & c++"), vec!["go", "rust", "c"]);
        assert!(tokens("!!!").is_empty());
    }

    #[test]
    fn matches_when_every_query_token_is_present() {
        assert!(text_matches("backend engineer", "backend"));
        assert!(text_matches("Senior Backend Engineer", "backend engineer"));
        assert!(!text_matches("frontend", "backend"));
        assert!(!text_matches("backend", "backend engineer"));
    }

    #[test]
    fn empty_queries_match_nothing() {
        assert!(!text_matches("backend", ""));
        assert!(!text_matches("backend", "   "));
    }
}
