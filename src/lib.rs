pub mod config;
pub mod database;
pub mod dispatcher;
pub mod dto;
pub mod error;
pub mod filters;
pub mod mailer;
pub mod models;
pub mod repository;
pub mod utils;

use std::sync::Arc;

use sqlx::PgPool;

use crate::dispatcher::NotificationDispatcher;
use crate::mailer::Mailer;
use crate::repository::{PgSubscriberRepository, PgVacancyRepository};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub vacancies: PgVacancyRepository,
    pub subscribers: PgSubscriberRepository,
    pub dispatcher: NotificationDispatcher,
}

impl AppState {
    pub fn new(pool: PgPool, mailer: Arc<dyn Mailer>) -> Self {
        let config = crate::config::get_config();
        let query_timeout = config.query_timeout();

        let vacancies = PgVacancyRepository::with_timeout(pool.clone(), query_timeout);
        let subscribers = PgSubscriberRepository::with_timeout(pool.clone(), query_timeout);
        let dispatcher = NotificationDispatcher::new(Arc::new(subscribers.clone()), mailer);

        Self {
            pool,
            vacancies,
            subscribers,
            dispatcher,
        }
    }
}
