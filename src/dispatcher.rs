//! Background fan-out of vacancy-created notifications.

use std::sync::Arc;

use serde_json::json;
use tokio_util::task::TaskTracker;

use crate::mailer::Mailer;
use crate::models::vacancy::Vacancy;
use crate::repository::subscriber::SubscriberRepository;

/// Template identifier handed to the mail transport for creation notices.
pub const NEW_VACANCY_TEMPLATE: &str = "new_vacancy";

/// Delivers a created vacancy to every subscriber whose tag matches one of
/// the vacancy's tags. The work runs on detached tasks with their own
/// lifetime; failures are logged and never reach the caller.
#[derive(Clone)]
pub struct NotificationDispatcher {
    subscribers: Arc<dyn SubscriberRepository>,
    mailer: Arc<dyn Mailer>,
    tasks: TaskTracker,
}

impl NotificationDispatcher {
    pub fn new(subscribers: Arc<dyn SubscriberRepository>, mailer: Arc<dyn Mailer>) -> Self {
        Self {
            subscribers,
            mailer,
            tasks: TaskTracker::new(),
        }
    }

    /// Schedules the fan-out for a newly created vacancy and returns without
    /// waiting for it.
    pub fn vacancy_created(&self, vacancy: &Vacancy) {
        let subscribers = Arc::clone(&self.subscribers);
        let mailer = Arc::clone(&self.mailer);
        let vacancy = vacancy.clone();
        self.tasks.spawn(async move {
            fan_out(subscribers, mailer, vacancy).await;
        });
    }

    /// Number of fan-outs still in flight.
    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }

    /// Waits for every scheduled fan-out to finish. Called by the hosting
    /// process as part of its shutdown sequence.
    pub async fn shutdown(&self) {
        self.tasks.close();
        self.tasks.wait().await;
    }
}

async fn fan_out(
    subscribers: Arc<dyn SubscriberRepository>,
    mailer: Arc<dyn Mailer>,
    vacancy: Vacancy,
) {
    let payload = json!({
        "title": vacancy.title,
        "company": vacancy.company,
        "tags": vacancy.tags,
    });

    for tag in &vacancy.tags {
        let matched = match subscribers.get_all_by_tag(tag).await {
            Ok(matched) => matched,
            Err(err) => {
                // One failed lookup skips that tag only; the remaining tags
                // still fan out.
                tracing::error!(%tag, error = %err, "subscriber lookup failed, skipping tag");
                continue;
            }
        };

        for subscriber in matched {
            if let Err(err) = mailer
                .send(&subscriber.email, NEW_VACANCY_TEMPLATE, &payload)
                .await
            {
                tracing::error!(
                    subscriber_id = subscriber.id,
                    %tag,
                    error = %err,
                    "vacancy notification delivery failed"
                );
            }
        }
    }
}
