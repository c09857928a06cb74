use async_trait::async_trait;
use serde_json::Value as JsonValue;

/// Outbound mail capability. Implementations wrap whatever transport the
/// hosting process uses; one call delivers one templated message to one
/// recipient and reports failure per call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(
        &self,
        recipient: &str,
        template: &str,
        payload: &JsonValue,
    ) -> anyhow::Result<()>;
}
