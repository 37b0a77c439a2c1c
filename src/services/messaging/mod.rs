pub mod twilio;

use async_trait::async_trait;

#[async_trait]
pub trait MessagingProvider: Send + Sync {
    async fn send_message(&self, to: &str, body: &str) -> anyhow::Result<()>;
}

/// Stands in when no owner phone is configured; the lead only reaches the log.
pub struct LogOnlyMessaging;

#[async_trait]
impl MessagingProvider for LogOnlyMessaging {
    async fn send_message(&self, to: &str, body: &str) -> anyhow::Result<()> {
        tracing::info!(to = %to, body = %body, "SMS disabled, notification logged only");
        Ok(())
    }
}
