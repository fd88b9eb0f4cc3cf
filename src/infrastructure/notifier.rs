use crate::domain::ports::NotificationPort;
use crate::error::Result;
use async_trait::async_trait;

/// Delivers notifications as structured log events.
///
/// Stands in for an email/SMS gateway; every alert becomes one `info` event
/// carrying the recipient address.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl TracingNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotificationPort for TracingNotifier {
    async fn notify_funds_low(&self, email: &str) -> Result<()> {
        tracing::info!(email, "Notification sent: funds low");
        Ok(())
    }

    async fn notify_approaching_pay_in_limit(&self, email: &str) -> Result<()> {
        tracing::info!(email, "Notification sent: approaching pay in limit");
        Ok(())
    }
}
