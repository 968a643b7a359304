use crate::domain::model::Customer;
use crate::domain::ports::CustomerNotifier;
use crate::utils::error::{CadastroError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// [`CustomerNotifier`] that POSTs the customer record as JSON to a
/// configured URL. The registry treats the notification as
/// fire-and-forget, so failures reported here are logged, not propagated.
pub struct WebhookNotifier {
    client: Client,
    url: String,
}

impl WebhookNotifier {
    pub fn new(url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CadastroError::ConfigError {
                message: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self { client, url })
    }
}

#[async_trait]
impl CustomerNotifier for WebhookNotifier {
    async fn customer_created(&self, customer: &Customer) -> Result<()> {
        let response = self
            .client
            .post(&self.url)
            .json(customer)
            .send()
            .await
            .map_err(|e| CadastroError::NotificationFailed {
                message: format!("webhook request failed: {}", e),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CadastroError::NotificationFailed {
                message: format!("webhook returned status {}", status),
            });
        }

        tracing::info!(
            "✅ Webhook notified for customer {} (status {})",
            customer.id,
            status
        );
        Ok(())
    }
}
