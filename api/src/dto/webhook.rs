//! DTOs for the Polka billing webhook.

use serde::Deserialize;

/// Webhook payload sent by Polka
#[derive(Debug, Deserialize)]
pub struct PolkaWebhookPayload {
    /// Event name, e.g. `user.upgraded`
    pub event: String,
    pub data: PolkaWebhookData,
}

/// Event data carried by a Polka webhook
#[derive(Debug, Deserialize)]
pub struct PolkaWebhookData {
    /// Affected user id as a string
    pub user_id: String,
}
