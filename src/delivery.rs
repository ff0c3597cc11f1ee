//! Relay for the contact form's message-delivery provider.
//!
//! The browser never talks to the provider directly; the contact server
//! function hands the validated payload to [`deliver`], which posts the
//! provider's JSON envelope from the server.

use leptos::prelude::ServerFnError;
use thiserror::Error;

/// EmailJS service this site sends through.
pub const SERVICE_ID: &str = "service_z9qv0ac";
/// Template the provider renders the message into.
pub const TEMPLATE_ID: &str = "template_h9g5f59";
/// Public (client) key; authorizes sends for this account only.
pub const PUBLIC_KEY: &str = "I8j2M6PKFky4qh7wf";

#[cfg(feature = "ssr")]
const ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[cfg(feature = "ssr")]
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(15);

/// Why a delivery attempt failed. Never retried automatically; the user
/// resubmits explicitly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("network error: {0}")]
    Network(String),
    #[error("delivery provider rejected the message: {0}")]
    Rejected(String),
    #[error("delivery request timed out")]
    Timeout,
}

impl DeliveryError {
    /// Classify a failed server-function round trip. A transport failure
    /// reaching our own server is a network error; anything the server
    /// reported is treated as a provider-side rejection.
    pub fn from_server_fn(err: ServerFnError) -> Self {
        match err {
            ServerFnError::Request(msg) => Self::Network(msg),
            other => Self::Rejected(other.to_string()),
        }
    }
}

/// Post one message to the delivery provider.
#[cfg(feature = "ssr")]
pub async fn deliver(name: &str, email: &str, message: &str) -> Result<(), DeliveryError> {
    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|err| DeliveryError::Network(err.to_string()))?;

    let envelope = serde_json::json!({
        "service_id": SERVICE_ID,
        "template_id": TEMPLATE_ID,
        "user_id": PUBLIC_KEY,
        "template_params": {
            "from_name": name,
            "from_email": email,
            "message": message,
        },
    });

    let response = client
        .post(ENDPOINT)
        .json(&envelope)
        .send()
        .await
        .map_err(map_reqwest_error)?;

    let status = response.status();
    if !status.is_success() {
        let detail = response.text().await.unwrap_or_default();
        tracing::warn!(%status, "delivery provider rejected contact message");
        return Err(DeliveryError::Rejected(format!("{status}: {detail}")));
    }

    tracing::info!("contact message relayed to delivery provider");
    Ok(())
}

#[cfg(feature = "ssr")]
fn map_reqwest_error(err: reqwest::Error) -> DeliveryError {
    if err.is_timeout() {
        DeliveryError::Timeout
    } else {
        DeliveryError::Network(err.to_string())
    }
}
