pub mod mailgun;
pub mod templates;

use async_trait::async_trait;
use serde::Deserialize;

/// What the email API returned for an accepted send. Logged, never shown to
/// the submitting client.
#[derive(Debug, Clone, Deserialize)]
pub struct SendReceipt {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug)]
pub struct DispatchError {
    pub message: String,
}

impl std::fmt::Display for DispatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<String> for DispatchError {
    fn from(s: String) -> Self {
        DispatchError { message: s }
    }
}

impl From<&str> for DispatchError {
    fn from(s: &str) -> Self {
        DispatchError {
            message: s.to_string(),
        }
    }
}

/// Outbound-email collaborator. One attempt per call, no retries; delivery
/// guarantees are whatever the underlying API provides.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(
        &self,
        from: &str,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<SendReceipt, DispatchError>;
}
