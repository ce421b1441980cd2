use async_trait::async_trait;

use super::{DispatchError, Mailer, SendReceipt};

const API_BASE: &str = "https://api.mailgun.net";

/// Mailgun messages-API client. Sends are form-encoded POSTs authenticated
/// with HTTP basic auth (username `api`, password the private key).
pub struct MailgunMailer {
    client: reqwest::Client,
    api_key: String,
    domain: String,
    base_url: String,
}

impl MailgunMailer {
    pub fn new(api_key: String, domain: String) -> Self {
        Self::with_base_url(api_key, domain, API_BASE.to_string())
    }

    /// Send against a different API base. Regional Mailgun endpoints and
    /// local stub servers live on other hosts.
    pub fn with_base_url(api_key: String, domain: String, base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            domain,
            base_url,
        }
    }
}

#[async_trait]
impl Mailer for MailgunMailer {
    async fn send(
        &self,
        from: &str,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<SendReceipt, DispatchError> {
        let url = format!("{}/v3/{}/messages", self.base_url, self.domain);
        let params = [
            ("from", from),
            ("to", to),
            ("subject", subject),
            ("text", body),
        ];

        let resp = self
            .client
            .post(&url)
            .basic_auth("api", Some(&self.api_key))
            .form(&params)
            .send()
            .await
            .map_err(|e| DispatchError::from(format!("Mailgun request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let error_body = resp
                .text()
                .await
                .unwrap_or_default()
                .chars()
                .take(1024)
                .collect::<String>();
            return Err(DispatchError::from(format!(
                "Mailgun returned {status}: {error_body}"
            )));
        }

        resp.json::<SendReceipt>()
            .await
            .map_err(|e| DispatchError::from(format!("Failed to parse Mailgun response: {e}")))
    }
}
