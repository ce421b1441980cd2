use std::net::IpAddr;

use axum::http::HeaderValue;

#[derive(Debug, Clone)]
pub struct Config {
    pub mongodb_uri: String,
    pub mailgun_api_key: String,
    pub mailgun_domain: String,
    pub destination_email: String,
    pub frontend_url: HeaderValue,
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
}

impl Config {
    /// Read everything once at startup. There is no runtime reconfiguration.
    pub fn from_env() -> Result<Self, String> {
        let mongodb_uri = env_required("MONGODB_URI")?;
        let mailgun_api_key = env_required("MAILGUN_API_KEY")?;
        let mailgun_domain = env_required("MAILGUN_DOMAIN")?;
        let destination_email = env_required("DESTINATION_EMAIL")?;

        let frontend_url: HeaderValue = env_required("FRONTEND_URL")?
            .parse()
            .map_err(|e| format!("Invalid FRONTEND_URL: {e}"))?;

        let host: IpAddr = env_or("HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid HOST: {e}"))?;

        let port: u16 = env_or("PORT", "5000")
            .parse()
            .map_err(|e| format!("Invalid PORT: {e}"))?;

        let log_level = env_or("LOG_LEVEL", "info");

        Ok(Config {
            mongodb_uri,
            mailgun_api_key,
            mailgun_domain,
            destination_email,
            frontend_url,
            host,
            port,
            log_level,
        })
    }

    /// Sender line for outbound notifications, derived from the Mailgun
    /// sending domain.
    pub fn sender(&self) -> String {
        format!("Mailgun Sandbox <postmaster@{}>", self.mailgun_domain)
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
