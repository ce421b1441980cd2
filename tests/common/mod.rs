use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use contact_relay::config::Config;
use contact_relay::mailer::{DispatchError, Mailer, SendReceipt};
use contact_relay::models::Contact;
use contact_relay::store::{ContactStore, StoreError};

/// Origin baked into the test config; CORS assertions check against it.
pub const FRONTEND_ORIGIN: &str = "http://localhost:3000";

/// Store double: keeps saved contacts in memory, optionally failing every
/// write to simulate an unreachable database.
pub struct MemoryStore {
    saved: Mutex<Vec<Contact>>,
    fail: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            saved: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            saved: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn saved(&self) -> Vec<Contact> {
        self.saved.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContactStore for MemoryStore {
    async fn save(&self, contact: &Contact) -> Result<(), StoreError> {
        if self.fail {
            return Err(StoreError::from("store offline"));
        }
        self.saved.lock().unwrap().push(contact.clone());
        Ok(())
    }
}

/// One captured outbound email.
#[derive(Debug, Clone)]
pub struct SentMail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Mailer double: records every send, optionally rejecting all of them.
pub struct RecordingMailer {
    sent: Mutex<Vec<SentMail>>,
    fail: bool,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<SentMail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(
        &self,
        from: &str,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<SendReceipt, DispatchError> {
        if self.fail {
            return Err(DispatchError::from("email API rejected the message"));
        }
        self.sent.lock().unwrap().push(SentMail {
            from: from.to_string(),
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(SendReceipt {
            id: Some("<test-message@relay>".to_string()),
            message: Some("Queued. Thank you.".to_string()),
        })
    }
}

/// A running test server instance with injected collaborator doubles.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub store: Arc<MemoryStore>,
    pub mailer: Arc<RecordingMailer>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// POST a JSON body to /contact, return (body text, status).
    pub async fn submit(&self, data: &Value) -> (String, StatusCode) {
        let resp = self
            .client
            .post(self.url("/contact"))
            .json(data)
            .send()
            .await
            .expect("submit request failed");
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        (body, status)
    }
}

fn test_config() -> Config {
    Config {
        mongodb_uri: "mongodb://localhost:27017/contact_relay_test".to_string(),
        mailgun_api_key: "test-api-key".to_string(),
        mailgun_domain: "sandbox.test.mailgun.org".to_string(),
        destination_email: "owner@example.com".to_string(),
        frontend_url: FRONTEND_ORIGIN.parse().unwrap(),
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        log_level: "warn".to_string(),
    }
}

/// Spawn a test app with healthy collaborators.
pub async fn spawn_app() -> TestApp {
    spawn_app_with(MemoryStore::new(), RecordingMailer::new()).await
}

/// Spawn a test app with the given collaborator doubles.
pub async fn spawn_app_with(store: MemoryStore, mailer: RecordingMailer) -> TestApp {
    let store = Arc::new(store);
    let mailer = Arc::new(mailer);

    let app = contact_relay::build_app(store.clone(), mailer.clone(), test_config());

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    // Spawn server in background
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::new();

    TestApp {
        addr,
        client,
        store,
        mailer,
    }
}
