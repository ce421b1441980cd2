pub mod mongo;

use async_trait::async_trait;

use crate::models::Contact;

#[derive(Debug)]
pub struct StoreError {
    pub message: String,
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<String> for StoreError {
    fn from(s: String) -> Self {
        StoreError { message: s }
    }
}

impl From<&str> for StoreError {
    fn from(s: &str) -> Self {
        StoreError {
            message: s.to_string(),
        }
    }
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        StoreError {
            message: err.to_string(),
        }
    }
}

/// Persistence collaborator holding submitted contacts. The handler only ever
/// appends; there is no read, update or delete path.
#[async_trait]
pub trait ContactStore: Send + Sync {
    async fn save(&self, contact: &Contact) -> Result<(), StoreError>;
}
