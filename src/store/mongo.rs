use async_trait::async_trait;
use mongodb::{Client, Collection, Database};

use super::{ContactStore, StoreError};
use crate::models::Contact;

/// MongoDB-backed store writing to the `contacts` collection.
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    /// Parse the connection string and resolve the target database. The
    /// driver connects lazily, so an unreachable server does not surface
    /// here; it surfaces on the first write (or on `ping`).
    pub async fn connect(uri: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await?;
        let database = client
            .default_database()
            .unwrap_or_else(|| client.database("test"));
        Ok(Self { database })
    }

    fn collection(&self) -> Collection<Contact> {
        self.database.collection("contacts")
    }

    /// Round-trip to the server. Used once at startup to report
    /// connectivity without blocking boot on a dead database.
    pub async fn ping(&self) -> Result<(), StoreError> {
        self.database.run_command(bson::doc! { "ping": 1 }, None).await?;
        Ok(())
    }
}

#[async_trait]
impl ContactStore for MongoStore {
    async fn save(&self, contact: &Contact) -> Result<(), StoreError> {
        self.collection().insert_one(contact, None).await?;
        Ok(())
    }
}
