use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored contact-form submission. Written once, never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub date: DateTime<Utc>,
}

impl Contact {
    /// Build a submission from the raw form fields, stamping it with the
    /// current time. Absent fields stay absent in the stored document.
    pub fn new(name: Option<String>, email: Option<String>, message: Option<String>) -> Self {
        Self {
            id: ObjectId::new(),
            name,
            email,
            message,
            date: Utc::now(),
        }
    }
}
