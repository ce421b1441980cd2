use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::error::AppError;
use crate::mailer::templates;
use crate::models::Contact;
use crate::state::SharedState;

/// Incoming form body. Every field is optional; missing fields pass through
/// as absent rather than being rejected.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

/// Persist the submission, then relay it as a notification email.
///
/// The two steps are strictly sequential: a store failure aborts before any
/// dispatch attempt, while a dispatch failure leaves the already-persisted
/// record in place (accepted partial-failure state, not rolled back). Neither
/// step is retried.
pub async fn submit(
    State(state): State<SharedState>,
    Json(form): Json<ContactForm>,
) -> Result<&'static str, AppError> {
    let contact = Contact::new(form.name, form.email, form.message);
    state.store.save(&contact).await?;

    let body = templates::render_notification(
        contact.name.as_deref().unwrap_or_default(),
        contact.email.as_deref().unwrap_or_default(),
        contact.message.as_deref().unwrap_or_default(),
    );

    let receipt = state
        .mailer
        .send(
            &state.config.sender(),
            &state.config.destination_email,
            templates::NOTIFICATION_SUBJECT,
            &body,
        )
        .await?;

    tracing::info!(
        "Email sent: id={} message={}",
        receipt.id.as_deref().unwrap_or("-"),
        receipt.message.as_deref().unwrap_or("-"),
    );

    Ok("Form received successfully")
}
