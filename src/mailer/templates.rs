pub const NOTIFICATION_SUBJECT: &str = "New message received";

/// Plain-text notification body. Absent form fields render as empty strings.
pub fn render_notification(name: &str, email: &str, message: &str) -> String {
    format!("You have received a message from {name} ({email}):\n\n{message}")
}
