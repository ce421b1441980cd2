use std::sync::Arc;

use crate::config::Config;
use crate::mailer::Mailer;
use crate::store::ContactStore;

pub type SharedState = Arc<AppState>;

/// Read-only per-process state. The collaborators are injected at startup so
/// tests can substitute doubles.
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn ContactStore>,
    pub mailer: Arc<dyn Mailer>,
}
