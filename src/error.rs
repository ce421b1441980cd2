use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::mailer::DispatchError;
use crate::store::StoreError;

#[derive(Debug)]
pub enum AppError {
    Store(StoreError),
    Dispatch(DispatchError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Store(err) => write!(f, "Store Error: {err}"),
            AppError::Dispatch(err) => write!(f, "Dispatch Error: {err}"),
        }
    }
}

impl IntoResponse for AppError {
    /// Every failure collapses to a generic 500. The detail is logged here
    /// and never returned to the client.
    fn into_response(self) -> Response {
        match &self {
            AppError::Store(err) => {
                tracing::error!("Error storing contact: {err}");
            }
            AppError::Dispatch(err) => {
                tracing::error!("Error sending email: {err}");
            }
        }

        (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Store(err)
    }
}

impl From<DispatchError> for AppError {
    fn from(err: DispatchError) -> Self {
        AppError::Dispatch(err)
    }
}
