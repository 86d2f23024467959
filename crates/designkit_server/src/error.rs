//! HTTP error taxonomy
//!
//! Every failure leaves the server as `{ "error": ..., "hint": ... }`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use designkit_export::ExportError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("no design state recorded yet")]
    NoState,

    #[error("state is missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("invalid state document: {0}")]
    InvalidBody(String),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("token path `{path}` not found (no `{missing}`)")]
    TokenNotFound {
        path: String,
        missing: String,
        available: Vec<String>,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Wire shape of every error response
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub hint: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NoState | ApiError::TokenNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::MissingFields(_) | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Export(ExportError::UnknownFormat { .. }) => StatusCode::BAD_REQUEST,
            ApiError::Export(_) | ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn hint(&self) -> String {
        match self {
            ApiError::NoState => {
                "Make a selection in designkit first, or POST a state to /state.".to_string()
            }
            ApiError::MissingFields(_) => {
                "Send the whole state: selections, colorPicks and typeScale are required."
                    .to_string()
            }
            ApiError::InvalidBody(_) => "Send the state as a JSON object.".to_string(),
            ApiError::Export(ExportError::UnknownFormat { known, .. }) => {
                format!("Use one of: {known}.")
            }
            ApiError::TokenNotFound { available, .. } => {
                format!("Paths start with one of: {}.", available.join(", "))
            }
            ApiError::Export(_) | ApiError::Store(_) => {
                "Check the server log. A failed write leaves the previous state in place."
                    .to_string()
            }
        }
    }

    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            error: self.to_string(),
            hint: self.hint(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        (status, Json(self.body())).into_response()
    }
}
