// FICHIER : src-server/src/server/response.rs

use crate::commands::failure_reply;
use crate::utils::AppError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, warn};

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::InvalidCommand(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Toute erreur devient `{ "success": false, "message": ... }`.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if self.is_client_error() {
            warn!(status = status.as_u16(), message = %self.public_message(), "Requête refusée");
        } else {
            error!(error = %self, "Échec de traitement");
        }
        (status, Json(failure_reply(&self.public_message()))).into_response()
    }
}
