use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Body shape shared by every `/api/contact` response.
#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: &'static str,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("all fields are required")]
    MissingFields,

    #[error("mail delivery failed")]
    Delivery(#[source] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::MissingFields => (StatusCode::BAD_REQUEST, "All fields are required"),
            AppError::Delivery(cause) => {
                // Transport detail stays server-side; the caller only gets a
                // retry hint.
                tracing::error!(error = ?cause, "Error sending email");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to send message, please try again later",
                )
            }
        };

        (
            status,
            Json(ApiResponse {
                success: false,
                message,
            }),
        )
            .into_response()
    }
}
