use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use mailform_contact::Submission;
use validator::Validate;

use crate::error::{ApiResponse, AppError};
use crate::routes::AppState;

/// POST /api/contact
///
/// Validates the submission, forwards it to the administrator and
/// acknowledges the submitter. The two deliveries are sequential; a failure
/// on either one short-circuits and surfaces as a single generic failure.
pub async fn submit(
    State(state): State<AppState>,
    Json(submission): Json<Submission>,
) -> Result<impl IntoResponse, AppError> {
    if submission.validate().is_err() {
        return Err(AppError::MissingFields);
    }

    state
        .email
        .send_contact_notification(&submission)
        .await
        .map_err(AppError::Delivery)?;

    state
        .email
        .send_auto_reply(&submission)
        .await
        .map_err(AppError::Delivery)?;

    Ok(Json(ApiResponse {
        success: true,
        message: "Message sent successfully",
    }))
}
