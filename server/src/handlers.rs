use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use shapeboard_shared::Submission;

use crate::logic::{receipt_for, validate_submission, ReceiveError};
use crate::state::AppState;

pub async fn ping_handler() -> impl IntoResponse {
    StatusCode::NO_CONTENT
}

pub async fn send_strokes_handler(
    State(state): State<AppState>,
    Json(submission): Json<Submission>,
) -> Result<impl IntoResponse, ReceiveError> {
    if let Err(error) = validate_submission(&submission) {
        tracing::warn!(%error, "rejected submission");
        return Err(error);
    }
    let receipt = receipt_for(state.next_submission(), &submission);
    tracing::info!(
        submission = receipt.submission,
        strokes = receipt.strokes,
        points = receipt.points,
        shape_type = %receipt.shape_type,
        "received strokes"
    );
    Ok(Json(receipt))
}
