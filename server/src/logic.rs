use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use shapeboard_shared::Submission;

use crate::state::{MAX_POINTS_PER_STROKE, MAX_STROKES};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ReceiveError {
    #[error("too many strokes: {count} (limit {})", MAX_STROKES)]
    TooManyStrokes { count: usize },
    #[error("stroke {index} has {count} points (limit {})", MAX_POINTS_PER_STROKE)]
    StrokeTooLong { index: usize, count: usize },
    /// JSON cannot carry NaN or infinities and serde_json refuses out-of-range
    /// numbers, so bodies arriving over HTTP fail in the `Json` extractor
    /// first. This catches submissions built in-process.
    #[error("stroke {index} point {point} is not a finite coordinate")]
    NonFinitePoint { index: usize, point: usize },
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ReceiveError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
    }
}

#[derive(Serialize, Debug, PartialEq)]
pub struct Receipt {
    pub submission: u64,
    pub strokes: usize,
    pub points: usize,
    pub shape_type: String,
}

pub fn validate_submission(submission: &Submission) -> Result<(), ReceiveError> {
    if submission.strokes.len() > MAX_STROKES {
        return Err(ReceiveError::TooManyStrokes {
            count: submission.strokes.len(),
        });
    }
    for (index, stroke) in submission.strokes.iter().enumerate() {
        if stroke.len() > MAX_POINTS_PER_STROKE {
            return Err(ReceiveError::StrokeTooLong {
                index,
                count: stroke.len(),
            });
        }
        if let Some(point) = stroke.points().iter().position(|point| !point.is_finite()) {
            return Err(ReceiveError::NonFinitePoint { index, point });
        }
    }
    Ok(())
}

pub fn receipt_for(sequence: u64, submission: &Submission) -> Receipt {
    Receipt {
        submission: sequence,
        strokes: submission.strokes.len(),
        points: submission.point_count(),
        shape_type: submission.shape_type.clone(),
    }
}
