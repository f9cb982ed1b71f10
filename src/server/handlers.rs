use crate::core::SubmissionService;
use crate::models::SubmissionPayload;
use crate::ui::messages::error;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// `POST /submit`: append to today's log and re-render today's spreadsheet.
pub(crate) async fn submit(
    State(service): State<Arc<SubmissionService>>,
    Json(payload): Json<SubmissionPayload>,
) -> Response {
    // file I/O sincrono: fuori dal runtime async
    let result = tokio::task::spawn_blocking(move || service.submit(payload)).await;

    match result {
        Ok(Ok(_record)) => Json(SubmitResponse {
            success: true,
            message: "Request saved and Excel updated".to_string(),
        })
        .into_response(),
        Ok(Err(e)) => {
            error(format!("Error saving request: {e}"));
            failure()
        }
        Err(e) => {
            error(format!("Submission task failed: {e}"));
            failure()
        }
    }
}

fn failure() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "Failed to process request".to_string(),
        }),
    )
        .into_response()
}
