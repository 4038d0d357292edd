//! HTTP routes.
//!
//! `POST /receipts/process` accepts a receipt and returns its identifier;
//! `GET /receipts/{id}/points` scores a stored receipt.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use receipt_points::store::{IdGenerator, Store};
use receipt_points::{
    PointsBreakdown, ProcessorError, Receipt, ReceiptId, ReceiptProcessor, RejectionReason,
};
use serde::Serialize;
use thiserror::Error;

/// Response to a processed receipt.
#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    pub id: ReceiptId,
}

/// Points awarded to a stored receipt.
#[derive(Debug, Serialize)]
pub struct PointsResponse {
    pub points: u64,
}

/// Per-rule points plus their total.
#[derive(Debug, Serialize)]
pub struct BreakdownResponse {
    #[serde(flatten)]
    pub rules: PointsBreakdown,
    pub total: u64,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Error body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<RejectionReason>,
}

/// Everything a handler can fail with.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The body was not a receipt.
    #[error("{0}")]
    MalformedBody(String),

    #[error(transparent)]
    Processor(#[from] ProcessorError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::MalformedBody(error) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error,
                    reason: None,
                },
            ),
            ApiError::Processor(ProcessorError::Validation(e)) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: e.to_string(),
                    reason: Some(e.reason()),
                },
            ),
            ApiError::Processor(ProcessorError::ReceiptNotFound(_)) => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    error: "receipt not found".to_string(),
                    reason: None,
                },
            ),
            ApiError::Processor(e) => {
                tracing::error!("request failed: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: e.to_string(),
                        reason: None,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Build the application router around a shared processor.
pub fn router<S, G>(processor: Arc<ReceiptProcessor<S, G>>) -> Router
where
    S: Store + 'static,
    G: IdGenerator + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/receipts/process", post(process_receipt::<S, G>))
        .route("/receipts/{id}/points", get(get_points::<S, G>))
        .route("/receipts/{id}/breakdown", get(get_breakdown::<S, G>))
        .with_state(processor)
}

/// GET /health
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// POST /receipts/process
async fn process_receipt<S: Store, G: IdGenerator>(
    State(processor): State<Arc<ReceiptProcessor<S, G>>>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> Result<Json<ProcessResponse>, ApiError> {
    let Json(receipt) = payload?;
    let id = processor.process(receipt).await?;
    Ok(Json(ProcessResponse { id }))
}

/// GET /receipts/{id}/points
async fn get_points<S: Store, G: IdGenerator>(
    State(processor): State<Arc<ReceiptProcessor<S, G>>>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ApiError> {
    let points = processor.points(&ReceiptId::from(id)).await?;
    Ok(Json(PointsResponse { points }))
}

/// GET /receipts/{id}/breakdown
async fn get_breakdown<S: Store, G: IdGenerator>(
    State(processor): State<Arc<ReceiptProcessor<S, G>>>,
    Path(id): Path<String>,
) -> Result<Json<BreakdownResponse>, ApiError> {
    let rules = processor.breakdown(&ReceiptId::from(id)).await?;
    Ok(Json(BreakdownResponse {
        total: rules.total(),
        rules,
    }))
}
