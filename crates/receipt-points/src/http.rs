//! HTTP boundary: maps the two request contracts onto the service.
//!
//! - `POST /receipts/process` -> `{"id": ...}`
//! - `GET /receipts/{id}/points` -> `{"points": ...}`
//!
//! Every failure is answered with `{"error": ...}` and a status derived from
//! the error kind; there is no in-band sentinel.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use receipt_points_core::ReceiptInput;
use receipt_points_store::ReceiptStore;
use serde::{Deserialize, Serialize};

use crate::error::ServiceError;
use crate::service::ReceiptService;

/// Path of the create operation.
pub const PROCESS_PATH: &str = "/receipts/process";
/// Path of the points lookup operation.
pub const POINTS_PATH: &str = "/receipts/{id}/points";

/// Body returned by a successful create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdResponse {
    pub id: String,
}

/// Body returned by a successful points lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}

/// Body returned for every failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Errors surfaced by the HTTP layer.
#[derive(Debug)]
pub enum ApiError {
    /// The body was not JSON, or not shaped like a receipt.
    MalformedBody(JsonRejection),
    /// The service refused the request.
    Service(ServiceError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Self::Service(ServiceError::Validation(_)) => StatusCode::BAD_REQUEST,
            Self::Service(ServiceError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Service(ServiceError::Store(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::MalformedBody(rejection) => {
                format!("The receipt is invalid. {}", rejection.body_text())
            }
            Self::Service(error) => error.to_string(),
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(error: ServiceError) -> Self {
        Self::Service(error)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedBody(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.message(), "request failed");
        } else if let Self::MalformedBody(rejection) = &self {
            tracing::info!(%rejection, "malformed receipt body");
        }
        (status, Json(ErrorResponse { error: self.message() })).into_response()
    }
}

/// Build the router over a shared service.
pub fn router<S>(service: Arc<ReceiptService<S>>) -> Router
where
    S: ReceiptStore + 'static,
{
    Router::new()
        .route(PROCESS_PATH, post(process_receipt::<S>))
        .route(POINTS_PATH, get(get_points::<S>))
        .with_state(service)
}

async fn process_receipt<S>(
    State(service): State<Arc<ReceiptService<S>>>,
    body: Result<Json<ReceiptInput>, JsonRejection>,
) -> Result<Json<IdResponse>, ApiError>
where
    S: ReceiptStore + 'static,
{
    let Json(input) = body?;
    let id = service.process_receipt(input).await?;
    Ok(Json(IdResponse { id: id.to_string() }))
}

async fn get_points<S>(
    State(service): State<Arc<ReceiptService<S>>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<PointsResponse>, ApiError>
where
    S: ReceiptStore + 'static,
{
    // A segment that does not decode to text cannot name a stored receipt.
    let Path(id) = id.map_err(|rejection| {
        tracing::debug!(%rejection, "undecodable receipt id");
        ServiceError::NotFound(rejection.body_text())
    })?;
    let points = service.get_points(&id).await?;
    Ok(Json(PointsResponse { points }))
}
