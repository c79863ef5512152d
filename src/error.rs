//! Errors surfaced by the HTTP layer and their JSON shapes

use std::convert::Infallible;
use thiserror::Error;
use warp::http::StatusCode;
use warp::reply::Response;
use warp::{Rejection, Reply};

use crate::llm::LlmError;
use crate::models::{ErrorResponse, QUESTION_REQUIRED};

pub const PROVIDER_FAILURE: &str = "OpenAI request failed";

/// Every way a request can fail after routing
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or empty input (400)
    #[error("{0}")]
    Validation(String),

    /// Service not set up to serve the request (500)
    #[error("{0}")]
    Configuration(String),

    /// Upstream call failed (502)
    #[error("OpenAI request failed: {0}")]
    Provider(#[from] LlmError),
}

/// Declared request body exceeds the accepted size
#[derive(Debug)]
pub struct BodyTooLarge;

impl warp::reject::Reject for BodyTooLarge {}

/// Request body could not be read off the connection
#[derive(Debug)]
pub struct BodyUnreadable;

impl warp::reject::Reject for BodyUnreadable {}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Provider(_) => StatusCode::BAD_GATEWAY,
        }
    }

    pub fn body(&self) -> ErrorResponse {
        match self {
            ApiError::Validation(message) | ApiError::Configuration(message) => {
                ErrorResponse::new(message.clone())
            }
            ApiError::Provider(err) => ErrorResponse::with_details(PROVIDER_FAILURE, err.to_string()),
        }
    }
}

impl Reply for ApiError {
    fn into_response(self) -> Response {
        json_reply(&self.body(), self.status())
    }
}

/// Serialize `body` as JSON with the given status
pub fn json_reply<T: serde::Serialize>(body: &T, status: StatusCode) -> Response {
    warp::reply::with_status(warp::reply::json(body), status).into_response()
}

/// Turn warp's own rejections into JSON bodies
pub async fn handle_rejection(err: Rejection) -> Result<Response, Infallible> {
    let (status, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Not found")
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
    } else if err.find::<BodyTooLarge>().is_some() {
        (StatusCode::PAYLOAD_TOO_LARGE, "Request body too large")
    } else if err.find::<BodyUnreadable>().is_some() {
        (StatusCode::BAD_REQUEST, QUESTION_REQUIRED)
    } else {
        tracing::error!(rejection = ?err, "unhandled rejection");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    };

    Ok(json_reply(&ErrorResponse::new(message), status))
}
