// GET / handler

use std::convert::Infallible;
use warp::http::StatusCode;

use crate::error::json_reply;
use crate::models::HealthResponse;

pub async fn health_handler() -> Result<warp::reply::Response, Infallible> {
    Ok(json_reply(&HealthResponse::ok(), StatusCode::OK))
}
