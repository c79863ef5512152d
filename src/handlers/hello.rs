// GET /hello handler

use std::convert::Infallible;
use warp::http::StatusCode;
use warp::Reply;

use crate::error::{json_reply, ApiError};
use crate::models::{HelloQuery, HelloResponse, NAME_REQUIRED};

const DEFAULT_NAME: &str = "World";

pub async fn hello_handler(
    params: Vec<(String, String)>,
) -> Result<warp::reply::Response, Infallible> {
    let query = HelloQuery::from_pairs(params);
    match greet(query.name.as_deref()) {
        Ok(response) => Ok(json_reply(&response, StatusCode::OK)),
        Err(err) => Ok(err.into_response()),
    }
}

/// Build the greeting; the default applies only when `name` is absent
fn greet(name: Option<&str>) -> Result<HelloResponse, ApiError> {
    let name = name.unwrap_or(DEFAULT_NAME).trim();
    if name.is_empty() {
        return Err(ApiError::Validation(NAME_REQUIRED.to_string()));
    }
    Ok(HelloResponse {
        message: format!("Hello {}", name),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greet_default() {
        assert_eq!(greet(None).unwrap().message, "Hello World");
    }

    #[test]
    fn test_greet_trims() {
        assert_eq!(greet(Some("  Ada \t")).unwrap().message, "Hello Ada");
    }

    #[test]
    fn test_greet_blank_is_rejected() {
        for name in ["", " ", "\n\t"] {
            let err = greet(Some(name)).unwrap_err();
            assert!(matches!(err, ApiError::Validation(ref m) if m == NAME_REQUIRED));
        }
    }
}
