// Request and response bodies

use serde::{Deserialize, Serialize};

pub const NAME_REQUIRED: &str = "Query parameter 'name' is required.";
pub const QUESTION_REQUIRED: &str = "JSON body field 'question' is required.";

// GET /
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

// GET /hello
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HelloQuery {
    pub name: Option<String>,
}

impl HelloQuery {
    /// Keep the first `name` when the parameter repeats
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let name = pairs
            .into_iter()
            .find(|(key, _)| key == "name")
            .map(|(_, value)| value);
        Self { name }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelloResponse {
    pub message: String,
}

// POST /ask
#[derive(Debug, Clone, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
    pub model: String,
}

// Any failure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}
