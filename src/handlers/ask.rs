// POST /ask handler

use bytes::Bytes;
use std::convert::Infallible;
use tracing::Instrument;
use uuid::Uuid;
use warp::http::StatusCode;
use warp::Reply;

use super::AppState;
use crate::error::{json_reply, ApiError};
use crate::llm::AnswerRequest;
use crate::models::{AskRequest, AskResponse, QUESTION_REQUIRED};

pub async fn ask_handler(state: AppState, body: Bytes) -> Result<warp::reply::Response, Infallible> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("ask", %request_id);

    match ask(&state, &body).instrument(span).await {
        Ok(response) => Ok(json_reply(&response, StatusCode::OK)),
        Err(err) => Ok(err.into_response()),
    }
}

async fn ask(state: &AppState, body: &[u8]) -> Result<AskResponse, ApiError> {
    let question = parse_question(body)?;

    let credential = state.config.api_key().inspect_err(|err| {
        tracing::error!(error = %err, "refusing to call provider");
    })?;

    let model = state.config.resolve_model().to_string();
    let request = AnswerRequest {
        model: model.clone(),
        instructions: state.config.instructions.clone(),
        input: question,
        tools: state.config.tools.clone(),
    };

    tracing::info!(%model, tools = ?request.tools, "asking provider");
    let answer = state
        .provider
        .answer(credential, request)
        .await
        .inspect_err(|err| tracing::warn!(error = %err, "provider call failed"))?;

    tracing::info!(%model, answer_len = answer.text.len(), "provider answered");
    Ok(AskResponse {
        answer: answer.text,
        model,
    })
}

/// Pull a non-blank `question` out of a raw JSON body
///
/// Any body that is not a JSON object with a string `question` counts as
/// missing the field.
fn parse_question(body: &[u8]) -> Result<String, ApiError> {
    let missing = || ApiError::Validation(QUESTION_REQUIRED.to_string());

    let request: AskRequest = serde_json::from_slice(body).map_err(|_| missing())?;
    let question = request.question.as_deref().map(str::trim).unwrap_or("");
    if question.is_empty() {
        return Err(missing());
    }
    Ok(question.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_question_trims() {
        assert_eq!(
            parse_question(br#"{"question":"  What is 2+2? "}"#).unwrap(),
            "What is 2+2?"
        );
    }

    #[test]
    fn test_parse_question_rejects_bad_bodies() {
        let bodies: [&[u8]; 8] = [
            b"",
            b"not json",
            b"[]",
            b"{}",
            br#"{"question":""}"#,
            br#"{"question":"   "}"#,
            br#"{"question":null}"#,
            br#"{"question":["a"]}"#,
        ];
        for body in bodies {
            let err = parse_question(body).unwrap_err();
            assert!(matches!(err, ApiError::Validation(ref m) if m == QUESTION_REQUIRED));
        }
    }

    #[test]
    fn test_parse_question_ignores_extra_fields() {
        assert_eq!(
            parse_question(br#"{"question":"hi","temperature":0.2}"#).unwrap(),
            "hi"
        );
    }
}
