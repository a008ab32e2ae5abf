//! # Solace HTTP Handlers
//!
//! File: cli/src/commands/srv/handlers.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/solace
//!
//! ## Overview
//!
//! Request handlers for the chat endpoint:
//! - `POST /api/chat`: `{"message": "...", "session_id": "..."}` → reply JSON
//! - `GET /api/welcome`: the opening line a chat front-end shows first
//! - `GET /health`: liveness probe
//!
//! The chat body is read leniently: a non-JSON content type, a body that is
//! not JSON, or a `message` that is not a string all count as no message.
//! Empty messages are rejected here with `400 {"error": "Empty message"}`,
//! before the responder is involved. Callers that don't send a session id get
//! a fresh one back and should send it with their next message.
//!
use super::sessions::SessionStore;
use crate::responder::bank::WELCOME_MESSAGE;
use crate::responder::Reply;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    Json,
};
use serde::Serialize;
use std::sync::{Arc, Mutex};
use tracing::{info, warn};
use uuid::Uuid;

/// Longest accepted caller-supplied session id.
const MAX_SESSION_ID_LEN: usize = 128;

/// Shared state for all handlers.
pub struct AppState {
    pub bot_name: String,
    pub sessions: Mutex<SessionStore>,
}

pub type SharedState = Arc<AppState>;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ChatRequest {
    pub message: Option<String>,
    pub session_id: Option<String>,
}

impl ChatRequest {
    /// Reads the request, ignoring bodies not sent as JSON.
    pub fn from_request(headers: &HeaderMap, body: &[u8]) -> Self {
        if is_json_content_type(headers) {
            Self::from_body(body)
        } else {
            Self::default()
        }
    }

    /// Reads `message` and `session_id` from a JSON object body. Anything
    /// unreadable (not JSON, not an object, non-string fields) is left unset.
    pub fn from_body(body: &[u8]) -> Self {
        let Ok(serde_json::Value::Object(fields)) = serde_json::from_slice::<serde_json::Value>(body) else {
            return Self::default();
        };
        let text_field = |name: &str| fields.get(name).and_then(|v| v.as_str()).map(str::to_string);
        Self {
            message: text_field("message"),
            session_id: text_field("session_id"),
        }
    }
}

/// `application/json` or any `application/*+json` type, parameters ignored.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let mime = value.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    #[serde(flatten)]
    pub reply: Reply,
    pub session_id: String,
}

#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub user: String,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn bad_request(message: &str) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

/// `POST /api/chat`
pub async fn chat(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ChatResponse>, ApiError> {
    let request = ChatRequest::from_request(&headers, &body);
    let message = request.message.unwrap_or_default();
    let message = message.trim();
    if message.is_empty() {
        warn!("Rejected chat request with empty message");
        return Err(bad_request("Empty message"));
    }

    let session_id = match request.session_id.filter(|id| !id.trim().is_empty()) {
        Some(id) if id.len() > MAX_SESSION_ID_LEN => {
            warn!("Rejected chat request with oversized session id");
            return Err(bad_request("Invalid session id"));
        }
        Some(id) => id,
        None => {
            let id = Uuid::new_v4().to_string();
            info!("Assigned new session id {}", id);
            id
        }
    };

    let (reply, active_sessions) = {
        let mut sessions = state.sessions.lock().unwrap_or_else(|poisoned| {
            warn!("Session store lock was poisoned; continuing with its last state");
            poisoned.into_inner()
        });
        let reply = sessions.respond(&session_id, message);
        (reply, sessions.len())
    };
    info!(
        "Session {} reply category {} (matched: {}, {} active sessions)",
        session_id, reply.category, reply.matched_terms, active_sessions
    );

    Ok(Json(ChatResponse { reply, session_id }))
}

/// `GET /api/welcome`
pub async fn welcome(State(state): State<SharedState>) -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        user: state.bot_name.clone(),
        message: WELCOME_MESSAGE,
    })
}

/// `GET /health`
pub async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_reads_string_fields() {
        let request = ChatRequest::from_body(br#"{"message": "hi", "session_id": "s1", "extra": 1}"#);
        assert_eq!(request.message.as_deref(), Some("hi"));
        assert_eq!(request.session_id.as_deref(), Some("s1"));
    }

    #[test]
    fn test_chat_request_unreadable_bodies_are_empty() {
        let bodies: [&[u8]; 5] = [b"", b"not json", b"[1, 2]", b"\"hi\"", br#"{"message": 5}"#];
        for body in bodies {
            assert_eq!(ChatRequest::from_body(body), ChatRequest::default(), "{:?}", body);
        }
    }

    #[test]
    fn test_json_content_types() {
        let with = |value: &'static str| {
            let mut headers = HeaderMap::new();
            headers.insert(header::CONTENT_TYPE, header::HeaderValue::from_static(value));
            headers
        };
        assert!(is_json_content_type(&with("application/json")));
        assert!(is_json_content_type(&with("Application/JSON; charset=utf-8")));
        assert!(is_json_content_type(&with("application/vnd.api+json")));
        assert!(!is_json_content_type(&with("text/plain")));
        assert!(!is_json_content_type(&HeaderMap::new()));

        let body = br#"{"message": "hi"}"#;
        assert_eq!(ChatRequest::from_request(&with("text/plain"), body), ChatRequest::default());
        assert_eq!(
            ChatRequest::from_request(&with("application/json"), body).message.as_deref(),
            Some("hi")
        );
    }

    #[test]
    fn test_chat_request_ignores_non_string_session_id() {
        let request = ChatRequest::from_body(br#"{"message": "hi", "session_id": 42}"#);
        assert_eq!(request.message.as_deref(), Some("hi"));
        assert_eq!(request.session_id, None);
    }
}
