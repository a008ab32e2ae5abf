//! # Solace HTTP Server Implementation
//!
//! File: cli/src/commands/srv/server_logic.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/solace
//!
//! ## Overview
//!
//! Runs the chat endpoint for `solace srv`:
//! - Port availability checking with automatic fallback
//! - Request tracing and optional permissive CORS
//! - Graceful shutdown on Ctrl+C or SIGTERM
//!
//! ## Architecture
//!
//! 1. Find an available port, starting at the configured one
//! 2. Build the shared session store and the Axum router
//! 3. Print connection information
//! 4. Serve until a shutdown signal arrives
//!
use super::handlers::{self, AppState, SharedState};
use super::sessions::SessionStore;
use crate::core::config::ServerSettings;
use crate::core::error::{Result, SolaceError};
use crate::responder::ResponderOptions;
use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, warn, Level};

const MAX_PORT_ATTEMPTS: u8 = 10;

/// # Run HTTP Server (`run_server`)
///
/// Binds the first free port at or after `settings.port`, then serves the
/// chat API until Ctrl+C or SIGTERM.
///
/// ## Errors
///
/// - No free port within `MAX_PORT_ATTEMPTS` consecutive ports
/// - The listener cannot be bound
/// - The server fails while running
pub async fn run_server(settings: ServerSettings, options: ResponderOptions) -> Result<()> {
    let addr = find_available_port(settings.host, settings.port, MAX_PORT_ATTEMPTS).await?;

    let state = build_state(&settings, options);
    let app = create_app(state, settings.enable_cors);

    println!("\n=================================================================");
    println!("💬 {} chat endpoint", settings.bot_name);
    println!("🌐 Local URL:         http://localhost:{}/api/chat", addr.port());
    println!("⚙️  Binding to address: {}", addr);
    println!("👥 Max sessions:      {}", settings.max_sessions);
    println!("🔒 CORS enabled:      {}", settings.enable_cors);
    println!("=================================================================\n");

    info!("Starting chat server on {}", addr);
    println!("Server starting! Press Ctrl+C to stop.");

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind TCP listener to address {}", addr))?;

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    println!("\nServer shutdown complete.");
    Ok(())
}

/// Builds the state shared by all handlers.
pub fn build_state(settings: &ServerSettings, options: ResponderOptions) -> SharedState {
    Arc::new(AppState {
        bot_name: settings.bot_name.clone(),
        sessions: Mutex::new(SessionStore::new(options, settings.max_sessions)),
    })
}

/// Resolves when Ctrl+C or (on Unix) SIGTERM is received. Open sessions are
/// in memory only and end with the process.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Cannot listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Ctrl+C received, closing the chat endpoint");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                info!("SIGTERM received, closing the chat endpoint");
            }
            Err(e) => {
                error!("Cannot listen for SIGTERM, only Ctrl+C will stop the server: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// Returns the first bindable address among `max_attempts` consecutive ports
/// from `start_port`. The range stops early at port 65535.
async fn find_available_port(
    host: std::net::IpAddr,
    start_port: u16,
    max_attempts: u8,
) -> Result<SocketAddr> {
    let candidates = (0..u16::from(max_attempts)).map_while(|offset| start_port.checked_add(offset));

    for port in candidates {
        let addr = SocketAddr::new(host, port);
        match TcpListener::bind(addr).await {
            Ok(_probe) => {
                if port != start_port {
                    info!("Port {} is busy, serving chat on port {} instead", start_port, port);
                }
                return Ok(addr);
            }
            Err(e) => warn!("Port {} on {} is not available for chat: {}", port, host, e),
        }
    }

    Err(SolaceError::Server(format!(
        "No free port for the chat endpoint on {} in {}..={} ({} attempts)",
        host,
        start_port,
        start_port.saturating_add(u16::from(max_attempts).saturating_sub(1)),
        max_attempts
    ))
    .into())
}

/// Builds the router with tracing and (optionally) permissive CORS.
pub fn create_app(state: SharedState, enable_cors: bool) -> Router {
    let cors_layer = if enable_cors {
        info!("CORS middleware enabled (permissive).");
        CorsLayer::permissive()
    } else {
        info!("CORS middleware disabled.");
        CorsLayer::new()
    };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::default())
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/api/chat", post(handlers::chat))
        .route("/api/welcome", get(handlers::welcome))
        .route("/health", get(handlers::health))
        .with_state(state)
        .layer(ServiceBuilder::new().layer(trace_layer).layer(cors_layer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responder::{bank, Category};
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use std::net::Ipv4Addr;
    use tower::ServiceExt;

    fn app() -> Router {
        let settings = ServerSettings {
            max_sessions: 4,
            bot_name: "Test Bot".into(),
            ..ServerSettings::default()
        };
        create_app(build_state(&settings, ResponderOptions::deterministic()), true)
    }

    async fn post_chat(app: Router, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        post_raw(app, Some("application/json"), body.to_string()).await
    }

    async fn post_raw(
        app: Router,
        content_type: Option<&str>,
        body: impl Into<Body>,
    ) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::builder().method("POST").uri("/api/chat");
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        let request = builder.body(body.into()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_chat_returns_reply_and_session() {
        let (status, json) = post_chat(app(), serde_json::json!({"message": "hi"})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["category"], "greeting");
        assert_eq!(json["matched_terms"], "greeting");
        assert_eq!(json["text"], bank::replies(Category::Greeting)[0]);
        assert!(!json["session_id"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_chat_rejects_empty_message() {
        for body in [
            serde_json::json!({"message": "   "}),
            serde_json::json!({}),
        ] {
            let (status, json) = post_chat(app(), body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(json["error"], "Empty message");
        }
    }

    #[tokio::test]
    async fn test_chat_unreadable_bodies_get_json_error() {
        let cases = [
            (None, r#"{"message": "hi"}"#),
            (Some("text/plain"), "hello there"),
            (Some("application/json"), "not json"),
            (Some("application/json"), r#"{"message": 5}"#),
            (Some("application/json"), ""),
        ];
        for (content_type, body) in cases {
            let (status, json) = post_raw(app(), content_type, body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{:?} {:?}", content_type, body);
            assert_eq!(json, serde_json::json!({"error": "Empty message"}));
        }
    }

    #[tokio::test]
    async fn test_chat_rejects_oversized_session_id() {
        let long_id = "x".repeat(129);
        let (status, json) = post_chat(
            app(),
            serde_json::json!({"message": "hi", "session_id": long_id}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Invalid session id");
    }

    #[tokio::test]
    async fn test_session_keeps_rotation() {
        let app = app();
        let greetings = bank::replies(Category::Greeting);
        let body = serde_json::json!({"message": "hello", "session_id": "s1"});

        let (_, first) = post_chat(app.clone(), body.clone()).await;
        let (_, second) = post_chat(app.clone(), body).await;
        let (_, other) = post_chat(
            app,
            serde_json::json!({"message": "hello", "session_id": "s2"}),
        )
        .await;

        assert_eq!(first["text"], greetings[0]);
        assert_eq!(second["text"], greetings[1]);
        assert_eq!(other["text"], greetings[0]);
        assert_eq!(other["session_id"], "s2");
    }

    #[tokio::test]
    async fn test_chat_crisis_reply() {
        let (status, json) = post_chat(
            app(),
            serde_json::json!({"message": "I can't go on, any advice?"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["category"], "crisis");
        assert_eq!(json["matched_terms"], "crisis");
    }

    #[tokio::test]
    async fn test_welcome_and_health() {
        let response = app()
            .oneshot(Request::get("/api/welcome").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["user"], "Test Bot");
        assert_eq!(json["message"], bank::WELCOME_MESSAGE);

        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"ok");
    }

    #[tokio::test]
    async fn test_find_available_port_uses_requested_port() -> Result<()> {
        let host = Ipv4Addr::LOCALHOST.into();
        let addr = find_available_port(host, 50510, 3).await?;
        assert_eq!(addr, SocketAddr::new(host, 50510));
        Ok(())
    }

    #[tokio::test]
    async fn test_find_available_port_skips_busy_port() -> Result<()> {
        let host = Ipv4Addr::LOCALHOST.into();
        let busy = TcpListener::bind(SocketAddr::new(host, 0)).await?;
        let busy_port = busy.local_addr()?.port();

        match find_available_port(host, busy_port, 3).await {
            Ok(addr) => assert!(addr.port() > busy_port && addr.port() <= busy_port.saturating_add(2)),
            // The neighbours of an ephemeral port may be taken too, or past 65535.
            Err(e) => assert!(e.to_string().contains("No free port for the chat endpoint")),
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_find_available_port_all_busy_reports_range() -> Result<()> {
        let host = Ipv4Addr::LOCALHOST.into();
        let busy = TcpListener::bind(SocketAddr::new(host, 0)).await?;
        let busy_port = busy.local_addr()?.port();

        let err = find_available_port(host, busy_port, 1).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            format!(
                "Server error: No free port for the chat endpoint on 127.0.0.1 in {0}..={0} (1 attempts)",
                busy_port
            )
        );
        Ok(())
    }
}
