//! HTTP server for the ingest endpoint.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::error::Result;
use crate::storage::TextStore;

use super::decode::extract_text;

/// Application state shared across routes.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The injected store every request appends through.
    pub store: Arc<TextStore>,
}

/// Build the ingest router over the given store.
#[must_use]
pub fn router(store: Arc<TextStore>) -> Router {
    Router::new()
        .route("/upload", post(ingest_text))
        .with_state(AppState { store })
}

/// Handler for `POST /upload`.
///
/// Decodes the body's `text` field, appends it to the store, and echoes
/// it back. Absent or malformed input is coerced to the empty string and
/// the request still succeeds; only a store failure produces an error
/// status.
pub async fn ingest_text(State(state): State<AppState>, body: String) -> (StatusCode, String) {
    let text = extract_text(&body).unwrap_or_default();
    info!(text = %text, "ingest record received");

    match state.store.append(&text).await {
        Ok(()) => (StatusCode::OK, text),
        Err(e) => {
            error!("failed to append record: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, String::new())
        }
    }
}

/// Start the ingest server on the given address.
///
/// Runs until the process is terminated.
///
/// # Errors
///
/// Returns an error if binding or serving fails.
pub async fn serve(addr: SocketAddr, store: Arc<TextStore>) -> Result<()> {
    let app = router(store);

    info!("Ingest endpoint listening on {}", addr);
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    fn temp_store_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "snapnote_ingest_{}_{}.txt",
            name,
            std::process::id()
        ))
    }

    async fn test_state(path: &Path) -> AppState {
        let _ = std::fs::remove_file(path);
        AppState {
            store: Arc::new(TextStore::open(path).await.unwrap()),
        }
    }

    async fn read_store(path: &Path) -> String {
        tokio::fs::read_to_string(path).await.unwrap()
    }

    #[tokio::test]
    async fn test_ingest_valid_text() {
        let path = temp_store_path("valid");
        let state = test_state(&path).await;

        let (status, body) =
            ingest_text(State(state), r#"{"text": "hello"}"#.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "hello");
        assert_eq!(read_store(&path).await, "\nhello");

        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn test_ingest_missing_text_appends_empty_record() {
        let path = temp_store_path("missing");
        let state = test_state(&path).await;

        let (status, body) = ingest_text(State(state), r#"{"other": 1}"#.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "");
        assert_eq!(read_store(&path).await, "\n");

        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn test_ingest_malformed_body_still_succeeds() {
        let path = temp_store_path("malformed");
        let state = test_state(&path).await;

        let (status, body) = ingest_text(State(state), "not json".to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "");
        assert_eq!(read_store(&path).await, "\n");

        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn test_ingest_sequential_requests_append_in_order() {
        let path = temp_store_path("sequential");
        let state = test_state(&path).await;

        let (_, body1) =
            ingest_text(State(state.clone()), r#"{"text": "line1"}"#.to_string()).await;
        let (_, body2) = ingest_text(State(state), r#"{"text": "line2"}"#.to_string()).await;

        assert_eq!(body1, "line1");
        assert_eq!(body2, "line2");
        assert_eq!(read_store(&path).await, "\nline1\nline2");

        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn test_ingest_repeated_payload_appends_every_time() {
        let path = temp_store_path("repeated");
        let state = test_state(&path).await;

        for _ in 0..3 {
            let (status, body) =
                ingest_text(State(state.clone()), r#"{"text": "same"}"#.to_string()).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, "same");
        }

        assert_eq!(read_store(&path).await, "\nsame\nsame\nsame");

        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn test_router_builds() {
        let path = temp_store_path("router");
        let state = test_state(&path).await;

        let _router = router(state.store);

        let _ = std::fs::remove_file(&path);
    }
}
