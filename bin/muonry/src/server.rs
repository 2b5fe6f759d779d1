//! Static file server for the built site.

use std::path::Path;

use axum::{Router, routing::get};
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

/// Create the site router.
///
/// Files under `dist_dir` are served as-is. Any other path gets
/// `index.html` so the client router can resolve deep links such as `/about`.
pub fn create_router(dist_dir: &Path) -> Router {
    let index = dist_dir.join("index.html");

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(ServeDir::new(dist_dir).fallback(ServeFile::new(index)))
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> &'static str {
    "ok"
}

/// Resolves when Ctrl+C is received.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;

    const INDEX: &str = "<!DOCTYPE html><html><body></body></html>";

    fn site() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(dir.path().join("index.html"), INDEX).expect("write index");
        std::fs::write(dir.path().join("main.css"), "body { margin: 0; }").expect("write css");
        dir
    }

    async fn get_body(router: Router, uri: &str) -> (StatusCode, String) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_serves_index_at_root() {
        let dir = site();
        let (status, body) = get_body(create_router(dir.path()), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX);
    }

    #[tokio::test]
    async fn test_serves_static_assets() {
        let dir = site();
        let (status, body) = get_body(create_router(dir.path()), "/main.css").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("margin"));
    }

    #[tokio::test]
    async fn test_deep_links_fall_back_to_index() {
        let dir = site();
        let (status, body) = get_body(create_router(dir.path()), "/about").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX);
    }

    #[tokio::test]
    async fn test_healthz() {
        let dir = site();
        let (status, body) = get_body(create_router(dir.path()), "/healthz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }
}
