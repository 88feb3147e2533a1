//! Dev server module for gruvsite.
//!
//! Serves the project over plain HTTP for local development. Static
//! paths are answered from the assets directory first and the project
//! root second; a single-segment path like `/about` falls back to
//! `about.html` in the project root, mirroring how the site is linked
//! internally.
//!
use std::{path::PathBuf, sync::Arc};

use axum::{
    Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

use crate::config::CONFIG;

/// Directories the server reads from, shared across requests
struct AppState {
    /// Checked first for page candidates
    assets_dir: PathBuf,
    /// Checked second, also hosts the `.html` pages
    root_dir: PathBuf,
}

/// Start the dev server on the configured port and serve until killed
pub async fn run() {
    let app = router(&CONFIG.assets_dir, &CONFIG.root_dir);

    let addr = format!("0.0.0.0:{}", CONFIG.port);
    let listener = TcpListener::bind(addr).await.unwrap();

    println!("🌐 Server is running on port {}", CONFIG.port);

    axum::serve(listener, app).await.unwrap();
}

/// Build the router for the given directories.
///
/// Split out from [`run`] so tests can drive it in-process without
/// binding a socket.
pub fn router(assets_dir: impl Into<PathBuf>, root_dir: impl Into<PathBuf>) -> Router {
    let assets_dir = assets_dir.into();
    let root_dir = root_dir.into();

    // Unmatched paths (multi-segment, or `/` itself) go straight to the
    // static directories, assets first then project root. ServeDir's
    // default index.html behavior covers `/`.
    let static_dirs = ServeDir::new(&assets_dir).fallback(ServeDir::new(&root_dir));

    let state = Arc::new(AppState {
        assets_dir,
        root_dir,
    });

    Router::new()
        .route("/{page}", get(page_handler))
        .fallback_service(static_dirs)
        .with_state(state)
}

/// Resolve a single-segment path to a file on disk.
///
/// Candidates are tried in the same order the static directories are
/// mounted: the raw name under the assets directory, then under the
/// project root, then `{page}.html` under the project root. First hit
/// wins; no hit is a plain 404.
async fn page_handler(
    State(state): State<Arc<AppState>>,
    Path(page): Path<String>,
) -> Response {
    // Path params arrive percent-decoded, so a crafted segment can
    // smuggle separators back in. Dotfiles stay hidden as well.
    if page.starts_with('.') || page.contains(['/', '\\']) {
        return StatusCode::NOT_FOUND.into_response();
    }

    let candidates = [
        state.assets_dir.join(&page),
        state.root_dir.join(&page),
        state.root_dir.join(format!("{page}.html")),
    ];

    for path in &candidates {
        if let Ok(bytes) = tokio::fs::read(path).await {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            return ([(header::CONTENT_TYPE, mime.as_ref())], bytes).into_response();
        }
    }

    StatusCode::NOT_FOUND.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, header::CONTENT_TYPE, response::Parts};
    use http_body_util::BodyExt;
    use std::fs;
    use tempfile::TempDir;
    use tower::util::ServiceExt;

    fn test_site() -> (Router, TempDir, TempDir) {
        let assets = TempDir::new().unwrap();
        let root = TempDir::new().unwrap();
        let app = router(assets.path(), root.path());
        (app, assets, root)
    }

    async fn simulate(app: Router, uri: &str) -> (Parts, Vec<u8>) {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let res = app.oneshot(req).await.unwrap();
        let (head, body) = res.into_parts();
        let body = body.collect().await.unwrap().to_bytes().to_vec();
        (head, body)
    }

    #[tokio::test]
    async fn page_route_resolves_html() {
        let (app, _assets, root) = test_site();
        fs::write(root.path().join("about.html"), "<h1>About</h1>").unwrap();

        let (head, body) = simulate(app, "/about").await;

        assert_eq!(head.status, 200);
        assert_eq!(String::from_utf8(body).unwrap(), "<h1>About</h1>");
        assert_eq!(head.headers[CONTENT_TYPE], "text/html");
    }

    #[tokio::test]
    async fn missing_page_is_not_found() {
        let (app, _assets, _root) = test_site();

        let (head, body) = simulate(app, "/missing").await;

        assert_eq!(head.status, 404);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn assets_dir_is_checked_first() {
        let (app, assets, root) = test_site();
        fs::write(assets.path().join("site.js"), "from assets").unwrap();
        fs::write(root.path().join("site.js"), "from root").unwrap();

        let (head, body) = simulate(app, "/site.js").await;

        assert_eq!(head.status, 200);
        assert_eq!(String::from_utf8(body).unwrap(), "from assets");
    }

    #[tokio::test]
    async fn nested_asset_paths_are_served() {
        let (app, assets, _root) = test_site();
        fs::create_dir(assets.path().join("css")).unwrap();
        fs::write(assets.path().join("css/site.css"), "body { margin: 0 }").unwrap();

        let (head, body) = simulate(app, "/css/site.css").await;

        assert_eq!(head.status, 200);
        assert_eq!(String::from_utf8(body).unwrap(), "body { margin: 0 }");
        assert_eq!(head.headers[CONTENT_TYPE], "text/css");
    }

    #[tokio::test]
    async fn root_dir_serves_plain_files() {
        let (app, _assets, root) = test_site();
        fs::write(root.path().join("robots.txt"), "User-agent: *").unwrap();

        let (head, body) = simulate(app, "/robots.txt").await;

        assert_eq!(head.status, 200);
        assert_eq!(String::from_utf8(body).unwrap(), "User-agent: *");
    }

    #[tokio::test]
    async fn exact_file_beats_html_resolution() {
        let (app, _assets, root) = test_site();
        fs::write(root.path().join("about"), "raw file").unwrap();
        fs::write(root.path().join("about.html"), "<h1>About</h1>").unwrap();

        let (head, body) = simulate(app, "/about").await;

        assert_eq!(head.status, 200);
        assert_eq!(String::from_utf8(body).unwrap(), "raw file");
    }

    #[tokio::test]
    async fn index_html_served_at_root() {
        let (app, _assets, root) = test_site();
        fs::write(root.path().join("index.html"), "<h1>Home</h1>").unwrap();

        let (head, body) = simulate(app, "/").await;

        assert_eq!(head.status, 200);
        assert_eq!(String::from_utf8(body).unwrap(), "<h1>Home</h1>");
    }

    #[tokio::test]
    async fn repeated_requests_are_byte_identical() {
        let (app, _assets, root) = test_site();
        fs::write(root.path().join("about.html"), "<h1>About</h1>").unwrap();

        let (first_head, first_body) = simulate(app.clone(), "/about").await;
        let (second_head, second_body) = simulate(app, "/about").await;

        assert_eq!(first_head.status, second_head.status);
        assert_eq!(first_body, second_body);
    }

    #[tokio::test]
    async fn dot_segments_stay_hidden() {
        let (app, _assets, root) = test_site();
        fs::write(root.path().join(".secret"), "hunter2").unwrap();

        let (head, _) = simulate(app, "/.secret").await;

        assert_eq!(head.status, 404);
    }

    #[tokio::test]
    async fn encoded_separators_are_rejected() {
        let (app, _assets, _root) = test_site();

        let (head, _) = simulate(app, "/..%2F..%2Fetc%2Fpasswd").await;

        assert_eq!(head.status, 404);
    }
}
