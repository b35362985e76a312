use super::error_response::ErrorResponse;
use super::{AppState, get_errors, get_logs, get_seconds, get_stats, search_logs};
use crate::infrastructure::storage::PanelDirectory;
use axum::{
    Router,
    body::Body,
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
    routing::get,
};
use std::net::SocketAddr;
use std::path::Component;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

/// ベースポートが塞がっていたときに試す追加ポート数
const PORT_RETRY_SPAN: u16 = 10;

/// ルーティングテーブルを構築する
///
/// 経路は起動時に一度だけ解決される。API以外のGETは作業ディレクトリからの
/// 静的ファイル配信にフォールバックする。
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // API endpoints
        .route("/api/logs", get(get_logs))
        .route("/api/search", get(search_logs))
        .route("/api/seconds", get(get_seconds))
        .route("/api/stats", get(get_stats))
        .route("/api/errors", get(get_errors))
        // Add state
        .with_state(state)
        // Add CORS support
        .layer(ServiceBuilder::new().layer(CorsLayer::permissive()))
        // Serve static files from the working directory as fallback
        .fallback(static_handler)
}

pub async fn create_server(host: String, port: u16, panels: PanelDirectory) -> anyhow::Result<()> {
    info!("Starting CT Log Viewer web server...");

    let data_dir = panels.root().to_path_buf();
    let state = Arc::new(AppState { panels });
    let app = build_router(state);

    let listener = bind_with_retry(&host, port).await?;
    let addr = listener.local_addr()?;

    println!("🌐 CT Log Viewer server started on http://{addr}");
    println!("   Build: {}", env!("BUILD_TIMESTAMP"));
    println!("   Log files directory: {}", data_dir.display());
    println!("   API endpoints available:");
    println!("     - /api/logs?panel=bt&offset=0&limit=50");
    println!("     - /api/search?q=error");
    println!("     - /api/seconds");
    println!("     - /api/stats");
    println!("     - /api/errors?panel=bt");
    println!("   Press Ctrl+C to stop");

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}

/// `base_port` から順に最大10ポートを試してバインドする
async fn bind_with_retry(host: &str, base_port: u16) -> anyhow::Result<TcpListener> {
    for port in base_port..base_port.saturating_add(PORT_RETRY_SPAN) {
        let addr: SocketAddr = format!("{host}:{port}").parse()?;
        match TcpListener::bind(&addr).await {
            Ok(listener) => {
                if port != base_port {
                    warn!(requested = base_port, bound = port, "Base port taken, using next free port");
                }
                return Ok(listener);
            }
            Err(e) => {
                warn!(port, error = %e, "Port unavailable, trying next");
            }
        }
    }
    Err(anyhow::anyhow!(
        "Could not bind any port from {} to {}",
        base_port,
        base_port.saturating_add(PORT_RETRY_SPAN) - 1
    ))
}

/// 作業ディレクトリから静的ファイルを提供するハンドラ
///
/// `/` は `index.html` の別名。ディレクトリ外へ抜けるパスは拒否する。
async fn static_handler(uri: Uri) -> impl IntoResponse {
    let path = uri.path().trim_start_matches('/');

    // ルートパスの場合はindex.htmlを提供
    let path = if path.is_empty() { "index.html" } else { path };

    // 未知のAPI経路はファイル探索せず、他のAPIエラーと同じJSON形式で404
    if path.starts_with("api/") {
        return ErrorResponse::new(StatusCode::NOT_FOUND, "API endpoint not found").into_response();
    }

    // ".." や絶対パスを含む要求は拒否
    let has_unsafe_component = std::path::Path::new(path)
        .components()
        .any(|component| !matches!(component, Component::Normal(_)));
    if has_unsafe_component {
        return not_found();
    }

    match tokio::fs::read(path).await {
        Ok(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();

            Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, mime.as_ref())
                .header(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")
                .body(Body::from(content))
                .unwrap()
        }
        Err(_) => not_found(),
    }
}

fn not_found() -> Response {
    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .body(Body::from("404 Not Found"))
        .unwrap()
}
