use std::error::Error;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use axum::{
    handler::HandlerWithoutStateExt,
    http::{header, StatusCode, Uri},
    middleware,
    response::IntoResponse,
    Router,
};
use kartki::{maud::layout, pages, NOT_FOUND_FILE};
use quanta::Instant;
use tokio::{fs, net::TcpSocket};
use tracing::{debug, Level};

use tower_http::{
    services::ServeDir,
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::consts::PORT;
use crate::server_utils::{find_open_port, log_server_start, remember_uri, CustomOnResponse};

async fn handle_404(dist_dir: PathBuf, uri: Uri) -> impl IntoResponse {
    let content = match fs::read_to_string(dist_dir.join(NOT_FOUND_FILE)).await {
        Ok(custom_content) => custom_content,
        Err(_) => layout(&pages::not_found(Some(uri.path()))).into_string(),
    };

    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        content,
    )
        .into_response()
}

/// Serves the files of `dist_dir`, answering unknown paths with its `404.html`.
pub fn preview_router(dist_dir: PathBuf) -> Router {
    let dist_dir_clone = dist_dir.clone();
    let service = (move |uri: Uri| handle_404(dist_dir_clone.clone(), uri)).into_service();
    let serve_dir = ServeDir::new(dist_dir).not_found_service(service);

    Router::new()
        .fallback_service(serve_dir)
        .layer(middleware::from_fn(remember_uri))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(CustomOnResponse),
        )
}

pub async fn start_preview_web_server(dist_dir: PathBuf, host: bool) -> Result<(), Box<dyn Error>> {
    let start_time = Instant::now();

    // Bind to every interface with --host, localhost otherwise
    let addr = if host {
        IpAddr::from([0, 0, 0, 0])
    } else {
        IpAddr::from([127, 0, 0, 1])
    };

    let port = find_open_port(&addr, PORT).await?;
    let socket = TcpSocket::new_v4()?;
    let _ = socket.set_reuseaddr(true);

    let socket_addr = SocketAddr::new(addr, port);
    socket.bind(socket_addr)?;

    let listener = socket.listen(1024)?;
    let local_addr = listener.local_addr()?;

    debug!("listening on {}", local_addr);

    let router = preview_router(dist_dir);

    log_server_start(start_time, host, local_addr, "Preview");

    axum::serve(listener, router.into_make_service()).await?;

    Ok(())
}
