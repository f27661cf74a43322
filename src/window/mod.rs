mod handlers;
mod state;
mod types;
mod window;

pub use handlers::*;
pub use state::*;
pub use types::*;
pub use window::*;

use anyhow::Result;
use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::config::WindowConfig;
use crate::upstream::NumberClient;

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([axum::http::Method::GET, axum::http::Method::OPTIONS])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/numbers/{type}", get(get_numbers))
        .layer(cors)
        .with_state(state)
}

pub async fn serve(host: String, port: u16, config: WindowConfig) -> Result<()> {
    let upstream = NumberClient::new(config.upstream_base.clone(), config.upstream_timeout);
    let state = Arc::new(AppState::new(NumberWindow::new(config.capacity), upstream));

    let app = router(state);

    let addr = format!("{}:{}", host, port).parse::<SocketAddr>()?;
    let listener = TcpListener::bind(&addr).await?;

    info!("window service listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
