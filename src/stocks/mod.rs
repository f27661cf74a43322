mod handlers;
mod state;
mod stats;
mod types;

pub use handlers::*;
pub use state::*;
pub use stats::*;
pub use types::*;

use anyhow::Result;
use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::config::StocksConfig;
use crate::upstream::StockClient;

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([axum::http::Method::GET, axum::http::Method::OPTIONS])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health_check))
        .route("/stocks/{ticker}", get(get_stock_average))
        .route("/stockcorrelation", get(get_stock_correlation))
        .layer(cors)
        .with_state(state)
}

pub async fn serve(host: String, port: u16, config: StocksConfig) -> Result<()> {
    let upstream = StockClient::new(config.upstream_base.clone(), config.upstream_timeout);
    let state = Arc::new(AppState::new(upstream));

    let app = router(state);

    let addr = format!("{}:{}", host, port).parse::<SocketAddr>()?;
    let listener = TcpListener::bind(&addr).await?;

    info!("stock service listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
