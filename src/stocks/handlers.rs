use axum::extract::{Path, Query, State};
use axum::response::Json;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use super::state::AppState;
use super::stats::{average, filter_to_trailing_window, pearson_correlation, round_to};
use super::types::{
    AverageResponse, CorrelationResponse, HealthResponse, PriceSample, StockQuery, TickerStats,
};
use crate::Error;

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: "Server is running".to_string(),
    })
}

fn parse_minutes(raw: Option<&str>) -> Result<u32, Error> {
    raw.ok_or_else(|| Error::Validation("missing minutes parameter".to_string()))?
        .parse::<u32>()
        .map_err(|_| Error::Validation("minutes must be a non-negative integer".to_string()))
}

pub async fn get_stock_average(
    State(state): State<Arc<AppState>>,
    Path(ticker): Path<String>,
    Query(params): Query<StockQuery>,
) -> Result<Json<AverageResponse>, Error> {
    if ticker.is_empty() {
        return Err(Error::Validation("missing ticker".to_string()));
    }

    let minutes = parse_minutes(params.minutes.as_deref())?;
    if params.aggregation.as_deref() != Some("average") {
        return Err(Error::Validation(format!(
            "unsupported aggregation: {}",
            params.aggregation.as_deref().unwrap_or("<none>")
        )));
    }

    // Always a fresh fetch; the cache never short-circuits a request.
    let samples = state.fetch_and_cache(&ticker, minutes).await?;
    let recent = filter_to_trailing_window(&samples, minutes, Utc::now());

    info!("averaging {} samples for {}", recent.len(), ticker);

    Ok(Json(AverageResponse {
        average_stock_price: round_to(average(&recent), 6),
        price_history: recent,
    }))
}

pub async fn get_stock_correlation(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<CorrelationResponse>, Error> {
    let mut minutes_raw = None;
    let mut tickers: Vec<String> = Vec::new();
    for (key, value) in params {
        match key.as_str() {
            "minutes" => minutes_raw = Some(value),
            "ticker" => tickers.push(value),
            _ => {}
        }
    }

    let minutes = parse_minutes(minutes_raw.as_deref())?;
    if tickers.len() != 2 {
        return Err(Error::Validation(format!(
            "expected exactly 2 tickers, got {}",
            tickers.len()
        )));
    }

    let (first, second) = (tickers.remove(0), tickers.remove(0));

    // Both fetches run concurrently; either failure aborts the request
    // before any statistics are produced.
    let (samples_a, samples_b) = futures::try_join!(
        state.fetch_and_cache(&first, minutes),
        state.fetch_and_cache(&second, minutes),
    )?;

    let now = Utc::now();
    let recent_a = filter_to_trailing_window(&samples_a, minutes, now);
    let recent_b = filter_to_trailing_window(&samples_b, minutes, now);

    let prices_a: Vec<f64> = recent_a.iter().map(|s| s.price).collect();
    let prices_b: Vec<f64> = recent_b.iter().map(|s| s.price).collect();
    let correlation = round_to(pearson_correlation(&prices_a, &prices_b), 4);

    info!(
        "correlated {} and {} over {} minutes: {}",
        first, second, minutes, correlation
    );

    let mut stocks = HashMap::new();
    stocks.insert(first, ticker_stats(recent_a));
    stocks.insert(second, ticker_stats(recent_b));

    Ok(Json(CorrelationResponse {
        correlation,
        stocks,
    }))
}

fn ticker_stats(recent: Vec<PriceSample>) -> TickerStats {
    TickerStats {
        average_price: round_to(average(&recent), 6),
        price_history: recent,
    }
}
