use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One upstream price observation. Immutable once cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSample {
    pub price: f64,
    pub last_updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: String,
}

/// Raw query parameters for the single-ticker endpoint; validated by the
/// handler so bad input maps to a 400 with a JSON body.
#[derive(Debug, Deserialize)]
pub struct StockQuery {
    pub minutes: Option<String>,
    pub aggregation: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AverageResponse {
    pub average_stock_price: f64,
    pub price_history: Vec<PriceSample>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerStats {
    pub average_price: f64,
    pub price_history: Vec<PriceSample>,
}

#[derive(Debug, Serialize)]
pub struct CorrelationResponse {
    pub correlation: f64,
    pub stocks: HashMap<String, TickerStats>,
}
