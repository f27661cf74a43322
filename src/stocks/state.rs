use std::collections::HashMap;
use tokio::sync::Mutex;

use super::types::PriceSample;
use crate::upstream::StockClient;
use crate::Error;

pub struct AppState {
    /// Most recent fetch result per ticker. Entries are replaced wholesale
    /// on every fetch and never evicted.
    pub cache: Mutex<HashMap<String, Vec<PriceSample>>>,
    pub upstream: StockClient,
}

impl AppState {
    pub fn new(upstream: StockClient) -> Self {
        Self {
            cache: Mutex::new(HashMap::new()),
            upstream,
        }
    }

    /// Fetches a fresh trailing-window snapshot for `ticker` and replaces
    /// its cache entry. Exactly one upstream attempt, no retries.
    pub async fn fetch_and_cache(
        &self,
        ticker: &str,
        minutes: u32,
    ) -> Result<Vec<PriceSample>, Error> {
        let samples = self.upstream.fetch_price_history(ticker, minutes).await?;

        let mut cache = self.cache.lock().await;
        cache.insert(ticker.to_string(), samples.clone());

        Ok(samples)
    }
}
