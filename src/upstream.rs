use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::warn;

use crate::stocks::PriceSample;
use crate::window::NumberKind;
use crate::Error;

#[derive(Debug, Deserialize)]
struct NumbersPayload {
    numbers: Option<Vec<i64>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PriceHistoryPayload {
    price_history: Option<Vec<PriceSample>>,
}

/// Client for the classifier endpoints (`primes`, `fibo`, `even`, `rand`).
#[derive(Debug, Clone)]
pub struct NumberClient {
    http: Client,
    base: String,
    timeout: Duration,
}

impl NumberClient {
    pub fn new(base: impl Into<String>, timeout: Duration) -> Self {
        Self {
            http: Client::new(),
            base: base.into().trim_end_matches('/').to_string(),
            timeout,
        }
    }

    /// Fetches a batch for `kind`, forwarding the caller's token. Any
    /// failure degrades to an empty batch so window state stays available
    /// when the upstream is not.
    pub async fn fetch_numbers(&self, kind: NumberKind, token: &str) -> Vec<i64> {
        match self.try_fetch(kind, token).await {
            Ok(numbers) => numbers,
            Err(err) => {
                warn!("upstream fetch for {} failed: {}", kind, err);
                Vec::new()
            }
        }
    }

    async fn try_fetch(&self, kind: NumberKind, token: &str) -> Result<Vec<i64>, Error> {
        let url = format!("{}/{}", self.base, kind.upstream_path());

        let payload: NumbersPayload = self
            .http
            .get(&url)
            .header(AUTHORIZATION, token)
            .header(ACCEPT, "application/json")
            .timeout(self.timeout)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(payload.numbers.unwrap_or_default())
    }
}

/// Client for the stock price-history endpoint.
#[derive(Debug, Clone)]
pub struct StockClient {
    http: Client,
    base: String,
    timeout: Duration,
}

impl StockClient {
    pub fn new(base: impl Into<String>, timeout: Duration) -> Self {
        Self {
            http: Client::new(),
            base: base.into().trim_end_matches('/').to_string(),
            timeout,
        }
    }

    /// Fetches the trailing `minutes` of price history for `ticker`. A
    /// response without a `priceHistory` field is rejected as malformed;
    /// transport errors, timeouts, and non-2xx statuses surface as
    /// `UpstreamUnavailable`.
    pub async fn fetch_price_history(
        &self,
        ticker: &str,
        minutes: u32,
    ) -> Result<Vec<PriceSample>, Error> {
        let url = format!("{}/stocks/{}", self.base, ticker);

        let payload: PriceHistoryPayload = self
            .http
            .get(&url)
            .query(&[("minutes", minutes)])
            .timeout(self.timeout)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        payload.price_history.ok_or_else(|| {
            Error::InvalidUpstreamResponse(format!("missing priceHistory field for {ticker}"))
        })
    }
}
