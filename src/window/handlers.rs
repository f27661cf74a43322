use axum::extract::{Path, State};
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::response::Json;
use std::sync::Arc;
use tracing::info;

use super::state::AppState;
use super::types::{NumberKind, WindowResponse};
use super::window::format_mean;
use crate::Error;

pub async fn get_numbers(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
    headers: HeaderMap,
) -> Result<Json<WindowResponse>, Error> {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .ok_or(Error::AuthRequired)?
        .to_string();

    let kind = NumberKind::from_code(&code)
        .ok_or_else(|| Error::Validation(format!("unknown number type: {code}")))?;

    // The lock spans the upstream call: snapshot, fetch, and merge form one
    // read-modify-write sequence.
    let mut window = state.window.lock().await;
    let previous = window.snapshot();
    let fetched = state.upstream.fetch_numbers(kind, &token).await;
    window.merge(&fetched);
    let current = window.snapshot();
    drop(window);

    info!(
        "merged {} {} numbers, window size {}",
        fetched.len(),
        kind,
        current.len()
    );

    let avg = format_mean(&current);
    Ok(Json(WindowResponse {
        window_prev_state: previous,
        window_curr_state: current,
        numbers: fetched,
        avg,
    }))
}
