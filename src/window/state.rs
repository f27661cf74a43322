use tokio::sync::Mutex;

use super::window::NumberWindow;
use crate::upstream::NumberClient;

pub struct AppState {
    /// Guards the whole fetch-then-merge sequence so two concurrent
    /// requests cannot interleave between one request's snapshot and its
    /// merge.
    pub window: Mutex<NumberWindow>,
    pub upstream: NumberClient,
}

impl AppState {
    pub fn new(window: NumberWindow, upstream: NumberClient) -> Self {
        Self {
            window: Mutex::new(window),
            upstream,
        }
    }
}
