use serde::Serialize;
use std::fmt;

/// The four classifier feeds exposed by the evaluation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    Primes,
    Fibonacci,
    Even,
    Random,
}

impl NumberKind {
    /// Maps the single-letter route code to a kind.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "p" => Some(Self::Primes),
            "f" => Some(Self::Fibonacci),
            "e" => Some(Self::Even),
            "r" => Some(Self::Random),
            _ => None,
        }
    }

    /// Path segment of the corresponding upstream endpoint.
    pub fn upstream_path(&self) -> &'static str {
        match self {
            Self::Primes => "primes",
            Self::Fibonacci => "fibo",
            Self::Even => "even",
            Self::Random => "rand",
        }
    }
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.upstream_path())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowResponse {
    pub window_prev_state: Vec<i64>,
    pub window_curr_state: Vec<i64>,
    /// The batch returned by the upstream for this request, duplicates
    /// included.
    pub numbers: Vec<i64>,
    pub avg: String,
}
