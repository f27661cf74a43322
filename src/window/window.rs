use std::collections::{HashSet, VecDeque};

/// Bounded, insertion-ordered window of distinct integers.
///
/// `members` and `order` always hold exactly the same elements; `order`
/// never grows past `capacity`.
#[derive(Debug)]
pub struct NumberWindow {
    members: HashSet<i64>,
    order: VecDeque<i64>,
    capacity: usize,
}

impl NumberWindow {
    pub fn new(capacity: usize) -> Self {
        Self {
            members: HashSet::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Merges a batch into the window in order. Values already present are
    /// skipped, checked against the live set so duplicates within the batch
    /// are suppressed too. Each insertion that pushes the window over
    /// capacity evicts the oldest element, so the bound holds even
    /// mid-batch.
    pub fn merge(&mut self, batch: &[i64]) {
        for &value in batch {
            if !self.members.insert(value) {
                continue;
            }
            self.order.push_back(value);
            if self.order.len() > self.capacity {
                if let Some(oldest) = self.order.pop_front() {
                    self.members.remove(&oldest);
                }
            }
        }
    }

    /// Current contents in insertion order.
    pub fn snapshot(&self) -> Vec<i64> {
        self.order.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Mean of the window formatted to two decimals, or `"0"` when empty.
pub fn format_mean(values: &[i64]) -> String {
    if values.is_empty() {
        return "0".to_string();
    }

    let total: i64 = values.iter().sum();
    format!("{:.2}", total as f64 / values.len() as f64)
}
