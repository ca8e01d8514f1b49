use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

pub const MAX_STROKES: usize = 2000;
pub const MAX_POINTS_PER_STROKE: usize = 5000;

#[derive(Clone, Default)]
pub struct AppState {
    received: Arc<AtomicU64>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sequence number for the next accepted submission, starting at 1.
    pub fn next_submission(&self) -> u64 {
        self.received.fetch_add(1, Ordering::Relaxed) + 1
    }
}
