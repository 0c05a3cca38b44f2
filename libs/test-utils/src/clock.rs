use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use car_dao::Clock;
use car_models::Timestamp;

/// Clock that only moves when a test tells it to. Clones share the same
/// reading.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn starting_at(now: Timestamp) -> Self {
        Self {
            now: Arc::new(AtomicU64::new(now)),
        }
    }

    pub fn set(&self, now: Timestamp) { self.now.store(now, Ordering::SeqCst); }

    pub fn advance(&self, nanos: u64) {
        self.now.fetch_add(nanos, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_nanos(&self) -> Timestamp { self.now.load(Ordering::SeqCst) }
}
