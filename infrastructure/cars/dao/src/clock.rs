use std::fmt::Debug;

use car_models::Timestamp;
use chrono::Utc;

/// Source of record timestamps.
pub trait Clock: Debug + Send + Sync + 'static {
    fn now_nanos(&self) -> Timestamp;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_nanos(&self) -> Timestamp {
        Utc::now()
            .timestamp_nanos_opt()
            .and_then(|nanos| Timestamp::try_from(nanos).ok())
            .unwrap_or_default()
    }
}
