use std::sync::Once;

use car_dao::CarStore;
use car_models::CarPayload;

use crate::ManualClock;

static TRACING: Once = Once::new();

/// Route `tracing` output through the test harness; honours `RUST_LOG`.
pub fn init_test_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "warn".into()),
            )
            .with_test_writer()
            .try_init();
    });
}

/// The Toyota Corolla used throughout the worked examples.
pub fn sample_payload() -> CarPayload {
    CarPayload::builder()
        .make("Toyota")
        .model("Corolla")
        .color("Red")
        .owner("Alice")
        .year(2020)
        .build()
}

/// A second, distinct payload for tests that need more than one car.
pub fn other_payload() -> CarPayload {
    CarPayload::builder()
        .make("Honda")
        .model("Civic")
        .color("Blue")
        .owner("Bob")
        .year(2018)
        .is_booked(true)
        .build()
}

/// `sample_payload` with the booking flag set.
pub fn booked_payload() -> CarPayload {
    CarPayload {
        is_booked: true,
        ..sample_payload()
    }
}

/// A payload that fails validation on the `make` field.
pub fn blank_make_payload() -> CarPayload {
    CarPayload {
        make: "  ".to_string(),
        ..sample_payload()
    }
}

pub fn fresh_store() -> CarStore {
    init_test_tracing();
    CarStore::new()
}

/// A fresh store driven by a manual clock starting at `start`.
pub fn store_with_clock(start: u64) -> (CarStore, ManualClock) {
    init_test_tracing();
    let clock = ManualClock::starting_at(start);
    (CarStore::with_clock(clock.clone()), clock)
}
