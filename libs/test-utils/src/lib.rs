pub mod clock;
pub mod test_helpers;

pub use clock::ManualClock;
pub use test_helpers::*;
