pub mod car;
pub mod payload;

pub use car::{Car, CarId, Timestamp};
pub use payload::{CarPayload, PayloadValidationError};
