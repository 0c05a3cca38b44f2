pub mod client;
pub mod transport;

pub use car_responses::methods;
pub use client::{CarServiceClient, ClientError};
pub use transport::{Transport, TransportError};
