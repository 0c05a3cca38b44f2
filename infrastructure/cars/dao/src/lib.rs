pub mod clock;
pub mod dao;
pub mod store;

pub use clock::{Clock, SystemClock};
pub use dao::CarDao;
pub use store::CarStore;
