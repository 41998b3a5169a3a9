pub mod bounded_cache;
pub mod clock;
pub mod logger;

pub use bounded_cache::{BoundedFifoCache, FifoCacheStats};
pub use clock::{Clock, ManualClock, SystemClock};
