pub mod clock;
pub mod id;
pub mod property;

pub use clock::{Clock, ManualClock, SharedClock, SystemClock};
pub use id::generate_id;
pub use property::{NewProperty, Property};
