//! Live adapters backed by the system clock and real UUID generation.

pub mod clock;
pub mod uuid_source;

pub use clock::SystemClock;
pub use uuid_source::{RandomUuidSource, TimeUuidSource};
