//! Adapter implementations of the port traits.
//!
//! - `live`: system clock, v1 and v4 UUID generation.
//! - `fixed`: deterministic doubles.
//! - `recording`: delegate to another adapter and capture each call.
//! - `replaying`: serve captured calls back from a cassette.

pub mod fixed;
pub mod live;
pub mod recording;
pub mod replaying;
