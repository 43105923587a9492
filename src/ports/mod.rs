//! Port traits defining external boundaries.
//!
//! Identifier generation reads two ambient sources: wall-clock time and a
//! UUID generator. Each is a trait here; implementations live in
//! `src/adapters/`.

pub mod clock;
pub mod uuid_source;

pub use clock::Clock;
pub use uuid_source::UuidSource;
