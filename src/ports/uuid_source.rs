//! UUID source port for the random component of identifiers.

use uuid::Uuid;

/// Produces UUIDs whose leading field disambiguates identifiers generated
/// within the same microsecond.
pub trait UuidSource: Send + Sync {
    /// Returns the next UUID.
    fn next_uuid(&self) -> Uuid;
}
