//! Authenticated caller identity.

use uuid::Uuid;

/// Identity carried through a request after token validation.
#[derive(Debug, Clone)]
pub struct Principal {
    /// User ID from the token subject.
    pub id: Uuid,
    /// Email from the token claims.
    pub email: String,
}
