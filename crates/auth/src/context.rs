//! Authorization context for authenticated users

use crate::claims::JoblyClaims;

/// Represents an authenticated caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub username: String,
    pub is_admin: bool,
}

impl AuthContext {
    pub fn new(username: impl Into<String>, is_admin: bool) -> Self {
        Self {
            username: username.into(),
            is_admin,
        }
    }

    /// Check if caller holds the admin role
    pub fn is_admin(&self) -> bool {
        self.is_admin
    }
}

impl From<JoblyClaims> for AuthContext {
    fn from(claims: JoblyClaims) -> Self {
        Self::new(claims.username, claims.is_admin)
    }
}
