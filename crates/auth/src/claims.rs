//! JWT claims types

use serde::{Deserialize, Serialize};

/// JWT claims issued by the Jobly auth service
#[derive(Debug, Serialize, Deserialize)]
pub struct JoblyClaims {
    /// Username of the bearer
    pub username: String,
    /// Admin role claim
    #[serde(rename = "isAdmin", default)]
    pub is_admin: bool,
    /// Issued at
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<u64>,
    /// Expires at; Jobly tokens do not expire unless this is set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<u64>,
}
