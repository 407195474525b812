use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Closed set of roles an identity can hold.
///
/// Assigned once at registration and authoritative for every
/// authorization decision downstream. The set is closed on purpose:
/// role-based branches match exhaustively, so an unknown role cannot be
/// silently accepted anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Customer,
    ShopOwner,
    CasualSeller,
    DeliveryAgent,
    Admin,
}

/// Error for role parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoleParseError {
    #[error("Unknown role: {0}")]
    Unknown(String),
}

impl Role {
    /// Wire name of the role (the serialized form).
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "CUSTOMER",
            Role::ShopOwner => "SHOP_OWNER",
            Role::CasualSeller => "CASUAL_SELLER",
            Role::DeliveryAgent => "DELIVERY_AGENT",
            Role::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CUSTOMER" => Ok(Role::Customer),
            "SHOP_OWNER" => Ok(Role::ShopOwner),
            "CASUAL_SELLER" => Ok(Role::CasualSeller),
            "DELIVERY_AGENT" => Ok(Role::DeliveryAgent),
            "ADMIN" => Ok(Role::Admin),
            other => Err(RoleParseError::Unknown(other.to_string())),
        }
    }
}
