//! Acting principals and their roles.
//!
//! The engine does not authenticate anyone; an external identity provider
//! resolves the caller to a subject id and a role, and operations trust
//! that input while enforcing role and ownership checks themselves.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Error;

/// The role of an acting principal.
///
/// # Examples
///
/// ```
/// use lodge::Role;
///
/// assert_eq!("customer".parse::<Role>().unwrap(), Role::Customer);
/// assert_eq!("hotelOwner".parse::<Role>().unwrap(), Role::HotelOwner);
/// assert!("admin".parse::<Role>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    /// A guest who books rooms and owns the cancel/pay/delete transitions
    /// of their own bookings.
    Customer,
    /// A hotel owner who approves or rejects bookings on rooms of hotels
    /// they own.
    HotelOwner,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Customer => write!(f, "customer"),
            Self::HotelOwner => write!(f, "hotelOwner"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Self::Customer),
            // Accept both the wire spelling and the CLI-friendly one
            "hotelOwner" | "hotel-owner" => Ok(Self::HotelOwner),
            _ => Err(format!("invalid role: {s}")),
        }
    }
}

/// An authenticated caller, as resolved by the identity provider.
///
/// # Examples
///
/// ```
/// use lodge::{Principal, Role};
/// use uuid::Uuid;
///
/// let principal = Principal::new(Uuid::new_v4(), Role::Customer);
/// assert!(principal.require_role(Role::Customer).is_ok());
/// assert!(principal.require_role(Role::HotelOwner).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// The subject id of the caller.
    pub subject: Uuid,
    /// The caller's role.
    pub role: Role,
}

impl Principal {
    /// Creates a new principal.
    #[must_use]
    pub const fn new(subject: Uuid, role: Role) -> Self {
        Self { subject, role }
    }

    /// Requires the principal to hold the given role.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Forbidden`] if the role does not match.
    pub fn require_role(&self, role: Role) -> crate::error::Result<()> {
        if self.role == role {
            Ok(())
        } else {
            Err(Error::Forbidden {
                details: format!("this operation requires the {role} role"),
            })
        }
    }

    /// Requires the principal to be the given subject.
    ///
    /// Used for the exclusive-ownership checks on cancel/pay/delete.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Forbidden`] if the subject does not match.
    pub fn require_subject(&self, subject: Uuid, action: &str) -> crate::error::Result<()> {
        if self.subject == subject {
            Ok(())
        } else {
            Err(Error::Forbidden {
                details: format!("you are not allowed to {action} this booking"),
            })
        }
    }
}
