//! Hotel entity.
//!
//! The engine only needs the slice of a hotel relevant to booking:
//! identity, a display name, and the owning principal. Ratings, photos,
//! and descriptions live with the metadata-store collaborator.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::booking::ValidationError;

/// A hotel whose rooms can be booked.
///
/// # Examples
///
/// ```
/// use lodge::Hotel;
/// use uuid::Uuid;
///
/// let owner = Uuid::new_v4();
/// let hotel = Hotel::new("Grand Plaza", owner).unwrap();
/// assert_eq!(hotel.owner(), owner);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotel {
    id: Uuid,
    name: String,
    owner: Uuid,
}

impl Hotel {
    /// Creates a new hotel with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the name is empty.
    pub fn new(name: &str, owner: Uuid) -> Result<Self, ValidationError> {
        Self::with_id(Uuid::new_v4(), name, owner)
    }

    /// Creates a hotel with an explicit id (used when rehydrating rows).
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the name is empty.
    pub fn with_id(id: Uuid, name: &str, owner: Uuid) -> Result<Self, ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError {
                field: "name".into(),
                message: "hotel name must be non-empty".into(),
            });
        }

        Ok(Self {
            id,
            name: name.to_string(),
            owner,
        })
    }

    /// Returns the hotel id.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the hotel name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the owning principal's subject id.
    #[must_use]
    pub const fn owner(&self) -> Uuid {
        self.owner
    }
}
