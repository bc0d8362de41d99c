//! Domain DTOs for the to-do API.
//!
//! # Design
//! Ids are the backend's auto-incremented primary keys and travel as plain
//! JSON numbers. These types mirror the server's schema but are defined
//! independently from the server crate; integration tests catch schema
//! drift between the two.

use serde::{Deserialize, Serialize};

/// Identifier the backend assigns when an item is created. Opaque to the
/// client and immutable once assigned.
pub type ItemId = u64;

/// A single to-do item as the API returns it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub completed: bool,
}

/// Request payload for creating a new item. The backend assigns the id and
/// starts every item with `completed: false`; the title is all the caller
/// gets to choose.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewItem {
    pub title: String,
}

/// Request payload for updating an existing item. Only the fields present
/// in the JSON are applied; omitted fields remain unchanged on the server.
/// The response carries the complete item back, and that full object is the
/// new truth on the client side, never a local merge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl ItemPatch {
    /// Patch that renames an item, leaving its flag alone.
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            completed: None,
        }
    }

    /// Patch that sets the completion flag, leaving the title alone.
    pub fn completed(completed: bool) -> Self {
        Self {
            title: None,
            completed: Some(completed),
        }
    }
}
