// 🏪 Data Model - Venues and the menu items they sell
//
// Identity is an opaque uuid string generated at creation time.
// Ids are only unique within a session; nothing is persisted.

use serde::{Deserialize, Serialize};

/// Generate a fresh opaque identifier
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

// ============================================================================
// VENUE
// ============================================================================

/// A café or restaurant with a name and address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    /// Stable identity - never changes
    pub id: String,

    /// Display name (e.g., "Bean & Bloom")
    pub name: String,

    /// Street address (e.g., "123 Walnut St")
    pub address: String,
}

impl Venue {
    /// Create a venue with a freshly generated id
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Venue {
            id: new_id(),
            name: name.into(),
            address: address.into(),
        }
    }

    /// Create a venue with a caller-chosen id (seed data, tests)
    pub fn with_id(
        id: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Venue {
            id: id.into(),
            name: name.into(),
            address: address.into(),
        }
    }
}

// ============================================================================
// MENU ITEM
// ============================================================================

/// A priced product belonging to one venue and one category
///
/// `venue_name` is a copy taken when the item was entered. It is not kept
/// in sync with the registry, but venues cannot be renamed so the two
/// never drift in practice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,

    /// Item name (e.g., "Latte 12oz")
    pub name: String,

    /// Reference to `Venue::id`
    pub venue_id: String,

    /// Venue name at the time of entry
    pub venue_name: String,

    /// Category label (e.g., "Coffee", "Pastry")
    pub category: String,

    /// Non-negative price in currency units
    pub price: f64,
}

impl MenuItem {
    /// Text the search query is matched against: name, venue and category
    pub fn search_text(&self) -> String {
        format!("{} {} {}", self.name, self.venue_name, self.category)
    }
}
