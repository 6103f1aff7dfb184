// 📍 Venue Registry - the cafés being compared
//
// Venues are append-only: added by name + address, never renamed or removed.
// The active set drives the venue filter; an empty active set means
// "all venues", not "no venues".

use crate::error::{MenuError, Result};
use crate::model::Venue;
use indexmap::IndexSet;
use serde::Serialize;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, Serialize)]
pub struct VenueRegistry {
    /// All venues in insertion order
    venues: Vec<Venue>,

    /// Ids of venues included in the filter (insertion ordered)
    active: IndexSet<String>,
}

impl VenueRegistry {
    /// Create new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a venue from user input.
    ///
    /// Both fields are trimmed; if either is blank the call is a no-op and
    /// returns `None`. A new venue is active by default.
    pub fn add_venue(&mut self, name: &str, address: &str) -> Option<&Venue> {
        let name = name.trim();
        let address = address.trim();

        if name.is_empty() || address.is_empty() {
            debug!(name, address, "ignoring venue with blank field");
            return None;
        }

        Some(self.insert(Venue::new(name, address), true))
    }

    /// Insert a pre-built venue (seed data, imports).
    ///
    /// Returns the existing record if the id is already registered.
    pub fn insert(&mut self, venue: Venue, active: bool) -> &Venue {
        let index = match self.venues.iter().position(|v| v.id == venue.id) {
            Some(index) => index,
            None => {
                debug!(id = %venue.id, name = %venue.name, "venue added");
                if active {
                    self.active.insert(venue.id.clone());
                }
                self.venues.push(venue);
                self.venues.len() - 1
            }
        };
        &self.venues[index]
    }

    /// Flip a venue in or out of the active set.
    ///
    /// Returns the new state (`true` = active). Unknown ids are ignored.
    pub fn toggle_venue(&mut self, id: &str) -> bool {
        if self.get(id).is_none() {
            warn!(id, "toggle for unknown venue ignored");
            return false;
        }

        let now_active = if self.active.shift_remove(id) {
            false
        } else {
            self.active.insert(id.to_string());
            true
        };
        debug!(id, active = now_active, "venue toggled");
        now_active
    }

    /// Replace the active set with exactly `ids`.
    ///
    /// Duplicates collapse to one entry. Any unknown id fails the whole call
    /// and leaves the current set untouched. An empty `ids` means all venues.
    pub fn set_active<I>(&mut self, ids: I) -> Result<()>
    where
        I: IntoIterator<Item = String>,
    {
        let requested: IndexSet<String> = ids.into_iter().collect();
        if let Some(id) = requested.iter().find(|id| self.get(id).is_none()) {
            return Err(MenuError::UnknownVenue { id: id.clone() });
        }

        debug!(active = requested.len(), "active venues replaced");
        self.active = requested;
        Ok(())
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.contains(id)
    }

    pub fn active_ids(&self) -> &IndexSet<String> {
        &self.active
    }

    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    pub fn get(&self, id: &str) -> Option<&Venue> {
        self.venues.iter().find(|v| v.id == id)
    }

    /// Exact (case-sensitive) name lookup
    pub fn find_by_name(&self, name: &str) -> Option<&Venue> {
        self.venues.iter().find(|v| v.name == name)
    }

    pub fn len(&self) -> usize {
        self.venues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_venue_trims_and_activates() {
        let mut registry = VenueRegistry::new();

        let venue = registry
            .add_venue("  Bean & Bloom ", " 123 Walnut St  ")
            .cloned()
            .unwrap();

        assert_eq!(venue.name, "Bean & Bloom");
        assert_eq!(venue.address, "123 Walnut St");
        assert!(registry.is_active(&venue.id));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_add_venue_rejects_blank_fields() {
        let mut registry = VenueRegistry::new();

        assert!(registry.add_venue("   ", "123 Walnut St").is_none());
        assert!(registry.add_venue("Bean & Bloom", "").is_none());
        assert!(registry.is_empty());
        assert!(registry.active_ids().is_empty());
    }

    #[test]
    fn test_added_venues_have_unique_ids() {
        let mut registry = VenueRegistry::new();

        let a = registry.add_venue("Same", "Place").unwrap().id.clone();
        let b = registry.add_venue("Same", "Place").unwrap().id.clone();

        assert_ne!(a, b);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_toggle_venue_flips_membership() {
        let mut registry = VenueRegistry::new();
        let id = registry.add_venue("Bean & Bloom", "123 Walnut St").unwrap().id.clone();

        assert!(!registry.toggle_venue(&id));
        assert!(!registry.is_active(&id));
        assert!(registry.active_ids().is_empty());

        assert!(registry.toggle_venue(&id));
        assert!(registry.is_active(&id));
    }

    #[test]
    fn test_toggle_unknown_venue_is_ignored() {
        let mut registry = VenueRegistry::new();

        assert!(!registry.toggle_venue("nope"));
        assert!(registry.active_ids().is_empty());
    }

    #[test]
    fn test_set_active_collapses_duplicates() {
        let mut registry = VenueRegistry::new();
        registry.insert(Venue::with_id("v1", "Bean & Bloom", "123 Walnut St"), true);
        registry.insert(Venue::with_id("v2", "Riverfront Roasters", "9 River Rd"), true);

        registry
            .set_active(["v2".to_string(), "v2".to_string()])
            .unwrap();

        assert_eq!(registry.active_ids().len(), 1);
        assert!(registry.is_active("v2"));
        assert!(!registry.is_active("v1"));
    }

    #[test]
    fn test_set_active_rejects_unknown_id() {
        let mut registry = VenueRegistry::new();
        registry.insert(Venue::with_id("v1", "Bean & Bloom", "123 Walnut St"), true);

        let result = registry.set_active(["v1".to_string(), "nope".to_string()]);

        assert!(matches!(result, Err(MenuError::UnknownVenue { ref id }) if id == "nope"));
        // Unchanged on failure
        assert_eq!(registry.active_ids().len(), 1);
        assert!(registry.is_active("v1"));
    }

    #[test]
    fn test_set_active_empty_means_all() {
        let mut registry = VenueRegistry::new();
        registry.insert(Venue::with_id("v1", "Bean & Bloom", "123 Walnut St"), true);

        registry.set_active(Vec::new()).unwrap();
        assert!(registry.active_ids().is_empty());
    }

    #[test]
    fn test_insert_existing_id_keeps_first_record() {
        let mut registry = VenueRegistry::new();
        registry.insert(Venue::with_id("v1", "Bean & Bloom", "123 Walnut St"), false);
        registry.insert(Venue::with_id("v1", "Other", "Elsewhere"), true);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("v1").unwrap().name, "Bean & Bloom");
        assert!(!registry.is_active("v1"));
    }
}
