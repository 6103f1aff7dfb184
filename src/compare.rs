// 📌 Comparison Set - items pinned for side-by-side comparison
//
// Pins are sticky: an item hidden by the current filters stays pinned and
// comes back into the compared view when the filters let it through again.

use crate::model::MenuItem;
use indexmap::IndexSet;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComparisonSet {
    ids: IndexSet<String>,
}

impl ComparisonSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin if absent, unpin if present. Returns `true` when now pinned.
    pub fn toggle(&mut self, id: &str) -> bool {
        let pinned = if self.ids.shift_remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        };
        debug!(id, pinned, "compare toggled");
        pinned
    }

    /// Pin without unpinning. Returns `true` if the id was newly pinned.
    pub fn pin(&mut self, id: &str) -> bool {
        let added = self.ids.insert(id.to_string());
        if added {
            debug!(id, "compare pinned");
        }
        added
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn ids(&self) -> &IndexSet<String> {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Pinned items that are still visible, in filtered-list order
    pub fn compared<'a>(&self, filtered: &[&'a MenuItem]) -> Vec<&'a MenuItem> {
        filtered
            .iter()
            .copied()
            .filter(|item| self.contains(&item.id))
            .collect()
    }
}

impl FromIterator<String> for ComparisonSet {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        ComparisonSet {
            ids: iter.into_iter().collect(),
        }
    }
}
