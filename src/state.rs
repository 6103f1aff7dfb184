// 🔁 App State - one explicit state object plus pure transitions
//
// Every user action is an `Action`; `reduce` folds it into the state.
// Everything shown on screen is derived from scratch by `view()`:
//   venues + catalog -> filter pipeline -> (stats, category chart, compared)

use crate::catalog::ItemCatalog;
use crate::compare::ComparisonSet;
use crate::filter::{self, CategoryFilter, FilterState, Handle, PriceBounds, PriceRange};
use crate::model::MenuItem;
use crate::stats::{self, CategoryAggregate, PriceStats};
use crate::venues::VenueRegistry;
use serde::Serialize;
use tracing::debug;

// ============================================================================
// ACTIONS
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Register a venue (no-op if either field is blank)
    AddVenue { name: String, address: String },

    /// Flip a venue in or out of the venue filter
    ToggleVenue(String),

    SetQuery(String),

    SetCategory(CategoryFilter),

    /// Both slider handles, in any order
    SetPriceRange(f64, f64),

    /// Move one slider handle by whole steps
    NudgePrice { handle: Handle, steps: i32 },

    /// Pin or unpin an item
    ToggleCompare(String),
}

// ============================================================================
// STATE
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct AppState {
    pub bounds: PriceBounds,
    pub venues: VenueRegistry,
    pub catalog: ItemCatalog,
    pub filter: FilterState,
    pub compare: ComparisonSet,
}

impl AppState {
    pub fn new(bounds: PriceBounds) -> Self {
        Self::with_data(bounds, VenueRegistry::new(), ItemCatalog::new())
    }

    pub fn with_data(bounds: PriceBounds, venues: VenueRegistry, catalog: ItemCatalog) -> Self {
        AppState {
            filter: FilterState::new(&bounds),
            bounds,
            venues,
            catalog,
            compare: ComparisonSet::new(),
        }
    }

    /// Apply one action in place
    pub fn dispatch(&mut self, action: Action) {
        debug!(?action, "dispatch");

        match action {
            Action::AddVenue { name, address } => {
                self.venues.add_venue(&name, &address);
            }
            Action::ToggleVenue(id) => {
                self.venues.toggle_venue(&id);
            }
            Action::SetQuery(query) => self.filter.query = query,
            Action::SetCategory(category) => self.filter.category = category,
            Action::SetPriceRange(a, b) => {
                self.filter.price_range = PriceRange::clamped(a, b, &self.bounds);
            }
            Action::NudgePrice { handle, steps } => {
                self.filter.price_range = self.filter.price_range.nudge(handle, steps, &self.bounds);
            }
            Action::ToggleCompare(id) => {
                self.compare.toggle(&id);
            }
        }
    }

    /// Derive everything the presentation layer shows
    pub fn view(&self) -> View<'_> {
        let filtered = filter::apply(self.catalog.items(), &self.filter, self.venues.active_ids());
        let stats = stats::compute_stats(filtered.iter().copied());
        let by_category = stats::by_category(filtered.iter().copied());
        let compared = self.compare.compared(&filtered);

        View {
            categories: self.catalog.categories(),
            filtered,
            stats,
            by_category,
            compared,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(PriceBounds::default())
    }
}

/// Pure transition: consume a state, return the next one
pub fn reduce(mut state: AppState, action: Action) -> AppState {
    state.dispatch(action);
    state
}

// ============================================================================
// DERIVED VIEW
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct View<'a> {
    /// Category selector choices (`All` first)
    pub categories: Vec<CategoryFilter>,

    /// Items passing every filter, in catalog order
    pub filtered: Vec<&'a MenuItem>,

    pub stats: PriceStats,

    /// Chart data: one bar per category in first-appearance order
    pub by_category: Vec<CategoryAggregate>,

    /// Pinned items that are still visible
    pub compared: Vec<&'a MenuItem>,
}

impl View<'_> {
    /// Caption under the items table
    pub fn caption(&self) -> String {
        table_caption(self.filtered.len())
    }
}

pub fn table_caption(count: usize) -> String {
    if count == 0 {
        "No items!".to_string()
    } else {
        format!("{} items", count)
    }
}
