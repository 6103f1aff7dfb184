// 🔎 Filter Pipeline - derive the visible items from the catalog
//
// An item is shown when ALL of these hold:
// - query (case-insensitive) is empty or a substring of "name venue category"
// - category filter is All or equals the item category
// - low <= price <= high
// - active venue set is empty, or contains the item's venue id

use crate::error::{MenuError, Result};
use crate::model::MenuItem;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// CATEGORY FILTER
// ============================================================================

/// Category selector. `All` is a variant, so a real category literally
/// named "All" stays distinguishable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(selected) => selected == category,
        }
    }

    /// Label shown in selectors
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Category(name) => name,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// PRICE RANGE
// ============================================================================

/// Slider bounds: the range handles live in `[min, max]` and move by `step`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for PriceBounds {
    fn default() -> Self {
        PriceBounds {
            min: 0.0,
            max: 20.0,
            step: 0.25,
        }
    }
}

impl PriceBounds {
    pub fn validate(&self) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(MenuError::InvalidConfig {
                reason: format!("slider min {} must not exceed max {}", self.min, self.max),
            });
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(MenuError::InvalidConfig {
                reason: format!("slider step {} must be positive", self.step),
            });
        }
        Ok(())
    }

    fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }
}

/// Which slider handle to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Handle {
    Low,
    High,
}

/// Inclusive price window. Always `low <= high`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    low: f64,
    high: f64,
}

impl PriceRange {
    /// Full-width range for the given bounds
    pub fn full(bounds: &PriceBounds) -> Self {
        PriceRange {
            low: bounds.min,
            high: bounds.max,
        }
    }

    /// Build a range from two handle values in any order, clamped to bounds
    pub fn clamped(a: f64, b: f64, bounds: &PriceBounds) -> Self {
        let a = bounds.clamp(a);
        let b = bounds.clamp(b);
        PriceRange {
            low: a.min(b),
            high: a.max(b),
        }
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.low && price <= self.high
    }

    /// Move one handle by `steps` slider steps (negative moves down).
    /// Handles may cross; the result is re-ordered like a dual slider.
    pub fn nudge(&self, handle: Handle, steps: i32, bounds: &PriceBounds) -> Self {
        let delta = f64::from(steps) * bounds.step;
        match handle {
            Handle::Low => Self::clamped(self.low + delta, self.high, bounds),
            Handle::High => Self::clamped(self.low, self.high + delta, bounds),
        }
    }
}

// ============================================================================
// FILTER STATE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterState {
    pub query: String,
    pub category: CategoryFilter,
    pub price_range: PriceRange,
}

impl FilterState {
    pub fn new(bounds: &PriceBounds) -> Self {
        FilterState {
            query: String::new(),
            category: CategoryFilter::All,
            price_range: PriceRange::full(bounds),
        }
    }

    /// Check one item against the text, category and price criteria plus
    /// the active venue set
    pub fn matches(&self, item: &MenuItem, active_venues: &IndexSet<String>) -> bool {
        let matches_query = self.query.is_empty()
            || item
                .search_text()
                .to_lowercase()
                .contains(&self.query.to_lowercase());
        let in_category = self.category.matches(&item.category);
        let in_range = self.price_range.contains(item.price);
        let in_venue = active_venues.is_empty() || active_venues.contains(&item.venue_id);

        matches_query && in_category && in_range && in_venue
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(&PriceBounds::default())
    }
}

/// Run the pipeline: keep catalog order, borrow matching items
pub fn apply<'a>(
    items: &'a [MenuItem],
    filter: &FilterState,
    active_venues: &IndexSet<String>,
) -> Vec<&'a MenuItem> {
    items
        .iter()
        .filter(|item| filter.matches(item, active_venues))
        .collect()
}
