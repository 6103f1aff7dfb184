// Menu Compare - Core Library
// Exposes the comparison model for use in the TUI, the API server, and tests

pub mod model;
pub mod error;
pub mod venues;
pub mod catalog;
pub mod filter;
pub mod stats;
pub mod compare;
pub mod state;
pub mod config;

// Re-export commonly used types
pub use model::{MenuItem, Venue};
pub use error::MenuError;
pub use venues::VenueRegistry;
pub use catalog::{demo, import_csv, load_csv, ImportReport, ItemCatalog};
pub use filter::{CategoryFilter, FilterState, Handle, PriceBounds, PriceRange};
pub use stats::{by_category, compute_stats, currency, CategoryAggregate, PriceStats};
pub use compare::ComparisonSet;
pub use state::{reduce, table_caption, Action, AppState, View};
pub use config::MenuConfig;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build the starting state from configuration: demo seed and/or CSV import
pub fn load_state(config: &MenuConfig) -> error::Result<AppState> {
    let (mut venues, mut catalog) = if config.catalog.demo {
        demo()
    } else {
        (VenueRegistry::new(), ItemCatalog::new())
    };

    if let Some(path) = &config.catalog.csv {
        load_csv(path, &mut venues, &mut catalog)?;
    }

    Ok(AppState::with_data(config.slider, venues, catalog))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_state_empty_by_default() {
        let state = load_state(&MenuConfig::default()).unwrap();
        assert!(state.catalog.is_empty());
        assert!(state.venues.is_empty());
    }

    #[test]
    fn test_load_state_with_demo() {
        let mut config = MenuConfig::default();
        config.catalog.demo = true;

        let state = load_state(&config).unwrap();
        assert_eq!(state.catalog.len(), 6);
        assert_eq!(state.filter.price_range.high(), 20.0);
    }
}
