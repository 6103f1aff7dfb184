// 🧾 Item Catalog - every menu item entered for every venue
//
// Items come from three places: the demo seed, CSV import, and explicit
// entry through `add_item`. All three go through the registry so the
// venue reference is valid when the item is created.

use crate::error::{MenuError, Result};
use crate::filter::CategoryFilter;
use crate::model::{new_id, MenuItem, Venue};
use crate::venues::VenueRegistry;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Default, Serialize)]
pub struct ItemCatalog {
    items: Vec<MenuItem>,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a new item for a registered venue.
    ///
    /// The venue name is copied from the registry record.
    pub fn add_item(
        &mut self,
        venues: &VenueRegistry,
        venue_id: &str,
        name: &str,
        category: &str,
        price: f64,
    ) -> Result<&MenuItem> {
        let venue = venues.get(venue_id).ok_or_else(|| MenuError::UnknownVenue {
            id: venue_id.to_string(),
        })?;

        let name = name.trim();
        let category = category.trim();
        if name.is_empty() {
            return Err(MenuError::BlankField { field: "name" });
        }
        if category.is_empty() {
            return Err(MenuError::BlankField { field: "category" });
        }
        if !price.is_finite() || price < 0.0 {
            return Err(MenuError::InvalidPrice { price });
        }

        let item = MenuItem {
            id: new_id(),
            name: name.to_string(),
            venue_id: venue.id.clone(),
            venue_name: venue.name.clone(),
            category: category.to_string(),
            price,
        };
        debug!(id = %item.id, venue = %item.venue_name, price, "item added");

        self.items.push(item);
        Ok(&self.items[self.items.len() - 1])
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Category choices: `All` first, then each distinct category in order
    /// of first appearance in the catalog
    pub fn categories(&self) -> Vec<CategoryFilter> {
        let distinct: IndexSet<&str> = self.items.iter().map(|i| i.category.as_str()).collect();

        std::iter::once(CategoryFilter::All)
            .chain(
                distinct
                    .into_iter()
                    .map(|c| CategoryFilter::Category(c.to_string())),
            )
            .collect()
    }
}

// ============================================================================
// DEMO SEED
// ============================================================================

/// Three Philadelphia cafés and six items, every venue active
pub fn demo() -> (VenueRegistry, ItemCatalog) {
    let mut venues = VenueRegistry::new();
    for venue in [
        Venue::with_id("v1", "Bean & Bloom", "123 Walnut St"),
        Venue::with_id("v2", "Riverfront Roasters", "45 Schuylkill Ave"),
        Venue::with_id("v3", "Market Square Café", "9 Market St"),
    ] {
        venues.insert(venue, true);
    }

    let seed = [
        ("i1", "Latte 12oz", "v1", "Coffee", 4.75),
        ("i2", "Cappuccino 12oz", "v1", "Coffee", 4.50),
        ("i3", "Cold Brew 16oz", "v2", "Coffee", 4.25),
        ("i4", "Matcha Latte 12oz", "v2", "Tea", 5.25),
        ("i5", "Croissant", "v1", "Pastry", 3.95),
        ("i6", "Turkey Club", "v3", "Sandwich", 9.50),
    ];

    let items = seed
        .into_iter()
        .filter_map(|(id, name, venue_id, category, price)| {
            venues.get(venue_id).map(|venue| MenuItem {
                id: id.to_string(),
                name: name.to_string(),
                venue_id: venue.id.clone(),
                venue_name: venue.name.clone(),
                category: category.to_string(),
                price,
            })
        })
        .collect();

    (venues, ItemCatalog { items })
}

// ============================================================================
// CSV IMPORT
// ============================================================================

/// One row of a menu CSV: `venue,address,item,category,price`
#[derive(Debug, Deserialize)]
struct CsvRow {
    venue: String,
    #[serde(default)]
    address: String,
    item: String,
    category: String,
    price: f64,
}

/// Outcome of an import
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImportReport {
    pub items_added: usize,
    pub venues_added: usize,
    pub rows_rejected: usize,
}

/// Import menu items from a CSV file into the registry and catalog
pub fn load_csv(path: &Path, venues: &mut VenueRegistry, catalog: &mut ItemCatalog) -> Result<ImportReport> {
    let file = std::fs::File::open(path)?;
    let report = import_csv(file, venues, catalog)?;
    info!(
        path = %path.display(),
        items = report.items_added,
        venues = report.venues_added,
        rejected = report.rows_rejected,
        "menu CSV imported"
    );
    Ok(report)
}

/// Import from any reader. Bad rows are skipped and counted; I/O errors abort.
pub fn import_csv<R: Read>(
    reader: R,
    venues: &mut VenueRegistry,
    catalog: &mut ItemCatalog,
) -> Result<ImportReport> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut report = ImportReport::default();

    for (index, row) in rdr.deserialize::<CsvRow>().enumerate() {
        // Header is line 1
        let line = index + 2;

        let row = match row {
            Ok(row) => row,
            Err(err) if err.is_io_error() => return Err(err.into()),
            Err(err) => {
                warn!(line, error = %err, "skipping unreadable row");
                report.rows_rejected += 1;
                continue;
            }
        };

        let existing = venues.find_by_name(row.venue.trim()).map(|v| v.id.clone());
        let venue_id = match existing {
            Some(id) => id,
            None => match venues.add_venue(&row.venue, &row.address) {
                Some(venue) => {
                    report.venues_added += 1;
                    venue.id.clone()
                }
                None => {
                    warn!(line, venue = %row.venue, "skipping row: venue needs a name and address");
                    report.rows_rejected += 1;
                    continue;
                }
            },
        };

        match catalog.add_item(venues, &venue_id, &row.item, &row.category, row.price) {
            Ok(_) => report.items_added += 1,
            Err(err) => {
                warn!(line, error = %err, "skipping row");
                report.rows_rejected += 1;
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_add_item_copies_venue_name() {
        let mut venues = VenueRegistry::new();
        let venue_id = venues.add_venue("Bean & Bloom", "123 Walnut St").unwrap().id.clone();
        let mut catalog = ItemCatalog::new();

        let item = catalog
            .add_item(&venues, &venue_id, " Latte 12oz ", "Coffee", 4.75)
            .unwrap();

        assert_eq!(item.name, "Latte 12oz");
        assert_eq!(item.venue_id, venue_id);
        assert_eq!(item.venue_name, "Bean & Bloom");
    }

    #[test]
    fn test_add_item_rejects_unknown_venue() {
        let venues = VenueRegistry::new();
        let mut catalog = ItemCatalog::new();

        let err = catalog.add_item(&venues, "ghost", "Latte", "Coffee", 4.75).unwrap_err();
        assert!(matches!(err, MenuError::UnknownVenue { .. }));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_add_item_rejects_bad_price_and_blank_fields() {
        let mut venues = VenueRegistry::new();
        let venue_id = venues.add_venue("Bean & Bloom", "123 Walnut St").unwrap().id.clone();
        let mut catalog = ItemCatalog::new();

        assert!(matches!(
            catalog.add_item(&venues, &venue_id, "Latte", "Coffee", -1.0),
            Err(MenuError::InvalidPrice { .. })
        ));
        assert!(matches!(
            catalog.add_item(&venues, &venue_id, "Latte", "Coffee", f64::NAN),
            Err(MenuError::InvalidPrice { .. })
        ));
        assert!(matches!(
            catalog.add_item(&venues, &venue_id, "  ", "Coffee", 1.0),
            Err(MenuError::BlankField { field: "name" })
        ));
        assert!(matches!(
            catalog.add_item(&venues, &venue_id, "Latte", "", 1.0),
            Err(MenuError::BlankField { field: "category" })
        ));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_categories_start_with_all() {
        let (_, catalog) = demo();

        assert_eq!(
            catalog.categories(),
            vec![
                CategoryFilter::All,
                CategoryFilter::Category("Coffee".to_string()),
                CategoryFilter::Category("Tea".to_string()),
                CategoryFilter::Category("Pastry".to_string()),
                CategoryFilter::Category("Sandwich".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_catalog_still_offers_all() {
        assert_eq!(ItemCatalog::new().categories(), vec![CategoryFilter::All]);
    }

    #[test]
    fn test_demo_seed() {
        let (venues, catalog) = demo();

        assert_eq!(venues.len(), 3);
        assert_eq!(venues.active_ids().len(), 3);
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.get("i6").unwrap().venue_name, "Market Square Café");
    }

    #[test]
    fn test_import_csv_registers_venues_once() {
        let data = "\
venue,address,item,category,price
Bean & Bloom,123 Walnut St,Latte 12oz,Coffee,4.75
Bean & Bloom,,Croissant,Pastry,3.95
Riverfront Roasters,45 Schuylkill Ave,Cold Brew 16oz,Coffee,4.25
";
        let mut venues = VenueRegistry::new();
        let mut catalog = ItemCatalog::new();

        let report = import_csv(data.as_bytes(), &mut venues, &mut catalog).unwrap();

        assert_eq!(
            report,
            ImportReport { items_added: 3, venues_added: 2, rows_rejected: 0 }
        );
        assert_eq!(venues.len(), 2);
        assert_eq!(catalog.items()[1].venue_id, catalog.items()[0].venue_id);
    }

    #[test]
    fn test_import_csv_skips_bad_rows() {
        let data = "\
venue,address,item,category,price
Bean & Bloom,123 Walnut St,Latte 12oz,Coffee,4.75
Bean & Bloom,123 Walnut St,Mystery,Coffee,not-a-price
Nowhere Café,,Espresso,Coffee,3.00
Bean & Bloom,123 Walnut St,Refund,Coffee,-2.00
";
        let mut venues = VenueRegistry::new();
        let mut catalog = ItemCatalog::new();

        let report = import_csv(data.as_bytes(), &mut venues, &mut catalog).unwrap();

        assert_eq!(report.items_added, 1);
        assert_eq!(report.rows_rejected, 3);
        assert_eq!(venues.len(), 1);
    }

    #[test]
    fn test_load_csv_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "venue,address,item,category,price").unwrap();
        writeln!(file, "Market Square Café,9 Market St,Turkey Club,Sandwich,9.50").unwrap();

        let mut venues = VenueRegistry::new();
        let mut catalog = ItemCatalog::new();
        let report = load_csv(file.path(), &mut venues, &mut catalog).unwrap();

        assert_eq!(report.items_added, 1);
        assert_eq!(catalog.items()[0].price, 9.50);
    }

    #[test]
    fn test_load_csv_missing_file_is_io_error() {
        let mut venues = VenueRegistry::new();
        let mut catalog = ItemCatalog::new();

        let err = load_csv(Path::new("/definitely/not/here.csv"), &mut venues, &mut catalog).unwrap_err();
        assert!(matches!(err, MenuError::Io(_)));
    }
}
