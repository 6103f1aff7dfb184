// 📊 Statistics Engine - min/max/avg/median over the visible items
// Plus the per-category aggregates behind the bar chart.

use crate::model::MenuItem;
use indexmap::IndexMap;
use serde::Serialize;

/// Format a price for display: leading `$`, exactly two decimals.
///
/// Exact ties round half away from zero (`4.625` -> `$4.63`). `{:.2}` alone
/// would round them to even.
pub fn currency(n: f64) -> String {
    // An x.xx5 tie is only exactly representable as an odd number of eighths
    let eighths = n * 8.0;
    if eighths.fract() == 0.0 && eighths.abs() % 2.0 == 1.0 {
        return format!("${:.2}", (n * 100.0).round() / 100.0);
    }
    format!("${:.2}", n)
}

// ============================================================================
// PRICE STATS
// ============================================================================

/// Summary of a list of prices. All zeros for an empty list.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PriceStats {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
    pub median: f64,
}

/// Sorted ascending copy; the input is left untouched
fn sorted(prices: &[f64]) -> Vec<f64> {
    let mut sorted = prices.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted
}

/// Middle element for odd counts, mean of the two middle elements for even.
/// Expects an ascending, non-empty slice.
fn median_of_sorted(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

fn mean(prices: &[f64]) -> f64 {
    prices.iter().sum::<f64>() / prices.len() as f64
}

/// Summarize raw prices
pub fn summarize(prices: &[f64]) -> PriceStats {
    if prices.is_empty() {
        return PriceStats::default();
    }

    let sorted = sorted(prices);
    PriceStats {
        min: sorted[0],
        max: sorted[sorted.len() - 1],
        avg: mean(&sorted),
        median: median_of_sorted(&sorted),
    }
}

/// Summarize the prices of a list of items
pub fn compute_stats<'a>(items: impl IntoIterator<Item = &'a MenuItem>) -> PriceStats {
    let prices: Vec<f64> = items.into_iter().map(|i| i.price).collect();
    summarize(&prices)
}

// ============================================================================
// CATEGORY AGGREGATES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryAggregate {
    pub category: String,
    pub avg: f64,
    pub count: usize,
    pub median: f64,
}

/// Group by category, in order of first appearance.
///
/// The median is taken over the category's own sorted prices.
pub fn by_category<'a>(items: impl IntoIterator<Item = &'a MenuItem>) -> Vec<CategoryAggregate> {
    let mut buckets: IndexMap<&str, Vec<f64>> = IndexMap::new();

    for item in items {
        buckets.entry(item.category.as_str()).or_default().push(item.price);
    }

    buckets
        .into_iter()
        .map(|(category, prices)| CategoryAggregate {
            category: category.to_string(),
            avg: mean(&prices),
            count: prices.len(),
            median: median_of_sorted(&sorted(&prices)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn create_test_item(name: &str, category: &str, price: f64) -> MenuItem {
        MenuItem {
            id: name.to_lowercase(),
            name: name.to_string(),
            venue_id: "v1".to_string(),
            venue_name: "Bean & Bloom".to_string(),
            category: category.to_string(),
            price,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_empty_list_is_all_zero() {
        let stats = compute_stats(&Vec::<MenuItem>::new());
        assert_eq!(stats, PriceStats { min: 0.0, max: 0.0, avg: 0.0, median: 0.0 });
    }

    #[test]
    fn test_stats_example() {
        let items = vec![
            create_test_item("Latte", "Coffee", 4.75),
            create_test_item("Cappuccino", "Coffee", 4.50),
            create_test_item("Turkey Club", "Sandwich", 9.50),
        ];

        let stats = compute_stats(&items);
        assert_close(stats.min, 4.50);
        assert_close(stats.max, 9.50);
        assert_close(stats.avg, 6.25);
        assert_close(stats.median, 4.75);
    }

    #[test]
    fn test_even_count_median_is_mean_of_middle_pair() {
        let stats = summarize(&[9.0, 1.0, 3.0, 5.0]);
        assert_close(stats.median, 4.0);
        assert_close(stats.avg, 4.5);
    }

    #[test]
    fn test_summarize_does_not_reorder_input() {
        let prices = vec![3.0, 1.0, 2.0];
        let _ = summarize(&prices);
        assert_eq!(prices, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_stats_are_ordered() {
        let lists: Vec<Vec<f64>> = vec![
            vec![0.0],
            vec![2.5, 2.5],
            vec![19.75, 0.25, 7.0],
            vec![1.0, 100.0, 3.0, 3.0, 4.25, 8.5],
        ];

        for prices in lists {
            let stats = summarize(&prices);
            assert!(stats.min <= stats.median && stats.median <= stats.max, "{prices:?}");
            assert!(stats.min <= stats.avg && stats.avg <= stats.max, "{prices:?}");
        }
    }

    #[test]
    fn test_by_category_keeps_first_appearance_order() {
        let items = vec![
            create_test_item("Croissant", "Pastry", 3.95),
            create_test_item("Latte", "Coffee", 4.75),
            create_test_item("Muffin", "Pastry", 3.05),
            create_test_item("Turkey Club", "Sandwich", 9.50),
        ];

        let categories: Vec<String> = by_category(&items).into_iter().map(|a| a.category).collect();
        assert_eq!(categories, vec!["Pastry", "Coffee", "Sandwich"]);
    }

    #[test]
    fn test_by_category_avg_and_count() {
        let items = vec![
            create_test_item("Latte", "Coffee", 4.75),
            create_test_item("Cappuccino", "Coffee", 4.50),
            create_test_item("Cold Brew", "Coffee", 4.25),
        ];

        let aggregates = by_category(&items);
        assert_eq!(aggregates.len(), 1);
        assert_eq!(aggregates[0].count, 3);
        assert_close(aggregates[0].avg, 4.50);
    }

    // Category medians sort the category's prices; they are not the first
    // price seen.
    #[test]
    fn test_category_median_sorts_prices() {
        let items = vec![
            create_test_item("Big", "Coffee", 6.00),
            create_test_item("Small", "Coffee", 2.00),
            create_test_item("Medium", "Coffee", 4.00),
            create_test_item("Scone", "Pastry", 5.00),
            create_test_item("Roll", "Pastry", 1.00),
        ];

        let aggregates = by_category(&items);
        assert_close(aggregates[0].median, 4.00);
        assert_close(aggregates[1].median, 3.00);
    }

    #[test]
    fn test_currency_formats_two_decimals() {
        assert_eq!(currency(4.5), "$4.50");
        assert_eq!(currency(0.0), "$0.00");
        assert_eq!(currency(9.5), "$9.50");
        assert_eq!(currency(20.0), "$20.00");
    }

    #[test]
    fn test_currency_rounds_ties_up() {
        assert_eq!(currency(4.125), "$4.13");
        assert_eq!(currency(0.125), "$0.13");
        assert_eq!(currency(4.875), "$4.88");

        // Median of 4.50 and 4.75 is exactly 4.625
        assert_eq!(currency(summarize(&[4.50, 4.75]).median), "$4.63");

        // Not a tie in binary: 1.005 is stored just below 1.005
        assert_eq!(currency(1.005), "$1.00");
    }
}
