//! Item catalog aggregation and filtering
//!
//! Filtering is a strict conjunction (active-only, category, name
//! substring), ranking is a stable sort by descending period revenue, and
//! the summary aggregates the filtered set only. Draft validation runs
//! before any mutation touches the list or the remote collaborator.

use chrono::Utc;
use serde::Serialize;
use shared::models::{CatalogItem, ItemCategory};
use shared::{AppError, AppResult};
use uuid::Uuid;

use crate::store::CollectionStore;

/// Margin banding cutoffs (percent)
const MARGIN_FAVORABLE_PCT: f64 = 45.0;
const MARGIN_CAUTION_PCT: f64 = 25.0;

/// Filter state for the items screen
#[derive(Debug, Clone, Default)]
pub struct ItemFilter {
    /// Case-insensitive substring match on the item name, trimmed
    pub search: String,
    /// `None` means "All"
    pub category: Option<ItemCategory>,
    pub only_active: bool,
}

/// Filter then rank by descending period revenue.
///
/// The sort is stable so equal-revenue items keep their prior relative
/// order, and calling twice with the same input yields the same output.
pub fn filter_and_rank(items: &[CatalogItem], filter: &ItemFilter) -> Vec<CatalogItem> {
    let needle = filter.search.trim().to_lowercase();

    let mut rows: Vec<CatalogItem> = items
        .iter()
        .filter(|item| !filter.only_active || item.is_active)
        .filter(|item| filter.category.is_none_or(|c| item.category == c))
        .filter(|item| needle.is_empty() || item.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    rows.sort_by(|a, b| {
        b.period_revenue()
            .partial_cmp(&a.period_revenue())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    rows
}

/// Period summary over the filtered set
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSummary {
    pub revenue: f64,
    pub cost: f64,
    pub profit: f64,
    pub avg_margin_percent: f64,
}

/// Aggregate the filtered rows into the summary card's numbers
pub fn summarize(items: &[CatalogItem]) -> CatalogSummary {
    let revenue: f64 = items.iter().map(CatalogItem::period_revenue).sum();
    let cost: f64 = items.iter().map(CatalogItem::period_cost).sum();
    let profit = revenue - cost;
    let avg_margin_percent = if revenue == 0.0 {
        0.0
    } else {
        profit / revenue * 100.0
    };

    CatalogSummary {
        revenue,
        cost,
        profit,
        avg_margin_percent,
    }
}

/// Display tier for a row's margin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarginBand {
    Favorable,
    Caution,
    Unfavorable,
}

pub fn margin_band(margin_pct: f64) -> MarginBand {
    if margin_pct >= MARGIN_FAVORABLE_PCT {
        MarginBand::Favorable
    } else if margin_pct >= MARGIN_CAUTION_PCT {
        MarginBand::Caution
    } else {
        MarginBand::Unfavorable
    }
}

/// Parse a money field permissively: strip everything that is not a
/// digit, dot or minus sign; default to 0 when nothing parseable remains
pub fn parse_money(input: &str) -> f64 {
    let cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    cleaned.parse().unwrap_or(0.0)
}

/// Parse a quantity field permissively and floor it to a non-negative
/// integer
pub fn parse_quantity(input: &str) -> i64 {
    (parse_money(input).floor() as i64).max(0)
}

/// Raw form input for creating or editing an item
#[derive(Debug, Clone)]
pub struct ItemDraft {
    pub name: String,
    pub category: ItemCategory,
    pub price: String,
    pub cost: String,
    pub qty_sold: String,
    pub is_active: bool,
}

/// Normalized, validated item fields ready to apply
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedItem {
    pub name: String,
    pub category: ItemCategory,
    pub price: f64,
    pub cost: f64,
    pub qty_sold: i64,
    pub is_active: bool,
}

impl ItemDraft {
    /// Validate against the current list; `editing_id` excludes the item
    /// being edited from the duplicate-name check
    pub fn validate(
        &self,
        existing: &[CatalogItem],
        editing_id: Option<&str>,
    ) -> AppResult<ValidatedItem> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Item name is required"));
        }

        let price = parse_money(&self.price);
        if price <= 0.0 {
            return Err(AppError::validation("Price must be greater than $0.00"));
        }

        let cost = parse_money(&self.cost);
        if cost < 0.0 {
            return Err(AppError::validation("Cost cannot be negative"));
        }

        let lowered = name.to_lowercase();
        let collision = existing
            .iter()
            .filter(|item| Some(item.id.as_str()) != editing_id)
            .any(|item| item.name.to_lowercase() == lowered);
        if collision {
            return Err(AppError::conflict(format!(
                "An item named \"{}\" already exists",
                name
            )));
        }

        Ok(ValidatedItem {
            name: name.to_string(),
            category: self.category,
            price,
            cost,
            qty_sold: parse_quantity(&self.qty_sold),
            is_active: self.is_active,
        })
    }
}

impl ValidatedItem {
    /// Materialize a new item with a fresh identifier
    pub fn into_item(self) -> CatalogItem {
        CatalogItem {
            id: format!("item_{}", Uuid::new_v4()),
            name: self.name,
            category: self.category,
            is_active: self.is_active,
            price: self.price,
            cost: self.cost,
            qty_sold: self.qty_sold,
            updated_at: Utc::now(),
        }
    }

    /// Apply onto an existing item, preserving its identifier
    pub fn apply_to(&self, item: &CatalogItem) -> CatalogItem {
        CatalogItem {
            id: item.id.clone(),
            name: self.name.clone(),
            category: self.category,
            is_active: self.is_active,
            price: self.price,
            cost: self.cost,
            qty_sold: self.qty_sold,
            updated_at: Utc::now(),
        }
    }
}

// ========== Imperative actions (optimistic protocol) ==========

/// Create an item through the store after validation
pub async fn create_item(
    store: &mut CollectionStore<CatalogItem>,
    draft: &ItemDraft,
) -> AppResult<CatalogItem> {
    let validated = draft.validate(store.items(), None)?;
    store.create(validated.into_item()).await
}

/// Edit an item in place through the store after validation
pub async fn update_item(
    store: &mut CollectionStore<CatalogItem>,
    id: &str,
    draft: &ItemDraft,
) -> AppResult<CatalogItem> {
    let validated = draft.validate(store.items(), Some(id))?;
    let current = store
        .items()
        .iter()
        .find(|item| item.id == id)
        .cloned()
        .ok_or_else(|| AppError::not_found("Item"))?;
    store.update(validated.apply_to(&current)).await
}

/// Remove an item through the store
pub async fn delete_item(store: &mut CollectionStore<CatalogItem>, id: &str) -> AppResult<()> {
    store.delete(id).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, category: ItemCategory, price: f64, cost: f64, qty: i64) -> CatalogItem {
        CatalogItem {
            id: format!("item_{}", name.to_lowercase().replace(' ', "_")),
            name: name.into(),
            category,
            is_active: true,
            price,
            cost,
            qty_sold: qty,
            updated_at: Utc::now(),
        }
    }

    fn sample() -> Vec<CatalogItem> {
        vec![
            item("Chicken Sandwich", ItemCategory::Entree, 6.5, 2.1, 85),
            item("Waffle Fries", ItemCategory::Side, 2.45, 0.6, 120),
            item("Sweet Tea", ItemCategory::Drink, 2.19, 0.3, 95),
            item("Cookie", ItemCategory::Dessert, 1.89, 0.44, 85),
        ]
    }

    #[test]
    fn test_filter_conjunction() {
        let mut items = sample();
        items[3].is_active = false; // Cookie

        let filter = ItemFilter {
            search: "  co ".into(),
            category: None,
            only_active: true,
        };
        let rows = filter_and_rank(&items, &filter);
        // "co" matches Cookie only, but Cookie is inactive
        assert!(rows.is_empty());

        let filter = ItemFilter {
            search: "co".into(),
            category: None,
            only_active: false,
        };
        let rows = filter_and_rank(&items, &filter);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Cookie");
    }

    #[test]
    fn test_category_filter_exact() {
        let items = sample();
        let filter = ItemFilter {
            category: Some(ItemCategory::Drink),
            ..Default::default()
        };
        let rows = filter_and_rank(&items, &filter);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Sweet Tea");
    }

    #[test]
    fn test_rank_by_period_revenue_desc() {
        let rows = filter_and_rank(&sample(), &ItemFilter::default());
        let revenues: Vec<f64> = rows.iter().map(CatalogItem::period_revenue).collect();
        let mut sorted = revenues.clone();
        sorted.sort_by(|a, b| b.partial_cmp(a).unwrap());
        assert_eq!(revenues, sorted);
        assert_eq!(rows[0].name, "Chicken Sandwich");
    }

    #[test]
    fn test_rank_is_stable_and_idempotent() {
        let mut items = sample();
        // force an exact revenue tie: both 100.0
        items[0].price = 10.0;
        items[0].qty_sold = 10;
        items[1].price = 4.0;
        items[1].qty_sold = 25;

        let once = filter_and_rank(&items, &ItemFilter::default());
        let twice = filter_and_rank(&once, &ItemFilter::default());

        let names: Vec<&str> = once.iter().map(|i| i.name.as_str()).collect();
        let names_again: Vec<&str> = twice.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, names_again);

        // tied items keep input order
        let a = names.iter().position(|n| *n == "Chicken Sandwich").unwrap();
        let b = names.iter().position(|n| *n == "Waffle Fries").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_summary_identities() {
        let items = sample();
        let summary = summarize(&items);
        assert!((summary.profit - (summary.revenue - summary.cost)).abs() < 1e-9);

        let empty = summarize(&[]);
        assert_eq!(empty.revenue, 0.0);
        assert_eq!(empty.avg_margin_percent, 0.0);
    }

    #[test]
    fn test_scenario_inactive_item_excluded_from_summary() {
        let mut items = vec![item("Cookie", ItemCategory::Dessert, 1.89, 0.44, 85)];
        items[0].is_active = false;

        let filter = ItemFilter {
            only_active: true,
            ..Default::default()
        };
        let rows = filter_and_rank(&items, &filter);
        assert!(rows.is_empty());

        let summary = summarize(&rows);
        assert_eq!(summary.revenue, 0.0);
        assert_eq!(summary.profit, 0.0);
    }

    #[test]
    fn test_margin_bands() {
        assert_eq!(margin_band(45.0), MarginBand::Favorable);
        assert_eq!(margin_band(44.9), MarginBand::Caution);
        assert_eq!(margin_band(25.0), MarginBand::Caution);
        assert_eq!(margin_band(24.9), MarginBand::Unfavorable);
        assert_eq!(margin_band(-10.0), MarginBand::Unfavorable);
    }

    #[test]
    fn test_parse_money_permissive() {
        assert_eq!(parse_money("$4.25"), 4.25);
        assert_eq!(parse_money(" 1,250.00 "), 1250.0);
        assert_eq!(parse_money("abc"), 0.0);
        assert_eq!(parse_money(""), 0.0);
        assert_eq!(parse_money("-3.5"), -3.5);
        // double dot fails to parse and defaults to 0
        assert_eq!(parse_money("1.2.3"), 0.0);
    }

    #[test]
    fn test_parse_quantity_floors_non_negative() {
        assert_eq!(parse_quantity("12.9"), 12);
        assert_eq!(parse_quantity("-4"), 0);
        assert_eq!(parse_quantity("85 sold"), 85);
        assert_eq!(parse_quantity(""), 0);
    }

    fn draft(name: &str, price: &str, cost: &str, qty: &str) -> ItemDraft {
        ItemDraft {
            name: name.into(),
            category: ItemCategory::Entree,
            price: price.into(),
            cost: cost.into(),
            qty_sold: qty.into(),
            is_active: true,
        }
    }

    #[test]
    fn test_validate_requires_name_and_positive_price() {
        let items = sample();
        let err = draft("   ", "4.00", "1.00", "5").validate(&items, None).unwrap_err();
        assert_eq!(err, AppError::validation("Item name is required"));

        let err = draft("Lemonade", "0", "1.00", "5").validate(&items, None).unwrap_err();
        assert_eq!(err, AppError::validation("Price must be greater than $0.00"));

        let err = draft("Lemonade", "free", "0", "5").validate(&items, None).unwrap_err();
        assert_eq!(err, AppError::validation("Price must be greater than $0.00"));

        let err = draft("Lemonade", "2.00", "-1", "5").validate(&items, None).unwrap_err();
        assert_eq!(err, AppError::validation("Cost cannot be negative"));
    }

    #[test]
    fn test_validate_rejects_case_insensitive_duplicate() {
        let items = sample();
        let err = draft("  cookie ", "2.00", "0.50", "5")
            .validate(&items, None)
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        // editing the item itself is not a collision
        let cookie_id = items.iter().find(|i| i.name == "Cookie").unwrap().id.clone();
        assert!(draft("COOKIE", "2.00", "0.50", "5")
            .validate(&items, Some(&cookie_id))
            .is_ok());
    }

    #[test]
    fn test_validate_normalizes_fields() {
        let validated = draft("  Spicy Deluxe ", "$5.75", "1.80", "42.7")
            .validate(&sample(), None)
            .unwrap();
        assert_eq!(validated.name, "Spicy Deluxe");
        assert_eq!(validated.price, 5.75);
        assert_eq!(validated.cost, 1.8);
        assert_eq!(validated.qty_sold, 42);
    }
}
