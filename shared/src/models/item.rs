//! Catalog Item Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Menu category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemCategory {
    Entree,
    Side,
    Drink,
    Dessert,
    Sauce,
    Other,
}

impl ItemCategory {
    /// All categories, in display order
    pub const ALL: [ItemCategory; 6] = [
        Self::Entree,
        Self::Side,
        Self::Drink,
        Self::Dessert,
        Self::Sauce,
        Self::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Entree => "Entree",
            Self::Side => "Side",
            Self::Drink => "Drink",
            Self::Dessert => "Dessert",
            Self::Sauce => "Sauce",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Sellable menu entry
///
/// Persisted items always satisfy price > 0 and cost ≥ 0; drafts are
/// validated before any mutation is applied. Margin is derived, never
/// stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: String,
    /// Unique case-insensitively, enforced at write time
    pub name: String,
    pub category: ItemCategory,
    #[serde(rename = "active")]
    pub is_active: bool,
    /// Unit price in dollars
    pub price: f64,
    /// Unit cost in dollars
    pub cost: f64,
    /// Units sold in the current reporting period
    pub qty_sold: i64,
    pub updated_at: DateTime<Utc>,
}

impl CatalogItem {
    /// Revenue for the reporting period (price × quantity sold)
    pub fn period_revenue(&self) -> f64 {
        self.price * self.qty_sold as f64
    }

    /// Cost for the reporting period
    pub fn period_cost(&self) -> f64 {
        self.cost * self.qty_sold as f64
    }

    /// Derived gross margin percentage
    pub fn margin_percent(&self) -> f64 {
        crate::money::margin_percent(self.price, self.cost)
    }
}
