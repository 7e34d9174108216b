//! Dashboard Overview Model
//!
//! The derived view-model the dashboard screen consumes: KPI record,
//! revenue series, top items and the alert list. Produced locally by the
//! engines or fetched from `GET /overview`.

use serde::{Deserialize, Serialize};

/// Reporting range selectable on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OverviewRange {
    #[serde(rename = "1d")]
    Today,
    #[default]
    #[serde(rename = "7d")]
    Week,
    #[serde(rename = "30d")]
    Month,
    #[serde(rename = "ytd")]
    YearToDate,
}

impl OverviewRange {
    /// Wire value, also used in query strings
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Today => "1d",
            Self::Week => "7d",
            Self::Month => "30d",
            Self::YearToDate => "ytd",
        }
    }
}

/// Alert severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Danger,
    Warn,
    Success,
}

/// Severity-tagged alert message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub level: AlertLevel,
    pub text: String,
}

impl Alert {
    pub fn new(level: AlertLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }
}

/// Dashboard KPI record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewKpis {
    pub revenue_today: f64,
    pub orders_today: i64,
    pub avg_ticket_mins: f64,
    pub margin_pct: f64,
    pub revenue_period: f64,
    pub orders_period: i64,
}

/// One point of the revenue trend series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

/// One row of the top-items list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopItemEntry {
    pub name: String,
    pub qty: i64,
    pub revenue: f64,
}

/// Full dashboard payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewResponse {
    pub range: OverviewRange,
    pub kpis: OverviewKpis,
    pub revenue_series: Vec<SeriesPoint>,
    pub top_items: Vec<TopItemEntry>,
    pub alerts: Vec<Alert>,
}
