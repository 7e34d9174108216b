//! Dashboard overview derivation
//!
//! Builds the dashboard payload from the locally owned ticket and item
//! lists. The fixture data source serves this; the live variant fetches
//! the same shape from `GET /overview`.

use chrono::Utc;
use shared::models::{
    CatalogItem, OverviewKpis, OverviewRange, OverviewResponse, SeriesPoint, Ticket, TopItemEntry,
};

use crate::catalog::{self, ItemFilter};
use crate::ops;

/// Rows shown in the top-items card
const TOP_ITEM_COUNT: usize = 4;

fn series_label(ticket: &Ticket, range: OverviewRange) -> String {
    let format = match range {
        OverviewRange::Today => "%H:00",
        OverviewRange::Week => "%a",
        OverviewRange::Month => "%d",
        OverviewRange::YearToDate => "%b",
    };
    ticket.created_at.format(format).to_string()
}

/// Fold tickets into a chronological revenue series, one point per label
/// run (hour, weekday, day or month depending on the range)
pub fn revenue_series(tickets: &[Ticket], range: OverviewRange) -> Vec<SeriesPoint> {
    let mut ordered: Vec<&Ticket> = tickets.iter().collect();
    ordered.sort_by_key(|t| t.created_at);

    let mut series: Vec<SeriesPoint> = Vec::new();
    for ticket in ordered {
        let label = series_label(ticket, range);
        match series.last_mut() {
            Some(point) if point.label == label => point.value += ticket.revenue,
            _ => series.push(SeriesPoint {
                label,
                value: ticket.revenue,
            }),
        }
    }
    series
}

/// Derive the full dashboard payload.
///
/// The ticket list is assumed to be scoped to the requested range by its
/// owner; "today" KPIs are computed from creation dates within it.
pub fn derive_overview(
    range: OverviewRange,
    tickets: &[Ticket],
    items: &[CatalogItem],
) -> OverviewResponse {
    let stats = ops::aggregate(tickets);
    let summary = catalog::summarize(items);

    let today = Utc::now().date_naive();
    let todays: Vec<&Ticket> = tickets
        .iter()
        .filter(|t| t.created_at.date_naive() == today)
        .collect();

    let kpis = OverviewKpis {
        revenue_today: todays.iter().map(|t| t.revenue).sum(),
        orders_today: todays.len() as i64,
        avg_ticket_mins: stats.avg_duration_mins,
        margin_pct: summary.avg_margin_percent,
        revenue_period: stats.revenue_total,
        orders_period: stats.total as i64,
    };

    let top_items = catalog::filter_and_rank(items, &ItemFilter::default())
        .into_iter()
        .take(TOP_ITEM_COUNT)
        .map(|item| TopItemEntry {
            revenue: item.period_revenue(),
            qty: item.qty_sold,
            name: item.name,
        })
        .collect();

    OverviewResponse {
        range,
        kpis,
        revenue_series: revenue_series(tickets, range),
        top_items,
        alerts: stats.alerts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use chrono::{Duration, TimeZone};
    use shared::models::TicketStatus;

    fn ticket_at(created: chrono::DateTime<Utc>, revenue: f64) -> Ticket {
        Ticket {
            id: format!("t_{}", uuid::Uuid::new_v4()),
            customer: "Walk-in".into(),
            created_at: created,
            promised_mins: 15,
            duration_mins: Some(12),
            status: TicketStatus::Completed,
            items: 1,
            revenue,
        }
    }

    #[test]
    fn test_series_groups_consecutive_labels() {
        let monday = Utc.with_ymd_and_hms(2026, 8, 3, 11, 0, 0).unwrap();
        let tickets = vec![
            ticket_at(monday, 100.0),
            ticket_at(monday + Duration::hours(2), 50.0),
            ticket_at(monday + Duration::days(1), 75.0),
        ];
        let series = revenue_series(&tickets, OverviewRange::Week);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].label, "Mon");
        assert_eq!(series[0].value, 150.0);
        assert_eq!(series[1].label, "Tue");
        assert_eq!(series[1].value, 75.0);
    }

    #[test]
    fn test_series_is_chronological_regardless_of_input_order() {
        let monday = Utc.with_ymd_and_hms(2026, 8, 3, 11, 0, 0).unwrap();
        let tickets = vec![
            ticket_at(monday + Duration::days(2), 10.0),
            ticket_at(monday, 20.0),
        ];
        let series = revenue_series(&tickets, OverviewRange::Week);
        assert_eq!(series[0].label, "Mon");
        assert_eq!(series[1].label, "Wed");
    }

    #[test]
    fn test_overview_kpis_cover_period() {
        let tickets = fixtures::sample_tickets();
        let items = fixtures::sample_items();
        let overview = derive_overview(OverviewRange::Week, &tickets, &items);

        assert_eq!(overview.kpis.orders_period, tickets.len() as i64);
        let period_revenue: f64 = tickets.iter().map(|t| t.revenue).sum();
        assert!((overview.kpis.revenue_period - period_revenue).abs() < 1e-9);

        // three alert rules, one alert each
        assert_eq!(overview.alerts.len(), 3);
        assert!(overview.top_items.len() <= TOP_ITEM_COUNT);
    }

    #[test]
    fn test_top_items_sorted_by_revenue() {
        let items = fixtures::sample_items();
        let overview = derive_overview(OverviewRange::Week, &[], &items);
        let revenues: Vec<f64> = overview.top_items.iter().map(|t| t.revenue).collect();
        let mut sorted = revenues.clone();
        sorted.sort_by(|a, b| b.partial_cmp(a).unwrap());
        assert_eq!(revenues, sorted);
    }
}
