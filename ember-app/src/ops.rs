//! Ticket aggregation engine
//!
//! Classifies tickets by current status and derives the operations
//! screen's aggregate record: average duration, on-time rate, cancellation
//! rate, revenue, a fixed duration histogram and the rule-based alerts.
//! The engine never performs status transitions.

use serde::Serialize;
use shared::models::{Alert, AlertLevel, Ticket, TicketStatus};

/// Histogram bucket labels, fixed boundaries in minutes
const BUCKET_LABELS: [&str; 5] = ["0-10m", "11-15m", "16-20m", "21-30m", "30m+"];

/// Avg-duration thresholds (minutes)
const AVG_DANGER_MINS: f64 = 22.0;
const AVG_WARN_MINS: f64 = 18.0;

/// On-time-rate thresholds (percent)
const ON_TIME_DANGER_PCT: f64 = 75.0;
const ON_TIME_WARN_PCT: f64 = 90.0;

/// Cancelled-rate threshold (percent); this rule has no danger tier
const CANCELLED_WARN_PCT: f64 = 10.0;

/// One bucket of the completed-ticket duration histogram
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistogramBucket {
    pub label: &'static str,
    pub count: usize,
}

/// Aggregate record for the operations screen
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketStats {
    pub total: usize,
    /// PENDING, IN_PROGRESS or READY
    pub active: usize,
    pub completed: usize,
    pub cancelled: usize,
    pub avg_duration_mins: f64,
    /// Percentage of completed tickets at or under their promised duration
    pub on_time_rate: f64,
    /// Percentage of all tickets that were cancelled
    pub cancelled_rate: f64,
    /// Unconditional sum over every ticket, cancelled included
    pub revenue_total: f64,
    pub histogram: Vec<HistogramBucket>,
    pub alerts: Vec<Alert>,
}

/// A completed ticket that ran past its promised duration
pub fn is_late(ticket: &Ticket) -> bool {
    matches!(ticket.completed_duration(), Some(actual) if actual > ticket.promised_mins)
}

fn bucket_index(mins: i64) -> usize {
    match mins {
        ..=10 => 0,
        11..=15 => 1,
        16..=20 => 2,
        21..=30 => 3,
        _ => 4,
    }
}

/// Compute the aggregate record over a ticket list
pub fn aggregate(tickets: &[Ticket]) -> TicketStats {
    let total = tickets.len();
    let completed: Vec<&Ticket> = tickets
        .iter()
        .filter(|t| t.status == TicketStatus::Completed)
        .collect();
    let cancelled = tickets
        .iter()
        .filter(|t| t.status == TicketStatus::Cancelled)
        .count();
    let active = total - completed.len() - cancelled;

    // completed tickets missing a duration count as 0 minutes
    let durations: Vec<i64> = completed
        .iter()
        .map(|t| t.completed_duration().unwrap_or(0))
        .collect();

    let avg_duration_mins = if durations.is_empty() {
        0.0
    } else {
        durations.iter().sum::<i64>() as f64 / durations.len() as f64
    };

    // exactly-on-promise counts as on-time
    let on_time = completed
        .iter()
        .filter(|t| t.completed_duration().unwrap_or(0) <= t.promised_mins)
        .count();
    let on_time_rate = if completed.is_empty() {
        0.0
    } else {
        on_time as f64 / completed.len() as f64 * 100.0
    };

    let cancelled_rate = if total == 0 {
        0.0
    } else {
        cancelled as f64 / total as f64 * 100.0
    };

    let revenue_total = tickets.iter().map(|t| t.revenue).sum();

    let mut counts = [0usize; 5];
    for mins in &durations {
        counts[bucket_index(*mins)] += 1;
    }
    let histogram = BUCKET_LABELS
        .iter()
        .copied()
        .zip(counts)
        .map(|(label, count)| HistogramBucket { label, count })
        .collect();

    let alerts = build_alerts(avg_duration_mins, on_time_rate, cancelled_rate);

    TicketStats {
        total,
        active,
        completed: completed.len(),
        cancelled,
        avg_duration_mins,
        on_time_rate,
        cancelled_rate,
        revenue_total,
        histogram,
        alerts,
    }
}

/// Three independent rules; each fires exactly one alert, no
/// short-circuiting between them
fn build_alerts(avg_mins: f64, on_time_rate: f64, cancelled_rate: f64) -> Vec<Alert> {
    let mut alerts = Vec::with_capacity(3);

    alerts.push(if avg_mins > AVG_DANGER_MINS {
        Alert::new(
            AlertLevel::Danger,
            format!("Avg ticket time {:.0} min, kitchen is falling behind", avg_mins),
        )
    } else if avg_mins > AVG_WARN_MINS {
        Alert::new(
            AlertLevel::Warn,
            format!("Avg ticket time {:.0} min, trending slow", avg_mins),
        )
    } else {
        Alert::new(AlertLevel::Success, "Ticket times on target")
    });

    alerts.push(if on_time_rate < ON_TIME_DANGER_PCT {
        Alert::new(
            AlertLevel::Danger,
            format!("On-time rate {:.0}%, below the 75% floor", on_time_rate),
        )
    } else if on_time_rate < ON_TIME_WARN_PCT {
        Alert::new(
            AlertLevel::Warn,
            format!("On-time rate {:.0}%, below the 90% goal", on_time_rate),
        )
    } else {
        Alert::new(
            AlertLevel::Success,
            format!("On-time rate holding at {:.0}%", on_time_rate),
        )
    });

    alerts.push(if cancelled_rate > CANCELLED_WARN_PCT {
        Alert::new(
            AlertLevel::Warn,
            format!("{:.0}% of tickets cancelled", cancelled_rate),
        )
    } else {
        Alert::new(AlertLevel::Success, "Cancellation rate healthy")
    });

    alerts
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn ticket(status: TicketStatus, promised: i64, actual: Option<i64>, revenue: f64) -> Ticket {
        Ticket {
            id: format!("t_{}", uuid::Uuid::new_v4()),
            customer: "Walk-in".into(),
            created_at: Utc::now(),
            promised_mins: promised,
            duration_mins: actual,
            status,
            items: 1,
            revenue,
        }
    }

    fn completed(promised: i64, actual: i64) -> Ticket {
        ticket(TicketStatus::Completed, promised, Some(actual), 20.0)
    }

    #[test]
    fn test_empty_list_is_all_zeroes() {
        let stats = aggregate(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.avg_duration_mins, 0.0);
        assert_eq!(stats.on_time_rate, 0.0);
        assert_eq!(stats.cancelled_rate, 0.0);
        assert_eq!(stats.revenue_total, 0.0);
        assert!(stats.histogram.iter().all(|b| b.count == 0));
        // the three rules still each produce one alert
        assert_eq!(stats.alerts.len(), 3);
    }

    #[test]
    fn test_partition_counts() {
        let tickets = vec![
            ticket(TicketStatus::Pending, 15, None, 10.0),
            ticket(TicketStatus::InProgress, 15, None, 30.0),
            ticket(TicketStatus::Ready, 15, None, 25.0),
            completed(15, 12),
            ticket(TicketStatus::Cancelled, 15, None, 0.0),
        ];
        let stats = aggregate(&tickets);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.active, 3);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.cancelled, 1);
        assert_eq!(stats.cancelled_rate, 20.0);
    }

    #[test]
    fn test_revenue_sums_unconditionally() {
        let tickets = vec![
            completed(15, 12),
            ticket(TicketStatus::Cancelled, 15, None, 7.5),
        ];
        assert_eq!(aggregate(&tickets).revenue_total, 27.5);
    }

    #[test]
    fn test_on_time_tie_counts_as_on_time() {
        let tickets = vec![completed(18, 18), completed(18, 19)];
        let stats = aggregate(&tickets);
        assert_eq!(stats.on_time_rate, 50.0);
    }

    #[test]
    fn test_on_time_and_late_partition_completed() {
        let tickets: Vec<Ticket> = (0..7)
            .map(|i| completed(15, 10 + 2 * i))
            .chain(std::iter::once(ticket(TicketStatus::Ready, 15, Some(40), 0.0)))
            .collect();
        let stats = aggregate(&tickets);

        let late = tickets.iter().filter(|t| is_late(t)).count();
        let late_rate = late as f64 / stats.completed as f64 * 100.0;
        assert!((stats.on_time_rate + late_rate - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_histogram_boundaries() {
        let tickets = vec![
            completed(30, 0),
            completed(30, 10), // inclusive upper edge of first bucket
            completed(30, 11),
            completed(30, 15),
            completed(30, 16),
            completed(30, 20),
            completed(30, 21),
            completed(30, 30), // inclusive upper edge of fourth bucket
            completed(30, 31),
        ];
        let stats = aggregate(&tickets);
        let counts: Vec<usize> = stats.histogram.iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![2, 2, 2, 2, 1]);
        assert_eq!(counts.iter().sum::<usize>(), stats.completed);
    }

    #[test]
    fn test_histogram_ignores_non_completed() {
        let tickets = vec![
            completed(20, 12),
            ticket(TicketStatus::InProgress, 20, Some(12), 0.0),
            ticket(TicketStatus::Cancelled, 20, Some(12), 0.0),
        ];
        let stats = aggregate(&tickets);
        let total: usize = stats.histogram.iter().map(|b| b.count).sum();
        assert_eq!(total, 1);
    }

    #[test]
    fn test_scenario_exact_promise_in_sixteen_twenty_bucket() {
        let stats = aggregate(&[completed(18, 18)]);
        assert_eq!(stats.on_time_rate, 100.0);
        let bucket = stats.histogram.iter().find(|b| b.label == "16-20m").unwrap();
        assert_eq!(bucket.count, 1);
    }

    #[test]
    fn test_avg_duration_alert_tiers() {
        // avg 23 -> danger
        let stats = aggregate(&[completed(30, 23)]);
        assert_eq!(stats.alerts[0].level, AlertLevel::Danger);
        // avg exactly 22 -> warn (danger requires strictly greater)
        let stats = aggregate(&[completed(30, 22)]);
        assert_eq!(stats.alerts[0].level, AlertLevel::Warn);
        // avg exactly 18 -> ok
        let stats = aggregate(&[completed(30, 18)]);
        assert_eq!(stats.alerts[0].level, AlertLevel::Success);
    }

    #[test]
    fn test_on_time_alert_tiers() {
        // 1 of 2 on time -> 50% -> danger
        let stats = aggregate(&[completed(15, 10), completed(15, 20)]);
        assert_eq!(stats.alerts[1].level, AlertLevel::Danger);

        // 8 of 10 -> 80% -> warn
        let tickets: Vec<Ticket> = (0..8)
            .map(|_| completed(15, 10))
            .chain((0..2).map(|_| completed(15, 20)))
            .collect();
        assert_eq!(aggregate(&tickets).alerts[1].level, AlertLevel::Warn);

        // 9 of 10 -> 90% -> ok (warn requires strictly below 90)
        let tickets: Vec<Ticket> = (0..9)
            .map(|_| completed(15, 10))
            .chain(std::iter::once(completed(15, 20)))
            .collect();
        assert_eq!(aggregate(&tickets).alerts[1].level, AlertLevel::Success);
    }

    #[test]
    fn test_cancelled_alert_has_no_danger_tier() {
        // 50% cancelled still only warns
        let tickets = vec![
            completed(15, 10),
            ticket(TicketStatus::Cancelled, 15, None, 0.0),
        ];
        let stats = aggregate(&tickets);
        assert_eq!(stats.alerts[2].level, AlertLevel::Warn);

        // exactly 10% is not over the threshold
        let tickets: Vec<Ticket> = (0..9)
            .map(|_| completed(15, 10))
            .chain(std::iter::once(ticket(TicketStatus::Cancelled, 15, None, 0.0)))
            .collect();
        assert_eq!(aggregate(&tickets).alerts[2].level, AlertLevel::Success);
    }

    #[test]
    fn test_is_late_requires_completed() {
        assert!(is_late(&completed(15, 16)));
        assert!(!is_late(&completed(15, 15)));
        assert!(!is_late(&ticket(TicketStatus::Ready, 15, Some(40), 0.0)));
    }
}
