//! Ticket Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ticket status
///
/// Lifecycle: PENDING → IN_PROGRESS → READY → COMPLETED, with CANCELLED
/// reachable from any non-terminal state. COMPLETED and CANCELLED are
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    #[default]
    Pending,
    InProgress,
    Ready,
    Completed,
    Cancelled,
}

impl TicketStatus {
    /// Terminal statuses accept no further transitions
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Whether `next` is a legal transition from this status
    pub fn can_transition_to(&self, next: TicketStatus) -> bool {
        match (self, next) {
            (Self::Pending, Self::InProgress)
            | (Self::InProgress, Self::Ready)
            | (Self::Ready, Self::Completed) => true,
            (current, Self::Cancelled) => !current.is_terminal(),
            _ => false,
        }
    }

    /// True while the ticket still needs kitchen attention
    pub fn is_active(&self) -> bool {
        !self.is_terminal()
    }
}

/// Operational work order (read-only sample data in this scope)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,
    pub customer: String,
    pub created_at: DateTime<Utc>,
    /// SLA target in minutes
    pub promised_mins: i64,
    /// Created → completed wall time in minutes; set once the ticket
    /// completes
    pub duration_mins: Option<i64>,
    pub status: TicketStatus,
    pub items: i32,
    pub revenue: f64,
}

impl Ticket {
    /// Actual duration, meaningful only for completed tickets.
    ///
    /// For every other status the duration is reported as absent even when
    /// a stale value is present on the record.
    pub fn completed_duration(&self) -> Option<i64> {
        if self.status == TicketStatus::Completed {
            self.duration_mins
        } else {
            None
        }
    }
}
