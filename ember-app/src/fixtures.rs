//! Fixture data
//!
//! Canned lists backing the offline variant's `MemorySource` and the
//! tests. Quantities and prices mirror the catering menu the dashboard
//! was built around.

use chrono::{Duration, Utc};
use shared::models::{
    CatalogItem, ItemCategory, Role, Ticket, TicketStatus, UserAccount,
};

fn ticket(
    id: &str,
    customer: &str,
    minutes_ago: i64,
    promised: i64,
    actual: Option<i64>,
    status: TicketStatus,
    items: i32,
    revenue: f64,
) -> Ticket {
    Ticket {
        id: id.into(),
        customer: customer.into(),
        created_at: Utc::now() - Duration::minutes(minutes_ago),
        promised_mins: promised,
        duration_mins: actual,
        status,
        items,
        revenue,
    }
}

/// Sample operational tickets for one service day
pub fn sample_tickets() -> Vec<Ticket> {
    use TicketStatus::*;
    vec![
        ticket("t_1001", "Harper Catering", 470, 20, Some(14), Completed, 6, 312.0),
        ticket("t_1002", "Field Day Office", 430, 15, Some(15), Completed, 3, 128.5),
        ticket("t_1003", "Brightwater HS", 395, 30, Some(34), Completed, 12, 641.0),
        ticket("t_1004", "Walk-in", 350, 10, Some(8), Completed, 1, 18.9),
        ticket("t_1005", "Maple & Vine", 320, 20, Some(22), Completed, 5, 254.0),
        ticket("t_1006", "Walk-in", 300, 10, Some(10), Completed, 2, 31.4),
        ticket("t_1007", "Summit Church", 250, 25, Some(19), Completed, 9, 488.0),
        ticket("t_1008", "Walk-in", 220, 10, None, Cancelled, 1, 0.0),
        ticket("t_1009", "Cedar Clinic", 180, 20, Some(27), Completed, 7, 366.0),
        ticket("t_1010", "Walk-in", 35, 10, None, Ready, 2, 27.8),
        ticket("t_1011", "Lakeview PTA", 20, 30, None, InProgress, 10, 512.0),
        ticket("t_1012", "Walk-in", 5, 15, None, Pending, 3, 44.6),
    ]
}

fn item(
    id: &str,
    name: &str,
    category: ItemCategory,
    active: bool,
    price: f64,
    cost: f64,
    qty: i64,
    days_ago: i64,
) -> CatalogItem {
    CatalogItem {
        id: id.into(),
        name: name.into(),
        category,
        is_active: active,
        price,
        cost,
        qty_sold: qty,
        updated_at: Utc::now() - Duration::days(days_ago),
    }
}

/// Sample catalog for the current reporting period
pub fn sample_items() -> Vec<CatalogItem> {
    use ItemCategory::*;
    vec![
        item("item_1", "Chicken Sandwich", Entree, true, 65.0, 24.5, 85, 3),
        item("item_2", "Nugget Tray (Large)", Entree, true, 140.0, 52.0, 52, 9),
        item("item_3", "Grilled Cool Wrap", Entree, true, 85.0, 31.0, 34, 12),
        item("item_4", "Gallon Sweet Tea", Drink, true, 35.0, 8.0, 28, 6),
        item("item_5", "Mac & Cheese Tray", Side, true, 55.0, 21.0, 19, 15),
        item("item_6", "Chocolate Chunk Cookie", Dessert, true, 1.89, 0.44, 85, 2),
        item("item_7", "Garden Salad", Other, false, 42.0, 18.5, 0, 40),
        item("item_8", "Chick-n-Sauce (Tub)", Sauce, true, 6.5, 1.2, 44, 22),
    ]
}

fn user(
    id: &str,
    name: &str,
    email: &str,
    role: Role,
    active: bool,
    days_ago: i64,
) -> UserAccount {
    UserAccount {
        id: id.into(),
        name: Some(name.into()),
        email: email.into(),
        role,
        is_active: active,
        created_at: Utc::now() - Duration::days(days_ago),
    }
}

/// Sample account directory
pub fn sample_users() -> Vec<UserAccount> {
    vec![
        user("u_1", "Admin User", "admin@store.com", Role::Admin, true, 500),
        user("u_2", "Rowan Lee", "rowan@store.com", Role::Manager, true, 120),
        user("u_3", "Sam Ortiz", "sam@store.com", Role::Staff, true, 60),
        user("u_4", "Drew Patel", "drew@store.com", Role::Staff, false, 30),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_invariants_hold() {
        for item in sample_items() {
            assert!(item.price > 0.0, "{} price must be positive", item.name);
            assert!(item.cost >= 0.0, "{} cost must be non-negative", item.name);
            assert!(item.qty_sold >= 0);
        }

        for ticket in sample_tickets() {
            if ticket.status == TicketStatus::Completed {
                assert!(ticket.duration_mins.is_some(), "{} missing duration", ticket.id);
            }
        }

        // exactly one protected admin in the sample directory
        let admins = sample_users()
            .iter()
            .filter(|u| u.role == Role::Admin)
            .count();
        assert_eq!(admins, 1);
    }

    #[test]
    fn test_fixture_names_unique_case_insensitively() {
        let items = sample_items();
        for (i, a) in items.iter().enumerate() {
            for b in &items[i + 1..] {
                assert_ne!(a.name.to_lowercase(), b.name.to_lowercase());
            }
        }
    }
}
