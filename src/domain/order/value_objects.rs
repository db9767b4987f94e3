use serde::{Deserialize, Serialize};
use rust_decimal::Decimal;
use uuid::Uuid;
use chrono::{DateTime, Utc};

use crate::domain::catalog::{CatalogItem, ItemId};
use crate::money;

// ============================================================================
// Order Value Objects
// ============================================================================

/// One catalog item and how many of it are on the order.
///
/// Name and unit price are copied from the catalog when the line is first
/// created, so a line is readable without the catalog.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OrderLine {
    pub item_id: ItemId,
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
}

impl OrderLine {
    pub fn from_item(item: &CatalogItem) -> Self {
        Self {
            item_id: item.id,
            name: item.name.clone(),
            unit_price: item.unit_price,
            quantity: 1,
        }
    }

    pub fn subtotal(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }

    /// `Name(quantity)`, the form used in completion summaries
    pub fn label(&self) -> String {
        format!("{}({})", self.name, self.quantity)
    }
}

/// Sum of every line's subtotal
pub fn lines_total(lines: &[OrderLine]) -> Decimal {
    lines.iter().map(OrderLine::subtotal).sum()
}

/// Lifecycle of the order being rung up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderState {
    Empty,
    Accumulating,
}

/// Cash the customer handed over for the open order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub tendered: Option<Decimal>,
}

impl Payment {
    /// Parse operator input; unreadable text means nothing was tendered
    pub fn from_input(raw: &str) -> Self {
        Self {
            tendered: money::parse_amount(raw),
        }
    }

    pub fn is_recorded(&self) -> bool {
        self.tendered.is_some()
    }

    /// Tendered minus total. Negative when the customer is short, zero when
    /// nothing was tendered.
    pub fn change(&self, total: Decimal) -> Decimal {
        match self.tendered {
            Some(tendered) => tendered - total,
            None => Decimal::ZERO,
        }
    }

    /// Change as shown to the operator, never below zero
    pub fn display_change(&self, total: Decimal) -> Decimal {
        self.change(total).max(Decimal::ZERO)
    }
}

/// Snapshot of an order at the moment it was completed
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CompletedOrder {
    pub id: Uuid,
    pub lines: Vec<OrderLine>,
    pub total: Decimal,
    pub tendered: Option<Decimal>,
    pub completed_at: DateTime<Utc>,
}

impl CompletedOrder {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of units across all lines
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// `Name(qty)` entries joined by `_`, e.g. `PIVO 0,3L(2)_VINO 0,1L(1)`
    pub fn summary(&self) -> String {
        self.lines
            .iter()
            .map(OrderLine::label)
            .collect::<Vec<_>>()
            .join("_")
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn line(id: u32, name: &str, price: Decimal, quantity: u32) -> OrderLine {
        OrderLine {
            item_id: ItemId(id),
            name: name.to_string(),
            unit_price: price,
            quantity,
        }
    }

    #[test]
    fn test_order_line_from_item() {
        let item = CatalogItem::new(5, "RADENSKA 1L", dec!(5.00));
        let line = OrderLine::from_item(&item);

        assert_eq!(line.item_id, ItemId(5));
        assert_eq!(line.name, "RADENSKA 1L");
        assert_eq!(line.quantity, 1);
        assert_eq!(line.subtotal(), dec!(5));
    }

    #[test]
    fn test_subtotal_and_total() {
        let lines = vec![
            line(1, "PIVO 0,3L", dec!(3.00), 2),
            line(2, "ŠPRICAR 0,2L", dec!(2.50), 3),
        ];

        assert_eq!(lines[1].subtotal(), dec!(7.50));
        assert_eq!(lines_total(&lines), dec!(13.50));
        assert_eq!(lines_total(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_payment_change() {
        let payment = Payment::from_input("10");
        assert!(payment.is_recorded());
        assert_eq!(payment.change(dec!(7.50)), dec!(2.50));
        assert_eq!(payment.display_change(dec!(7.50)), dec!(2.50));
    }

    #[test]
    fn test_payment_short_of_total() {
        let payment = Payment::from_input("5");
        assert_eq!(payment.change(dec!(7.50)), dec!(-2.50));
        assert_eq!(payment.display_change(dec!(7.50)), Decimal::ZERO);
    }

    #[test]
    fn test_payment_unparseable() {
        let payment = Payment::from_input("abc");
        assert!(!payment.is_recorded());
        assert_eq!(payment.tendered, None);
        assert_eq!(payment.change(dec!(7.50)), Decimal::ZERO);
        assert_eq!(payment.display_change(dec!(7.50)), Decimal::ZERO);
    }

    #[test]
    fn test_completed_order_summary() {
        let order = CompletedOrder {
            id: Uuid::now_v7(),
            lines: vec![
                line(1, "PIVO 0,3L", dec!(3.00), 2),
                line(3, "VINO 0,1L", dec!(2.00), 1),
            ],
            total: dec!(8.00),
            tendered: Some(dec!(10)),
            completed_at: Utc::now(),
        };

        assert_eq!(order.summary(), "PIVO 0,3L(2)_VINO 0,1L(1)");
        assert_eq!(order.item_count(), 3);
        assert!(!order.is_empty());
    }

    #[test]
    fn test_empty_completed_order_summary() {
        let order = CompletedOrder {
            id: Uuid::now_v7(),
            lines: vec![],
            total: Decimal::ZERO,
            tendered: None,
            completed_at: Utc::now(),
        };

        assert_eq!(order.summary(), "");
        assert!(order.is_empty());
    }

    #[test]
    fn test_completed_order_serialization() {
        let order = CompletedOrder {
            id: Uuid::now_v7(),
            lines: vec![line(7, "GIN-TONIC", dec!(4.00), 1)],
            total: dec!(4.00),
            tendered: None,
            completed_at: Utc::now(),
        };

        let json = serde_json::to_string(&order).unwrap();
        let deserialized: CompletedOrder = serde_json::from_str(&json).unwrap();
        assert_eq!(order, deserialized);
    }
}
