use serde::{Deserialize, Serialize};
use rust_decimal::Decimal;

use crate::domain::catalog::{CatalogItem, ItemId};
use crate::event_sourcing::DomainEvent;
use super::value_objects::CompletedOrder;

// ============================================================================
// Ledger Events - Facts about the open order
// ============================================================================

/// Ledger Event - Union type for all ledger events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum LedgerEvent {
    ItemAdded(ItemAdded),
    LineDecremented(LineDecremented),
    LineRemoved(LineRemoved),
    PaymentRecorded(PaymentRecorded),
    OrderCompleted(OrderCompleted),
}

impl DomainEvent for LedgerEvent {
    fn name(&self) -> &'static str {
        match self {
            LedgerEvent::ItemAdded(_) => "ItemAdded",
            LedgerEvent::LineDecremented(_) => "LineDecremented",
            LedgerEvent::LineRemoved(_) => "LineRemoved",
            LedgerEvent::PaymentRecorded(_) => "PaymentRecorded",
            LedgerEvent::OrderCompleted(_) => "OrderCompleted",
        }
    }
}

// ============================================================================
// Individual Event Types
// ============================================================================

/// Item Added - carries the catalog entry so the line can be built from it
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ItemAdded {
    pub item: CatalogItem,
}

/// Line Decremented - quantity dropped by one and stays above zero
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LineDecremented {
    pub item_id: ItemId,
}

/// Line Removed - the last unit of an item left the order
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LineRemoved {
    pub item_id: ItemId,
}

/// Payment Recorded - `None` when the input was not an amount
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PaymentRecorded {
    pub tendered: Option<Decimal>,
}

/// Order Completed - snapshot taken, open order reset
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OrderCompleted {
    pub order: CompletedOrder,
}
