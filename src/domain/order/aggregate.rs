use std::sync::Arc;
use rust_decimal::Decimal;
use uuid::Uuid;
use chrono::Utc;

use crate::domain::catalog::{Catalog, CatalogItem, ItemId};
use crate::event_sourcing::Aggregate;
use super::value_objects::{lines_total, CompletedOrder, OrderLine, OrderState, Payment};
use super::events::*;
use super::commands::LedgerCommand;
use super::errors::LedgerError;

// ============================================================================
// Order Ledger Aggregate - Domain Logic
// ============================================================================
//
// Invariants:
// - at most one line per catalog item, lines kept in first-added order
// - every line has quantity >= 1
// - the total is always the sum of line subtotals (it is never stored)
//
// ============================================================================

#[derive(Debug, Clone)]
pub struct OrderLedger {
    catalog: Arc<Catalog>,

    // Open order
    lines: Vec<OrderLine>,
    payment: Payment,

    // Single-slot history
    last_completed: Option<CompletedOrder>,
}

impl OrderLedger {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            lines: Vec::new(),
            payment: Payment::default(),
            last_completed: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn line(&self, item_id: ItemId) -> Option<&OrderLine> {
        self.lines.iter().find(|line| line.item_id == item_id)
    }

    pub fn total(&self) -> Decimal {
        lines_total(&self.lines)
    }

    pub fn payment(&self) -> &Payment {
        &self.payment
    }

    /// Raw change against the current total; may be negative
    pub fn change(&self) -> Decimal {
        self.payment.change(self.total())
    }

    pub fn display_change(&self) -> Decimal {
        self.payment.display_change(self.total())
    }

    pub fn last_completed(&self) -> Option<&CompletedOrder> {
        self.last_completed.as_ref()
    }

    pub fn state(&self) -> OrderState {
        if self.lines.is_empty() {
            OrderState::Empty
        } else {
            OrderState::Accumulating
        }
    }

    fn resolve(&self, item_id: ItemId) -> Result<&CatalogItem, LedgerError> {
        self.catalog
            .get(item_id)
            .ok_or(LedgerError::UnknownItem(item_id))
    }

    fn snapshot(&self) -> CompletedOrder {
        CompletedOrder {
            id: Uuid::now_v7(),
            lines: self.lines.clone(),
            total: self.total(),
            tendered: self.payment.tendered,
            completed_at: Utc::now(),
        }
    }
}

// ============================================================================
// Aggregate Trait Implementation
// ============================================================================

impl Aggregate for OrderLedger {
    type Event = LedgerEvent;
    type Command = LedgerCommand;
    type Error = LedgerError;

    fn apply_event(&mut self, event: &Self::Event) {
        match event {
            LedgerEvent::ItemAdded(e) => {
                match self.lines.iter().position(|line| line.item_id == e.item.id) {
                    Some(index) => self.lines[index].quantity += 1,
                    None => self.lines.push(OrderLine::from_item(&e.item)),
                }
            }
            LedgerEvent::LineDecremented(e) => {
                if let Some(line) = self.lines.iter_mut().find(|line| line.item_id == e.item_id) {
                    line.quantity = line.quantity.saturating_sub(1);
                }
                // A line never survives at zero
                self.lines.retain(|line| line.quantity > 0);
            }
            LedgerEvent::LineRemoved(e) => {
                self.lines.retain(|line| line.item_id != e.item_id);
            }
            LedgerEvent::PaymentRecorded(e) => {
                self.payment = Payment { tendered: e.tendered };
            }
            LedgerEvent::OrderCompleted(e) => {
                self.last_completed = Some(e.order.clone());
                self.lines.clear();
                self.payment = Payment::default();
            }
        }
    }

    fn handle_command(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            LedgerCommand::AddItem { item_id } => {
                let item = self.resolve(*item_id)?;

                Ok(vec![LedgerEvent::ItemAdded(ItemAdded { item: item.clone() })])
            }

            LedgerCommand::RemoveItem { item_id } => {
                self.resolve(*item_id)?;

                // Removing something that is not on the order changes nothing
                let event = match self.line(*item_id) {
                    None => return Ok(vec![]),
                    Some(line) if line.quantity <= 1 => {
                        LedgerEvent::LineRemoved(LineRemoved { item_id: *item_id })
                    }
                    Some(_) => LedgerEvent::LineDecremented(LineDecremented { item_id: *item_id }),
                };

                Ok(vec![event])
            }

            LedgerCommand::RecordPayment { raw } => {
                let payment = Payment::from_input(raw);
                Ok(vec![LedgerEvent::PaymentRecorded(PaymentRecorded {
                    tendered: payment.tendered,
                })])
            }

            LedgerCommand::CompleteOrder => {
                Ok(vec![LedgerEvent::OrderCompleted(OrderCompleted {
                    order: self.snapshot(),
                })])
            }
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
