use std::sync::Arc;
use rust_decimal::prelude::ToPrimitive;

use crate::domain::catalog::{Catalog, ItemId};
use crate::event_sourcing::{Aggregate, DomainEvent};
use crate::metrics::Metrics;
use crate::notify::{spawn_notification, CompletionNotice, NoopNotifier, OrderNotifier};
use crate::utils::RetryConfig;

use super::aggregate::OrderLedger;
use super::commands::LedgerCommand;
use super::errors::LedgerError;
use super::events::LedgerEvent;
use super::value_objects::CompletedOrder;

// ============================================================================
// Ledger Session
// ============================================================================
//
// Orchestrates: Operator action → Command → Ledger → Events → Notifier
//
// One session per till. It is owned by whoever drives the screen and is
// passed around by `&mut`; there is no shared or global state.
//
// ============================================================================

pub struct LedgerSession {
    ledger: OrderLedger,
    notifier: Arc<dyn OrderNotifier>,
    retry: RetryConfig,
    metrics: Option<Arc<Metrics>>,
}

impl LedgerSession {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            ledger: OrderLedger::new(catalog),
            notifier: Arc::new(NoopNotifier),
            retry: RetryConfig::default(),
            metrics: None,
        }
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn OrderNotifier>, retry: RetryConfig) -> Self {
        self.notifier = notifier;
        self.retry = retry;
        self
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn catalog(&self) -> &Catalog {
        self.ledger.catalog()
    }

    pub fn ledger(&self) -> &OrderLedger {
        &self.ledger
    }

    pub fn add_item(&mut self, item_id: ItemId) -> Result<(), LedgerError> {
        self.execute(LedgerCommand::add(item_id)).map(|_| ())
    }

    /// Removing an item that is not on the order is accepted and changes nothing
    pub fn remove_item(&mut self, item_id: ItemId) -> Result<(), LedgerError> {
        self.execute(LedgerCommand::remove(item_id)).map(|_| ())
    }

    /// Record the cash amount typed by the operator. Text that is not an
    /// amount clears the tendered value.
    pub fn record_payment(&mut self, raw: &str) -> Result<(), LedgerError> {
        self.execute(LedgerCommand::pay(raw)).map(|_| ())
    }

    /// Snapshot the open order into the last-order slot and start a new one.
    ///
    /// The optional notifier is handed the result afterwards on a background
    /// task; its outcome cannot affect the returned snapshot or the ledger.
    pub fn complete_order(&mut self) -> Result<CompletedOrder, LedgerError> {
        self.execute(LedgerCommand::CompleteOrder)?
            .into_iter()
            .find_map(|event| match event {
                LedgerEvent::OrderCompleted(e) => Some(e.order),
                _ => None,
            })
            .ok_or(LedgerError::NotCompleted)
    }

    /// Handle a command and record what happened
    fn execute(&mut self, command: LedgerCommand) -> Result<Vec<LedgerEvent>, LedgerError> {
        let events = self.ledger.execute(&command).map_err(|e| {
            tracing::warn!(command = ?command, error = %e, "Command rejected");
            e
        })?;

        if events.is_empty() {
            tracing::debug!(command = ?command, "Command changed nothing");
        }

        for event in &events {
            self.observe(event);
        }

        Ok(events)
    }

    fn observe(&self, event: &LedgerEvent) {
        let total = self.ledger.total();

        match event {
            LedgerEvent::ItemAdded(e) => {
                tracing::debug!(
                    event = event.name(),
                    item_id = %e.item.id,
                    quantity = self.ledger.line(e.item.id).map(|l| l.quantity).unwrap_or(0),
                    total = %total,
                    "Item added"
                );
            }
            LedgerEvent::LineDecremented(e) => {
                tracing::debug!(
                    event = event.name(),
                    item_id = %e.item_id,
                    total = %total,
                    "Item removed"
                );
            }
            LedgerEvent::LineRemoved(e) => {
                tracing::debug!(
                    event = event.name(),
                    item_id = %e.item_id,
                    total = %total,
                    "Line removed"
                );
            }
            LedgerEvent::PaymentRecorded(e) => {
                tracing::debug!(
                    event = event.name(),
                    tendered = ?e.tendered,
                    change = %self.ledger.change(),
                    "Payment recorded"
                );
            }
            LedgerEvent::OrderCompleted(e) => {
                tracing::info!(
                    order_id = %e.order.id,
                    lines = e.order.lines.len(),
                    items = e.order.item_count(),
                    total = %e.order.total,
                    "Order completed"
                );

                spawn_notification(
                    self.notifier.clone(),
                    CompletionNotice::from(&e.order),
                    self.retry.clone(),
                    self.metrics.clone(),
                );
            }
        }

        if let Some(metrics) = &self.metrics {
            match event {
                LedgerEvent::ItemAdded(_) => metrics.items_added.inc(),
                LedgerEvent::LineDecremented(_) | LedgerEvent::LineRemoved(_) => {
                    metrics.items_removed.inc()
                }
                LedgerEvent::PaymentRecorded(e) => metrics.record_payment(e.tendered.is_some()),
                LedgerEvent::OrderCompleted(e) => {
                    metrics.record_completion(e.order.total.to_f64().unwrap_or(0.0))
                }
            }
            metrics.open_order_lines.set(self.ledger.lines().len() as i64);
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
