use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};

// ============================================================================
// Metrics Module - Prometheus metrics for the till
// ============================================================================
//
// Provides counters for:
// - Ledger activity (items added/removed, payments, completions)
// - Completed order totals
// - Notification outcomes
//
// Nothing is exposed over HTTP; the registry is gathered for the shutdown
// summary and in tests.
// ============================================================================

/// Central metrics registry for a till process
pub struct Metrics {
    registry: Registry,

    // Ledger Metrics
    pub items_added: IntCounter,
    pub items_removed: IntCounter,
    pub payments_recorded: IntCounterVec,
    pub orders_completed: IntCounter,
    pub order_total: Histogram,
    pub open_order_lines: IntGauge,

    // Notification Metrics
    pub notifications: IntCounterVec,
    pub notification_attempts: IntCounter,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        // Ledger Metrics
        let items_added = IntCounter::new(
            "pos_items_added_total",
            "Total items added to open orders",
        )?;
        registry.register(Box::new(items_added.clone()))?;

        let items_removed = IntCounter::new(
            "pos_items_removed_total",
            "Total items removed from open orders",
        )?;
        registry.register(Box::new(items_removed.clone()))?;

        let payments_recorded = IntCounterVec::new(
            Opts::new("pos_payments_recorded_total", "Cash amounts entered by the operator"),
            &["input"],
        )?;
        registry.register(Box::new(payments_recorded.clone()))?;

        let orders_completed = IntCounter::new(
            "pos_orders_completed_total",
            "Total orders completed",
        )?;
        registry.register(Box::new(orders_completed.clone()))?;

        let order_total = Histogram::with_opts(
            HistogramOpts::new("pos_order_total", "Completed order totals in currency units")
                .buckets(vec![0.0, 2.5, 5.0, 10.0, 20.0, 50.0, 100.0]),
        )?;
        registry.register(Box::new(order_total.clone()))?;

        let open_order_lines = IntGauge::new(
            "pos_open_order_lines",
            "Number of lines on the order currently being rung up",
        )?;
        registry.register(Box::new(open_order_lines.clone()))?;

        // Notification Metrics
        let notifications = IntCounterVec::new(
            Opts::new("pos_notifications_total", "Completion notifications by outcome"),
            &["outcome"],
        )?;
        registry.register(Box::new(notifications.clone()))?;

        let notification_attempts = IntCounter::new(
            "pos_notification_attempts_total",
            "Total notifier calls including retries",
        )?;
        registry.register(Box::new(notification_attempts.clone()))?;

        Ok(Self {
            registry,
            items_added,
            items_removed,
            payments_recorded,
            orders_completed,
            order_total,
            open_order_lines,
            notifications,
            notification_attempts,
        })
    }

    /// Prometheus text exposition of every registered metric
    pub fn render(&self) -> anyhow::Result<String> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    /// Helper to record a payment entry
    pub fn record_payment(&self, valid: bool) {
        let label = if valid { "valid" } else { "invalid" };
        self.payments_recorded.with_label_values(&[label]).inc();
    }

    /// Helper to record a completed order
    pub fn record_completion(&self, total: f64) {
        self.orders_completed.inc();
        self.order_total.observe(total);
        self.open_order_lines.set(0);
    }

    /// Helper to record how a notification ended
    pub fn record_notification(&self, outcome: &str, attempts: u32) {
        self.notifications.with_label_values(&[outcome]).inc();
        self.notification_attempts.inc_by(attempts as u64);
    }
}
