use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::domain::catalog::Catalog;
use crate::notify::{LogNotifier, NoopNotifier, OrderNotifier};
use crate::utils::RetryConfig;

// ============================================================================
// Configuration - command line flags with environment fallbacks
// ============================================================================

/// Where completion notices go
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotifierKind {
    /// Notices are dropped
    #[default]
    None,
    /// Notices are written to the log as JSON
    Log,
}

#[derive(Parser, Debug)]
#[command(name = "pos_ledger")]
#[command(about = "Single-screen bar till: ring up an order, take cash, give change", long_about = None)]
pub struct Cli {
    /// JSON catalog file; the built-in bar menu is used when omitted
    #[arg(long, env = "POS_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Currency symbol printed in front of amounts
    #[arg(long, env = "POS_CURRENCY", default_value = "€")]
    pub currency: String,

    /// Completion notifier
    #[arg(long, env = "POS_NOTIFIER", value_enum, default_value_t = NotifierKind::None)]
    pub notifier: NotifierKind,

    /// Attempts per completion notice, including the first
    #[arg(long, env = "POS_NOTIFY_ATTEMPTS", default_value_t = 3)]
    pub notify_attempts: u32,

    /// Delay before the first notice retry, in milliseconds
    #[arg(long, env = "POS_NOTIFY_BACKOFF_MS", default_value_t = 200)]
    pub notify_backoff_ms: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub catalog_path: Option<PathBuf>,
    pub currency_symbol: String,
    pub notifier: NotifierKind,
    pub retry: RetryConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            currency_symbol: "€".to_string(),
            notifier: NotifierKind::None,
            retry: RetryConfig::default(),
        }
    }
}

impl From<Cli> for AppConfig {
    fn from(cli: Cli) -> Self {
        let defaults = RetryConfig::default();

        Self {
            catalog_path: cli.catalog,
            currency_symbol: cli.currency,
            notifier: cli.notifier,
            retry: RetryConfig {
                max_attempts: cli.notify_attempts.max(1),
                initial_delay: Duration::from_millis(cli.notify_backoff_ms),
                ..defaults
            },
        }
    }
}

impl AppConfig {
    /// Parse process arguments and environment
    pub fn from_args() -> Self {
        Cli::parse().into()
    }

    /// The configured catalog file, or the built-in menu
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog_path {
            Some(path) => Catalog::load(path),
            None => {
                tracing::info!("Using built-in menu");
                Ok(Catalog::default_menu())
            }
        }
    }

    pub fn build_notifier(&self) -> Arc<dyn OrderNotifier> {
        match self.notifier {
            NotifierKind::None => Arc::new(NoopNotifier),
            NotifierKind::Log => Arc::new(LogNotifier),
        }
    }
}
