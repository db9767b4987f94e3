//! Single-screen point-of-sale till.
//!
//! The [`domain::order::LedgerSession`] owns the open order, the cash
//! entered for it and the last completed order. The [`ui`] module turns
//! operator lines into session calls and draws the screen.

pub mod config;
pub mod domain;
pub mod event_sourcing;
pub mod metrics;
pub mod money;
pub mod notify;
pub mod ui;
pub mod utils;
