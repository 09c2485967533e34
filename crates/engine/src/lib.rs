//! Reconciliation engine and order service.
//!
//! [`reconcile`] executes decided stock plans against the product ledger and
//! order store, rolling applied movements back when a later step fails.
//! [`service`] is the operation surface handed to callers: it checks record
//! references, attributes mutations to the acting user, and delegates to the
//! engine.

pub mod reconcile;
pub mod service;

pub use reconcile::ReconciliationEngine;
pub use service::OrderService;
