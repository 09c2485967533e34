//! Authoritative in-memory stores.
//!
//! Three storage surfaces live here:
//! - [`ProductLedger`]: the single write path for stock, with atomic
//!   per-product adjustments
//! - [`OrderStore`]: keyed CRUD over order records (no stock logic)
//! - [`RecordStore`]: generic keyed storage for the supporting registries
//!   (clients, suppliers), plus the uniqueness-enforcing [`UserDirectory`]
//!
//! All stores are safe to share across threads behind an `Arc`.

pub mod ledger;
pub mod orders;
pub mod records;

pub use ledger::{InMemoryProductLedger, ProductLedger};
pub use orders::{InMemoryOrderStore, NewOrderRecord, OrderStore};
pub use records::{InMemoryRecordStore, RecordStore, UserDirectory};
