//! Products catalog module.
//!
//! This crate contains the product record and its field rules, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage). Stock
//! *writes* go through the product ledger; this crate only defines what a
//! valid product and a valid stock level are.

pub mod product;

pub use product::{Product, ProductId};
