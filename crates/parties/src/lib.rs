//! Parties module (clients and suppliers).
//!
//! This crate contains the client and supplier records and their field rules,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage). Orders reference clients by id; nothing here owns or cascades
//! into other records.

pub mod client;
pub mod contact;
pub mod supplier;

pub use client::{Client, ClientId, ClientStatus, NewClient};
pub use contact::ContactInfo;
pub use supplier::{NewSupplier, Supplier, SupplierId};
