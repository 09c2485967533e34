//! Domain error model.

use thiserror::Error;

/// Result type used across the back office.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every failure carries a kind and a human-readable message; callers branch
/// on the kind, people read the message. The presentation layer (out of scope
/// here) maps kinds to transport responses.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed or missing record field).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A referenced record (product, order, client) was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// An order quantity was zero or negative.
    #[error("invalid quantity: {0} is not a positive amount")]
    InvalidQuantity(i64),

    /// A reservation would drive a product's stock below zero.
    #[error("insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: i64, available: i64 },

    /// A status/quantity/product change combination not permitted from the
    /// order's current state.
    #[error("invalid transition: {0}")]
    InvalidTransition(String),

    /// A uniqueness rule was violated (e.g. duplicate user email).
    #[error("conflict: {0}")]
    Conflict(String),

    /// An underlying store read/write failed for reasons outside the caller's
    /// control. Triggers rollback of any stock delta already applied within
    /// the same operation.
    #[error("storage failure: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn invalid_quantity(quantity: i64) -> Self {
        Self::InvalidQuantity(quantity)
    }

    pub fn insufficient_stock(requested: i64, available: i64) -> Self {
        Self::InsufficientStock {
            requested,
            available,
        }
    }

    pub fn invalid_transition(msg: impl Into<String>) -> Self {
        Self::InvalidTransition(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}
