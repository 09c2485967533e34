//! Orders domain module.
//!
//! This crate contains the order record, its status lifecycle, and the pure
//! reconciliation decision table (`plan`), implemented as deterministic domain
//! logic (no IO, no HTTP, no storage). Executing the decisions against real
//! stores is the engine crate's job.

pub mod order;
pub mod plan;

pub use order::{
    Order, OrderChanges, OrderDraft, OrderId, OrderNumber, OrderStatus,
};
pub use plan::{
    CreationPlan, DeletionPlan, ResolvedFields, StockMove, StockPlan, UpdatePlan, plan_creation,
    plan_deletion, plan_update,
};
