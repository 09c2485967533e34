//! Reconciliation decision table.
//!
//! Every order mutation is decided here as a pure function: given the current
//! order and the requested changes, produce either a [`StockPlan`] (the exact
//! signed deltas to apply) plus the resolved record fields, or a typed
//! rejection. No IO happens in this module; the engine executes the returned
//! plan against the product ledger and order store.
//!
//! The table enumerates every (current status, quantity delta, product
//! changed) combination:
//!
//! | current      | requested                          | outcome                          |
//! |--------------|------------------------------------|----------------------------------|
//! | cancelled    | quantity/product/status change     | `InvalidTransition`              |
//! | cancelled    | client / assignee only             | field update, stock untouched    |
//! | not cancelled| status → cancelled, nothing else   | release current reservation      |
//! | not cancelled| status → cancelled + qty/product   | `InvalidTransition`              |
//! | any          | quantity ≤ 0 supplied              | `InvalidQuantity`                |
//! | not cancelled| qty and product unchanged          | field/status update, no stock    |
//! | → preparing/shipped | qty changes, product same   | one delta `O.qty − N.qty`        |
//! | → preparing/shipped | product changes             | release old, reserve new         |
//! | → pending    | qty or product changes             | `InvalidTransition`              |

use serde::{Deserialize, Serialize};

use orderdesk_auth::UserId;
use orderdesk_core::{DomainError, DomainResult};
use orderdesk_parties::ClientId;
use orderdesk_products::ProductId;

use crate::order::{Order, OrderChanges, OrderDraft, OrderStatus};

/// One signed stock movement against a product.
///
/// Negative `delta` reserves stock, positive releases it. A plan never
/// contains more than one movement per product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockMove {
    pub product: ProductId,
    pub delta: i64,
}

/// Stock side of a decided mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockPlan {
    /// No stock movement required.
    Untouched,
    /// One signed delta on the order's (unchanged) product. The product must
    /// exist: the post-adjust snapshot prices the new total.
    Adjust(StockMove),
    /// Move the reservation to a different product: release the old, reserve
    /// the new, all-or-nothing.
    Transfer {
        release: StockMove,
        reserve: StockMove,
    },
    /// Release the current reservation (cancellation or deletion). A vanished
    /// product downgrades this to a logged reconciliation warning.
    Release(StockMove),
}

/// Record fields a mutation resolves to, before the total is priced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedFields {
    pub client: ClientId,
    pub product: ProductId,
    pub quantity: i64,
    pub status: OrderStatus,
    pub assigned_user: Option<UserId>,
}

/// Decided creation: the reservation to take and the fields to persist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreationPlan {
    pub reserve: StockMove,
    pub fields: ResolvedFields,
}

/// Decided update: the stock movement(s) and the fields to persist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePlan {
    pub stock: StockPlan,
    pub fields: ResolvedFields,
}

/// Decided deletion: the release to apply (if the order holds a reservation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletionPlan {
    pub stock: StockPlan,
}

/// Decide an order creation.
///
/// Rejects non-positive quantities before any stock math, and refuses to
/// create an order that is already cancelled: creation always reserves stock,
/// and a cancelled order must hold no reservation.
pub fn plan_creation(draft: &OrderDraft) -> DomainResult<CreationPlan> {
    if draft.quantity <= 0 {
        return Err(DomainError::invalid_quantity(draft.quantity));
    }

    let status = draft.status.unwrap_or_default();
    if status == OrderStatus::Cancelled {
        return Err(DomainError::invalid_transition(
            "an order cannot be created in cancelled status",
        ));
    }

    Ok(CreationPlan {
        reserve: StockMove {
            product: draft.product,
            delta: -draft.quantity,
        },
        fields: ResolvedFields {
            client: draft.client,
            product: draft.product,
            quantity: draft.quantity,
            status,
            assigned_user: draft.assigned_user,
        },
    })
}

/// Decide an order update. See the module table.
pub fn plan_update(order: &Order, changes: &OrderChanges) -> DomainResult<UpdatePlan> {
    if let Some(quantity) = changes.quantity {
        if quantity <= 0 {
            return Err(DomainError::invalid_quantity(quantity));
        }
    }

    // Resolve requested values against the current record: absent means keep,
    // supplied-but-equal counts as unchanged.
    let quantity = changes.quantity.unwrap_or(order.quantity);
    let product = changes.product.unwrap_or(order.product);
    let status = changes.status.unwrap_or(order.status);
    let fields = ResolvedFields {
        client: changes.client.unwrap_or(order.client),
        product,
        quantity,
        status,
        assigned_user: changes.assigned_user.or(order.assigned_user),
    };

    let quantity_changed = quantity != order.quantity;
    let product_changed = product != order.product;

    // Terminal state: nothing stock-related leaves `cancelled`.
    if order.status == OrderStatus::Cancelled {
        if changes.status.is_some() {
            return Err(DomainError::invalid_transition(
                "order is cancelled; no status change is defined out of cancelled",
            ));
        }
        if quantity_changed || product_changed {
            return Err(DomainError::invalid_transition(
                "order is cancelled; quantity and product can no longer change",
            ));
        }
        return Ok(UpdatePlan {
            stock: StockPlan::Untouched,
            fields,
        });
    }

    // Cancellation: release exactly what the order currently reserves.
    if status == OrderStatus::Cancelled {
        if quantity_changed || product_changed {
            return Err(DomainError::invalid_transition(
                "cancellation cannot be combined with a quantity or product change",
            ));
        }
        return Ok(UpdatePlan {
            stock: StockPlan::Release(StockMove {
                product: order.product,
                delta: order.quantity,
            }),
            fields,
        });
    }

    // No quantity/product movement: status and plain fields persist freely.
    if !quantity_changed && !product_changed {
        return Ok(UpdatePlan {
            stock: StockPlan::Untouched,
            fields,
        });
    }

    // Re-shaping the order moves stock; only permitted while the order is
    // being prepared or shipped.
    if !status.allows_reshaping() {
        return Err(DomainError::invalid_transition(format!(
            "quantity or product changes require status preparing or shipped (requested status: {status})"
        )));
    }

    if product_changed {
        return Ok(UpdatePlan {
            stock: StockPlan::Transfer {
                release: StockMove {
                    product: order.product,
                    delta: order.quantity,
                },
                reserve: StockMove {
                    product,
                    delta: -quantity,
                },
            },
            fields,
        });
    }

    // Same product, different quantity: one signed delta covers both
    // directions (positive releases, negative reserves).
    Ok(UpdatePlan {
        stock: StockPlan::Adjust(StockMove {
            product: order.product,
            delta: order.quantity - quantity,
        }),
        fields,
    })
}

/// Decide an order deletion: committed orders give their reservation back,
/// cancelled orders have nothing to release.
pub fn plan_deletion(order: &Order) -> DeletionPlan {
    if order.status.holds_reservation() {
        DeletionPlan {
            stock: StockPlan::Release(StockMove {
                product: order.product,
                delta: order.quantity,
            }),
        }
    } else {
        DeletionPlan {
            stock: StockPlan::Untouched,
        }
    }
}
