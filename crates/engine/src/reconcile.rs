//! Executes decided stock plans against the ledger and order store.
//!
//! The engine is the only caller of the ledger's adjust path. Each operation
//! decides its plan first (pure, in `orderdesk_orders::plan`), applies the
//! stock side, prices the total from the snapshot the ledger returns, and
//! persists the record. Every stock movement applied within one operation is
//! undone if a later step of that operation fails; callers observe either the
//! whole mutation or none of it.
//!
//! Releases tolerate a vanished product: the movement is skipped and logged
//! as a reconciliation warning. Reservations never tolerate one, because the
//! post-reservation snapshot prices the order total.

use orderdesk_core::{DomainError, DomainResult};
use orderdesk_orders::{
    Order, OrderChanges, OrderDraft, OrderId, StockMove, StockPlan, plan_creation, plan_deletion,
    plan_update,
};
use orderdesk_products::Product;
use orderdesk_store::{NewOrderRecord, OrderStore, ProductLedger};

/// Reconciles order mutations with their stock effects.
pub struct ReconciliationEngine<L, S> {
    ledger: L,
    orders: S,
}

impl<L, S> ReconciliationEngine<L, S>
where
    L: ProductLedger,
    S: OrderStore,
{
    pub fn new(ledger: L, orders: S) -> Self {
        Self { ledger, orders }
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn orders(&self) -> &S {
        &self.orders
    }

    /// Create an order: reserve stock, price the total, persist the record.
    ///
    /// The reservation doubles as the existence and availability check; there
    /// is no separate read that a concurrent creation could invalidate.
    pub fn create_order(&self, draft: &OrderDraft) -> DomainResult<Order> {
        let plan = plan_creation(draft)?;

        let mut session = StockSession::new(&self.ledger);
        let product = session.apply(plan.reserve)?;
        let total = session.guard(product.line_total(plan.fields.quantity))?;

        let order = session.guard(self.orders.create(NewOrderRecord {
            fields: plan.fields,
            total,
        }))?;

        tracing::info!(
            "created order {} for product {} (quantity {}, total {})",
            order.order_number,
            order.product,
            order.quantity,
            order.total
        );
        Ok(order)
    }

    /// Update an order per the decision table, moving stock as decided.
    pub fn update_order(&self, id: &OrderId, changes: &OrderChanges) -> DomainResult<Order> {
        let order = self.orders.get(id)?;
        let plan = plan_update(&order, changes)?;

        let mut session = StockSession::new(&self.ledger);
        let total = match plan.stock {
            StockPlan::Untouched => order.total,
            StockPlan::Adjust(mv) => {
                let product = session.apply(mv)?;
                session.guard(product.line_total(plan.fields.quantity))?
            }
            StockPlan::Transfer { release, reserve } => {
                session.release(release)?;
                let product = session.apply(reserve)?;
                session.guard(product.line_total(plan.fields.quantity))?
            }
            StockPlan::Release(mv) => match session.release(mv)? {
                // With the product still around, cancellation re-prices from
                // the release snapshot; otherwise the stored total stands.
                Some(product) => session.guard(product.line_total(plan.fields.quantity))?,
                None => order.total,
            },
        };

        let updated = session.guard(self.orders.update(
            id,
            NewOrderRecord {
                fields: plan.fields,
                total,
            },
        ))?;

        tracing::info!(
            "updated order {} to status {} (quantity {}, total {})",
            updated.order_number,
            updated.status,
            updated.quantity,
            updated.total
        );
        Ok(updated)
    }

    /// Delete an order, releasing its reservation first.
    pub fn delete_order(&self, id: &OrderId) -> DomainResult<Order> {
        let order = self.orders.get(id)?;
        let plan = plan_deletion(&order);

        let mut session = StockSession::new(&self.ledger);
        if let StockPlan::Release(mv) = plan.stock {
            session.release(mv)?;
        }

        let snapshot = session.guard(self.orders.delete(id))?;
        tracing::info!(
            "deleted order {} (status was {})",
            snapshot.order_number,
            snapshot.status
        );
        Ok(snapshot)
    }
}

/// Tracks the stock movements applied during one engine operation so they can
/// be undone if a later step fails.
struct StockSession<'a, L> {
    ledger: &'a L,
    applied: Vec<StockMove>,
}

impl<'a, L: ProductLedger> StockSession<'a, L> {
    fn new(ledger: &'a L) -> Self {
        Self {
            ledger,
            applied: Vec::new(),
        }
    }

    /// Apply a movement that must land. Failure unwinds the session.
    fn apply(&mut self, mv: StockMove) -> DomainResult<Product> {
        match self.ledger.adjust_stock(&mv.product, mv.delta) {
            Ok(product) => {
                self.applied.push(mv);
                Ok(product)
            }
            Err(err) => {
                self.unwind();
                Err(err)
            }
        }
    }

    /// Apply a release, tolerating a vanished product.
    ///
    /// Returns the post-release snapshot, or `None` when the product no
    /// longer exists and the release was skipped with a warning.
    fn release(&mut self, mv: StockMove) -> DomainResult<Option<Product>> {
        match self.ledger.adjust_stock(&mv.product, mv.delta) {
            Ok(product) => {
                self.applied.push(mv);
                Ok(Some(product))
            }
            Err(DomainError::NotFound(_)) => {
                tracing::warn!(
                    "reconciliation: product {} vanished before {} reserved units could be released",
                    mv.product,
                    mv.delta
                );
                Ok(None)
            }
            Err(err) => {
                self.unwind();
                Err(err)
            }
        }
    }

    /// Pass a step result through, unwinding the session on error.
    fn guard<T>(&mut self, result: DomainResult<T>) -> DomainResult<T> {
        if result.is_err() {
            self.unwind();
        }
        result
    }

    /// Undo every applied movement, most recent first.
    fn unwind(&mut self) {
        while let Some(mv) = self.applied.pop() {
            if let Err(err) = self.ledger.adjust_stock(&mv.product, -mv.delta) {
                tracing::error!(
                    "failed to roll back stock movement on product {} (delta {}): {}",
                    mv.product,
                    -mv.delta,
                    err
                );
            }
        }
    }
}
