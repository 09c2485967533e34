//! Order record store: keyed CRUD over order records.
//!
//! The store never touches stock. The reconciliation engine decides stock
//! movements first and persists the resolved record here. Identifiers, order
//! numbers and `created_at` are assigned at creation and never change; every
//! update overwrites the mutable fields wholesale and refreshes `updated_at`.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::Utc;

use orderdesk_core::{DomainError, DomainResult};
use orderdesk_orders::{Order, OrderId, OrderNumber, ResolvedFields};
use orderdesk_parties::ClientId;

/// Input for [`OrderStore::create`] and [`OrderStore::update`]: the resolved
/// record fields plus the priced total.
#[derive(Debug, Clone)]
pub struct NewOrderRecord {
    pub fields: ResolvedFields,
    pub total: u64,
}

/// Keyed order storage.
pub trait OrderStore: Send + Sync {
    /// Persist a new order, assigning its id, order number and timestamps.
    fn create(&self, record: NewOrderRecord) -> DomainResult<Order>;

    /// Fetch an order by id.
    fn get(&self, id: &OrderId) -> DomainResult<Order>;

    /// Overwrite an order's mutable fields and refresh `updated_at`.
    fn update(&self, id: &OrderId, record: NewOrderRecord) -> DomainResult<Order>;

    /// Remove an order, returning the record as it stood before deletion.
    fn delete(&self, id: &OrderId) -> DomainResult<Order>;

    /// Every order, oldest first.
    fn list(&self) -> DomainResult<Vec<Order>>;

    /// Every order belonging to one client, oldest first.
    fn list_by_client(&self, client: &ClientId) -> DomainResult<Vec<Order>>;
}

impl<S> OrderStore for Arc<S>
where
    S: OrderStore + ?Sized,
{
    fn create(&self, record: NewOrderRecord) -> DomainResult<Order> {
        (**self).create(record)
    }

    fn get(&self, id: &OrderId) -> DomainResult<Order> {
        (**self).get(id)
    }

    fn update(&self, id: &OrderId, record: NewOrderRecord) -> DomainResult<Order> {
        (**self).update(id, record)
    }

    fn delete(&self, id: &OrderId) -> DomainResult<Order> {
        (**self).delete(id)
    }

    fn list(&self) -> DomainResult<Vec<Order>> {
        (**self).list()
    }

    fn list_by_client(&self, client: &ClientId) -> DomainResult<Vec<Order>> {
        (**self).list_by_client(client)
    }
}

/// In-memory order store.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    inner: RwLock<HashMap<OrderId, Order>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> DomainError {
    DomainError::storage("order store lock poisoned")
}

fn order_not_found(id: &OrderId) -> DomainError {
    DomainError::not_found(format!("order {id}"))
}

impl OrderStore for InMemoryOrderStore {
    fn create(&self, record: NewOrderRecord) -> DomainResult<Order> {
        let now = Utc::now();
        let order = Order {
            id: OrderId::new(),
            order_number: OrderNumber::generate(),
            client: record.fields.client,
            product: record.fields.product,
            assigned_user: record.fields.assigned_user,
            quantity: record.fields.quantity,
            status: record.fields.status,
            total: record.total,
            created_at: now,
            updated_at: now,
        };

        let mut map = self.inner.write().map_err(|_| poisoned())?;
        map.insert(order.id, order.clone());
        Ok(order)
    }

    fn get(&self, id: &OrderId) -> DomainResult<Order> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        map.get(id).cloned().ok_or_else(|| order_not_found(id))
    }

    fn update(&self, id: &OrderId, record: NewOrderRecord) -> DomainResult<Order> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        let order = map.get_mut(id).ok_or_else(|| order_not_found(id))?;

        order.client = record.fields.client;
        order.product = record.fields.product;
        order.assigned_user = record.fields.assigned_user;
        order.quantity = record.fields.quantity;
        order.status = record.fields.status;
        order.total = record.total;
        order.updated_at = Utc::now();

        Ok(order.clone())
    }

    fn delete(&self, id: &OrderId) -> DomainResult<Order> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        map.remove(id).ok_or_else(|| order_not_found(id))
    }

    fn list(&self) -> DomainResult<Vec<Order>> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        let mut orders: Vec<_> = map.values().cloned().collect();
        orders.sort_by_key(|o| o.created_at);
        Ok(orders)
    }

    fn list_by_client(&self, client: &ClientId) -> DomainResult<Vec<Order>> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        let mut orders: Vec<_> = map
            .values()
            .filter(|o| o.client == *client)
            .cloned()
            .collect();
        orders.sort_by_key(|o| o.created_at);
        Ok(orders)
    }
}
