//! Order service: the operation surface handed to callers.
//!
//! The service wraps the engine with the checks that are not stock-related.
//! It verifies that a referenced client actually exists, attributes every
//! mutation to the acting user, and passes reads straight through to the
//! stores. Authorization itself happens upstream; the actor reaching this
//! layer is already authenticated.

use orderdesk_auth::Actor;
use orderdesk_core::{DomainError, DomainResult};
use orderdesk_orders::{Order, OrderChanges, OrderDraft, OrderId};
use orderdesk_parties::{Client, ClientId};
use orderdesk_store::{OrderStore, ProductLedger, RecordStore};

use crate::reconcile::ReconciliationEngine;

pub struct OrderService<L, S, C> {
    engine: ReconciliationEngine<L, S>,
    clients: C,
}

impl<L, S, C> OrderService<L, S, C>
where
    L: ProductLedger,
    S: OrderStore,
    C: RecordStore<Client>,
{
    pub fn new(engine: ReconciliationEngine<L, S>, clients: C) -> Self {
        Self { engine, clients }
    }

    /// Take a new order for an existing client.
    pub fn create_order(&self, draft: OrderDraft, actor: &Actor) -> DomainResult<Order> {
        self.ensure_client(&draft.client)?;
        let order = self.engine.create_order(&draft)?;
        tracing::info!("actor {} created order {}", actor, order.order_number);
        Ok(order)
    }

    /// Apply changes to an order. A changed client reference must point at an
    /// existing client; an unchanged one is not re-checked.
    pub fn update_order(
        &self,
        id: &OrderId,
        changes: OrderChanges,
        actor: &Actor,
    ) -> DomainResult<Order> {
        if let Some(client) = &changes.client {
            self.ensure_client(client)?;
        }
        let order = self.engine.update_order(id, &changes)?;
        tracing::info!("actor {} updated order {}", actor, order.order_number);
        Ok(order)
    }

    /// Delete an order, returning its final snapshot.
    pub fn delete_order(&self, id: &OrderId, actor: &Actor) -> DomainResult<Order> {
        let snapshot = self.engine.delete_order(id)?;
        tracing::info!("actor {} deleted order {}", actor, snapshot.order_number);
        Ok(snapshot)
    }

    pub fn get_order(&self, id: &OrderId) -> DomainResult<Order> {
        self.engine.orders().get(id)
    }

    pub fn list_orders(&self) -> DomainResult<Vec<Order>> {
        self.engine.orders().list()
    }

    /// Every order for one existing client, oldest first.
    pub fn orders_for_client(&self, client: &ClientId) -> DomainResult<Vec<Order>> {
        self.ensure_client(client)?;
        self.engine.orders().list_by_client(client)
    }

    fn ensure_client(&self, id: &ClientId) -> DomainResult<()> {
        match self.clients.get(id)? {
            Some(_) => Ok(()),
            None => Err(DomainError::not_found(format!("client {id}"))),
        }
    }
}
