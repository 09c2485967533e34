//! Product ledger: the single authoritative write path for stock.
//!
//! Every reservation and release goes through [`ProductLedger::adjust_stock`],
//! which checks availability and writes the new level under the product's own
//! lock. Callers never read stock, decide, and write back separately; two
//! orders racing for the last units serialize here and exactly one wins.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use orderdesk_core::{DomainError, DomainResult};
use orderdesk_products::{Product, ProductId};

/// Authoritative product store.
pub trait ProductLedger: Send + Sync {
    /// Fetch a product snapshot.
    fn get(&self, id: &ProductId) -> DomainResult<Product>;

    /// Apply a signed stock delta atomically and return the updated snapshot.
    ///
    /// Negative deltas reserve stock and fail with `InsufficientStock` when
    /// fewer units are available than requested; positive deltas release
    /// stock unconditionally. A failed adjustment changes nothing.
    fn adjust_stock(&self, id: &ProductId, delta: i64) -> DomainResult<Product>;

    /// Insert a product or replace an existing one wholesale.
    fn upsert(&self, product: Product) -> DomainResult<()>;

    /// Remove a product, returning its last snapshot.
    fn remove(&self, id: &ProductId) -> DomainResult<Product>;

    /// Snapshot every product, ordered by name.
    fn list(&self) -> DomainResult<Vec<Product>>;
}

impl<S> ProductLedger for Arc<S>
where
    S: ProductLedger + ?Sized,
{
    fn get(&self, id: &ProductId) -> DomainResult<Product> {
        (**self).get(id)
    }

    fn adjust_stock(&self, id: &ProductId, delta: i64) -> DomainResult<Product> {
        (**self).adjust_stock(id, delta)
    }

    fn upsert(&self, product: Product) -> DomainResult<()> {
        (**self).upsert(product)
    }

    fn remove(&self, id: &ProductId) -> DomainResult<Product> {
        (**self).remove(id)
    }

    fn list(&self) -> DomainResult<Vec<Product>> {
        (**self).list()
    }
}

/// In-memory ledger keeping each product behind its own mutex.
///
/// Adjustments take the outer map lock for reading and the product's cell
/// lock for writing, so adjustments to different products proceed in
/// parallel while adjustments to the same product serialize. Inserting or
/// removing a product takes the outer lock for writing, which excludes every
/// in-flight adjustment; a cell is never swapped while locked.
#[derive(Debug, Default)]
pub struct InMemoryProductLedger {
    inner: RwLock<HashMap<ProductId, Mutex<Product>>>,
}

impl InMemoryProductLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger preloaded with the given products.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            inner: RwLock::new(
                products
                    .into_iter()
                    .map(|p| (p.id_typed(), Mutex::new(p)))
                    .collect(),
            ),
        }
    }
}

fn poisoned() -> DomainError {
    DomainError::storage("product ledger lock poisoned")
}

impl ProductLedger for InMemoryProductLedger {
    fn get(&self, id: &ProductId) -> DomainResult<Product> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        let cell = map
            .get(id)
            .ok_or_else(|| DomainError::not_found(format!("product {id}")))?;
        let product = cell.lock().map_err(|_| poisoned())?;
        Ok(product.clone())
    }

    fn adjust_stock(&self, id: &ProductId, delta: i64) -> DomainResult<Product> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        let cell = map
            .get(id)
            .ok_or_else(|| DomainError::not_found(format!("product {id}")))?;
        let mut product = cell.lock().map_err(|_| poisoned())?;
        let adjusted = product.adjusted(delta)?;
        *product = adjusted.clone();
        Ok(adjusted)
    }

    fn upsert(&self, product: Product) -> DomainResult<()> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        map.insert(product.id_typed(), Mutex::new(product));
        Ok(())
    }

    fn remove(&self, id: &ProductId) -> DomainResult<Product> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        let cell = map
            .remove(id)
            .ok_or_else(|| DomainError::not_found(format!("product {id}")))?;
        cell.into_inner().map_err(|_| poisoned())
    }

    fn list(&self) -> DomainResult<Vec<Product>> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        let mut products = Vec::with_capacity(map.len());
        for cell in map.values() {
            let product = cell.lock().map_err(|_| poisoned())?;
            products.push(product.clone());
        }
        products.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(products)
    }
}
