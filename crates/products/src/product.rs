use serde::{Deserialize, Serialize};

use orderdesk_core::{DomainError, DomainResult, Entity, EntityId, impl_entity_id};

/// Product identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub EntityId);

impl_entity_id!(ProductId, "ProductId");

/// Catalog product.
///
/// `price` is in the smallest currency unit (e.g., cents). `stock` is the
/// number of units on hand and never goes negative; the only mutation path
/// for it is [`Product::adjusted`], which the product ledger calls under its
/// per-product lock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: u64,
    stock: i64,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: u64, stock: i64) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        if stock < 0 {
            return Err(DomainError::validation(format!(
                "product stock cannot be negative (got {stock})"
            )));
        }

        Ok(Self {
            id,
            name,
            price,
            stock,
        })
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn stock(&self) -> i64 {
        self.stock
    }

    /// Return a copy of this product with `stock += delta`.
    ///
    /// A negative delta is a reservation, a positive one a release. Fails
    /// with `InsufficientStock` if the result would be negative, leaving
    /// the product untouched.
    pub fn adjusted(&self, delta: i64) -> DomainResult<Self> {
        let new_stock = self.stock.checked_add(delta).ok_or_else(|| {
            DomainError::validation(format!("stock adjustment by {delta} overflows"))
        })?;
        if new_stock < 0 {
            return Err(DomainError::insufficient_stock(-delta, self.stock));
        }

        Ok(Self {
            stock: new_stock,
            ..self.clone()
        })
    }

    /// Price `quantity` units at the current unit price.
    pub fn line_total(&self, quantity: i64) -> DomainResult<u64> {
        let quantity =
            u64::try_from(quantity).map_err(|_| DomainError::invalid_quantity(quantity))?;
        self.price.checked_mul(quantity).ok_or_else(|| {
            DomainError::validation(format!(
                "total for {quantity} units of {} overflows",
                self.name
            ))
        })
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product_id() -> ProductId {
        ProductId::new()
    }

    fn test_product(stock: i64) -> Product {
        Product::new(test_product_id(), "Widget", 500, stock).unwrap()
    }

    #[test]
    fn new_product_holds_supplied_fields() {
        let id = test_product_id();
        let product = Product::new(id, "Widget", 500, 10).unwrap();

        assert_eq!(product.id_typed(), id);
        assert_eq!(product.name(), "Widget");
        assert_eq!(product.price(), 500);
        assert_eq!(product.stock(), 10);
    }

    #[test]
    fn new_product_rejects_empty_name() {
        let err = Product::new(test_product_id(), "   ", 500, 10).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for empty name"),
        }
    }

    #[test]
    fn new_product_rejects_negative_stock() {
        let err = Product::new(test_product_id(), "Widget", 500, -1).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for negative stock"),
        }
    }

    #[test]
    fn adjusted_reserves_and_releases() {
        let product = test_product(10);

        let reserved = product.adjusted(-3).unwrap();
        assert_eq!(reserved.stock(), 7);
        // The receiver is never mutated.
        assert_eq!(product.stock(), 10);

        let released = reserved.adjusted(3).unwrap();
        assert_eq!(released.stock(), 10);
    }

    #[test]
    fn adjusted_rejects_overdraw() {
        let product = test_product(2);

        let err = product.adjusted(-3).unwrap_err();
        match err {
            DomainError::InsufficientStock {
                requested,
                available,
            } => {
                assert_eq!(requested, 3);
                assert_eq!(available, 2);
            }
            _ => panic!("Expected InsufficientStock error"),
        }
        assert_eq!(product.stock(), 2);
    }

    #[test]
    fn adjusted_allows_draining_to_zero() {
        let product = test_product(3);
        let drained = product.adjusted(-3).unwrap();
        assert_eq!(drained.stock(), 0);
    }

    #[test]
    fn adjusted_rejects_overflow() {
        let product = test_product(i64::MAX);
        let err = product.adjusted(1).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for overflow"),
        }
    }

    #[test]
    fn line_total_prices_at_the_unit_price() {
        let product = test_product(10);
        assert_eq!(product.line_total(3).unwrap(), 1500);
        assert_eq!(product.line_total(0).unwrap(), 0);
    }

    #[test]
    fn line_total_rejects_negative_quantity_and_overflow() {
        let product = test_product(10);
        assert!(matches!(
            product.line_total(-1),
            Err(DomainError::InvalidQuantity(-1))
        ));

        let pricey = Product::new(test_product_id(), "Widget", u64::MAX, 1).unwrap();
        assert!(matches!(
            pricey.line_total(2),
            Err(DomainError::Validation(_))
        ));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Stock never goes negative through any chain of adjustments.
            #[test]
            fn stock_never_negative(
                initial in 0i64..10_000,
                deltas in prop::collection::vec(-100i64..100, 0..50),
            ) {
                let mut product = test_product(initial);
                for delta in deltas {
                    if let Ok(adjusted) = product.adjusted(delta) {
                        product = adjusted;
                    }
                    prop_assert!(product.stock() >= 0);
                }
            }

            /// A rejected adjustment leaves the product unchanged.
            #[test]
            fn rejected_adjustment_changes_nothing(initial in 0i64..100) {
                let product = test_product(initial);
                let overdraw = -(initial + 1);
                prop_assert!(product.adjusted(overdraw).is_err());
                prop_assert_eq!(product.stock(), initial);
            }
        }
    }
}
