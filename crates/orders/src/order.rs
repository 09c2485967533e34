use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use orderdesk_auth::UserId;
use orderdesk_core::{Entity, EntityId, impl_entity_id};
use orderdesk_parties::ClientId;
use orderdesk_products::ProductId;

/// Order identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub EntityId);

impl_entity_id!(OrderId, "OrderId");

/// Human-facing order number, assigned once at creation and immutable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderNumber(String);

impl OrderNumber {
    /// Generate a fresh display number (`P-` + UUID).
    pub fn generate() -> Self {
        Self(format!("P-{}", EntityId::new()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Order fulfillment status.
///
/// `pending`, `preparing` and `shipped` all hold a stock reservation;
/// `cancelled` releases it and is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    Shipped,
    Cancelled,
}

impl OrderStatus {
    /// Whether an order in this status holds a stock reservation.
    pub fn holds_reservation(&self) -> bool {
        !matches!(self, OrderStatus::Cancelled)
    }

    /// Whether quantity/product changes are permitted while moving into this
    /// status. Only orders being prepared or shipped may be re-shaped.
    pub fn allows_reshaping(&self) -> bool {
        matches!(self, OrderStatus::Preparing | OrderStatus::Shipped)
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

/// Order record.
///
/// `total` is derived (`product.price × quantity`) at the time of the last
/// successful reconciliation and never recomputed lazily. `client`,
/// `product` and `assigned_user` are plain references; deleting the records
/// they point at does not cascade here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub order_number: OrderNumber,
    pub client: ClientId,
    pub product: ProductId,
    pub assigned_user: Option<UserId>,
    pub quantity: i64,
    pub status: OrderStatus,
    pub total: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Caller-supplied fields for creating an order.
///
/// `client`, `product` and `quantity` are required; `status` defaults to
/// `pending` when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub client: ClientId,
    pub product: ProductId,
    pub quantity: i64,
    pub status: Option<OrderStatus>,
    pub assigned_user: Option<UserId>,
}

/// Caller-supplied changes for updating an order.
///
/// Absent fields keep their current value. Supplying a field with the value
/// it already has counts as unchanged for transition purposes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderChanges {
    pub client: Option<ClientId>,
    pub product: Option<ProductId>,
    pub quantity: Option<i64>,
    pub status: Option<OrderStatus>,
    pub assigned_user: Option<UserId>,
}
