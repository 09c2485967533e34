use serde::{Deserialize, Serialize};

use orderdesk_core::{DomainError, DomainResult, Entity, EntityId, impl_entity_id};

use crate::contact::ContactInfo;

/// Supplier identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupplierId(pub EntityId);

impl_entity_id!(SupplierId, "SupplierId");

/// Caller-supplied fields for registering a supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSupplier {
    pub name: String,
    pub email: Option<String>,
    pub contact: Option<ContactInfo>,
    pub tax_id: Option<String>,
    /// Fiscal situation label as reported by the supplier (free-form).
    pub tax_status: Option<String>,
    /// Per-unit purchase cost in the smallest currency unit.
    pub unit_cost: Option<u64>,
    /// Wholesale purchase cost in the smallest currency unit.
    pub wholesale_cost: Option<u64>,
}

/// Supplier record: a company products are purchased from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    id: SupplierId,
    name: String,
    email: Option<String>,
    contact: ContactInfo,
    tax_id: Option<String>,
    tax_status: Option<String>,
    unit_cost: Option<u64>,
    wholesale_cost: Option<u64>,
}

impl Supplier {
    pub fn new(id: SupplierId, fields: NewSupplier) -> DomainResult<Self> {
        if fields.name.trim().is_empty() {
            return Err(DomainError::validation("supplier name cannot be empty"));
        }
        let email = match fields.email {
            Some(e) if e.trim().is_empty() || !e.contains('@') => {
                return Err(DomainError::validation("invalid supplier email format"));
            }
            Some(e) => Some(e.trim().to_lowercase()),
            None => None,
        };

        Ok(Self {
            id,
            name: fields.name,
            email,
            contact: fields.contact.unwrap_or_default(),
            tax_id: fields.tax_id,
            tax_status: fields.tax_status,
            unit_cost: fields.unit_cost,
            wholesale_cost: fields.wholesale_cost,
        })
    }

    pub fn id_typed(&self) -> SupplierId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    pub fn tax_id(&self) -> Option<&str> {
        self.tax_id.as_deref()
    }

    pub fn tax_status(&self) -> Option<&str> {
        self.tax_status.as_deref()
    }

    pub fn unit_cost(&self) -> Option<u64> {
        self.unit_cost
    }

    pub fn wholesale_cost(&self) -> Option<u64> {
        self.wholesale_cost
    }
}

impl Entity for Supplier {
    type Id = SupplierId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
