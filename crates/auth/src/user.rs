//! Back-office user records.
//!
//! Users are plain directory records here. Credentials, tokens, and sessions
//! belong to the excluded auth layer; what remains is the profile the rest of
//! the back office references (order assignment, attribution display).

use serde::{Deserialize, Serialize};

use orderdesk_core::{DomainError, DomainResult, Entity, EntityId, impl_entity_id};

use crate::Role;

// ─────────────────────────────────────────────────────────────────────────────
// User ID
// ─────────────────────────────────────────────────────────────────────────────

/// Unique identifier for a back-office user.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub EntityId);

impl_entity_id!(UserId, "UserId");

// ─────────────────────────────────────────────────────────────────────────────
// User record
// ─────────────────────────────────────────────────────────────────────────────

/// Caller-supplied fields for registering a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub email: String,
    pub address: Option<String>,
    pub tax_id: String,
    pub phone: Option<String>,
    pub national_id: String,
    /// Defaults to [`Role::Admin`] when absent.
    pub role: Option<Role>,
}

/// Back-office user.
///
/// # Invariants
/// - `email`, `tax_id` and `national_id` are unique within the user
///   directory; the store enforces this with a `Conflict` rejection.
/// - `role` is always one of the closed [`Role`] set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub email: String,
    pub address: Option<String>,
    pub tax_id: String,
    pub phone: Option<String>,
    pub national_id: String,
    pub role: Role,
}

impl User {
    pub fn new(id: UserId, fields: NewUser) -> DomainResult<Self> {
        if fields.first_name.trim().is_empty() {
            return Err(DomainError::validation("user first name cannot be empty"));
        }
        if fields.last_name.trim().is_empty() {
            return Err(DomainError::validation("user last name cannot be empty"));
        }
        if fields.company.trim().is_empty() {
            return Err(DomainError::validation("user company cannot be empty"));
        }
        if fields.email.trim().is_empty() || !fields.email.contains('@') {
            return Err(DomainError::validation("invalid email format"));
        }
        if fields.tax_id.trim().is_empty() {
            return Err(DomainError::validation("user tax id cannot be empty"));
        }
        if fields.national_id.trim().is_empty() {
            return Err(DomainError::validation("user national id cannot be empty"));
        }

        Ok(Self {
            id,
            first_name: fields.first_name,
            last_name: fields.last_name,
            company: fields.company,
            email: fields.email.trim().to_lowercase(),
            address: fields.address,
            tax_id: fields.tax_id,
            phone: fields.phone,
            national_id: fields.national_id,
            role: fields.role.unwrap_or_default(),
        })
    }

    /// Display name used for attribution surfaces.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_fields() -> NewUser {
        NewUser {
            first_name: "Alice".to_string(),
            last_name: "Rios".to_string(),
            company: "Orderdesk SA".to_string(),
            email: "Alice@Example.com".to_string(),
            address: None,
            tax_id: "27-11111111-3".to_string(),
            phone: Some("+54 11 5555-1111".to_string()),
            national_id: "11111111".to_string(),
            role: None,
        }
    }

    #[test]
    fn new_user_defaults_role_and_normalizes_email() {
        let user = User::new(UserId::new(), base_fields()).unwrap();

        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.display_name(), "Alice Rios");
    }

    #[test]
    fn new_user_accepts_explicit_role() {
        let mut fields = base_fields();
        fields.role = Some(Role::Deposit);
        let user = User::new(UserId::new(), fields).unwrap();
        assert_eq!(user.role, Role::Deposit);
    }

    #[test]
    fn new_user_rejects_invalid_email() {
        let mut fields = base_fields();
        fields.email = "invalid-email".to_string();
        let err = User::new(UserId::new(), fields).unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("email")),
            _ => panic!("Expected Validation error for invalid email"),
        }
    }

    #[test]
    fn new_user_rejects_blank_required_fields() {
        for field in ["first_name", "last_name", "company", "tax_id", "national_id"] {
            let mut fields = base_fields();
            match field {
                "first_name" => fields.first_name = "  ".to_string(),
                "last_name" => fields.last_name = String::new(),
                "company" => fields.company = " ".to_string(),
                "tax_id" => fields.tax_id = String::new(),
                "national_id" => fields.national_id = "  ".to_string(),
                _ => unreachable!(),
            }
            assert!(
                User::new(UserId::new(), fields).is_err(),
                "blank {field} should be rejected"
            );
        }
    }
}
