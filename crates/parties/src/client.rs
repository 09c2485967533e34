use serde::{Deserialize, Serialize};

use orderdesk_core::{DomainError, DomainResult, Entity, EntityId, impl_entity_id};

use crate::contact::ContactInfo;

/// Client identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(pub EntityId);

impl_entity_id!(ClientId, "ClientId");

/// Client account status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    #[default]
    Active,
    Inactive,
}

/// Caller-supplied fields for registering a client.
///
/// Required fields are plain values; everything else is optional and may be
/// filled in later through a record update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewClient {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact: Option<ContactInfo>,
    pub tax_id: Option<String>,
    pub national_id: Option<String>,
    pub status: Option<ClientStatus>,
}

/// Client record: a person orders are taken for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    id: ClientId,
    first_name: String,
    last_name: String,
    email: String,
    contact: ContactInfo,
    tax_id: Option<String>,
    national_id: Option<String>,
    status: ClientStatus,
}

impl Client {
    pub fn new(id: ClientId, fields: NewClient) -> DomainResult<Self> {
        if fields.first_name.trim().is_empty() {
            return Err(DomainError::validation("client first name cannot be empty"));
        }
        if fields.last_name.trim().is_empty() {
            return Err(DomainError::validation("client last name cannot be empty"));
        }
        if fields.email.trim().is_empty() || !fields.email.contains('@') {
            return Err(DomainError::validation("invalid client email format"));
        }

        Ok(Self {
            id,
            first_name: fields.first_name,
            last_name: fields.last_name,
            email: fields.email.trim().to_lowercase(),
            contact: fields.contact.unwrap_or_default(),
            tax_id: fields.tax_id,
            national_id: fields.national_id,
            status: fields.status.unwrap_or_default(),
        })
    }

    pub fn id_typed(&self) -> ClientId {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    pub fn tax_id(&self) -> Option<&str> {
        self.tax_id.as_deref()
    }

    pub fn national_id(&self) -> Option<&str> {
        self.national_id.as_deref()
    }

    pub fn status(&self) -> ClientStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == ClientStatus::Active
    }
}

impl Entity for Client {
    type Id = ClientId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_fields() -> NewClient {
        NewClient {
            first_name: "Ana".to_string(),
            last_name: "Gomez".to_string(),
            email: "Ana@Example.com".to_string(),
            contact: None,
            tax_id: Some("20-12345678-9".to_string()),
            national_id: Some("12345678".to_string()),
            status: None,
        }
    }

    #[test]
    fn new_client_normalizes_email_and_defaults_status() {
        let client = Client::new(ClientId::new(), base_fields()).unwrap();

        assert_eq!(client.email(), "ana@example.com");
        assert_eq!(client.status(), ClientStatus::Active);
        assert!(client.is_active());
        assert_eq!(client.tax_id(), Some("20-12345678-9"));
    }

    #[test]
    fn new_client_rejects_blank_names() {
        let mut fields = base_fields();
        fields.first_name = "  ".to_string();
        let err = Client::new(ClientId::new(), fields).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for blank first name"),
        }

        let mut fields = base_fields();
        fields.last_name = String::new();
        assert!(Client::new(ClientId::new(), fields).is_err());
    }

    #[test]
    fn new_client_rejects_malformed_email() {
        let mut fields = base_fields();
        fields.email = "not-an-email".to_string();
        let err = Client::new(ClientId::new(), fields).unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("email")),
            _ => panic!("Expected Validation error for malformed email"),
        }
    }

    #[test]
    fn explicit_status_overrides_the_default() {
        let mut fields = base_fields();
        fields.status = Some(ClientStatus::Inactive);
        let client = Client::new(ClientId::new(), fields).unwrap();
        assert_eq!(client.status(), ClientStatus::Inactive);
        assert!(!client.is_active());
    }
}
