use core::str::FromStr;

use serde::{Deserialize, Serialize};

use orderdesk_core::DomainError;

/// Back-office role.
///
/// A closed set: values outside it are rejected at the boundary. Mapping
/// roles to permissions is the caller/policy layer's business, not ours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Role {
    #[default]
    #[serde(rename = "ADMIN_ROLE")]
    Admin,
    #[serde(rename = "USER_ROLE")]
    User,
    #[serde(rename = "SALES_ROLE")]
    Sales,
    #[serde(rename = "DEPOSIT_ROLE")]
    Deposit,
}

impl Role {
    /// Wire name, as stored in the user directory.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN_ROLE",
            Role::User => "USER_ROLE",
            Role::Sales => "SALES_ROLE",
            Role::Deposit => "DEPOSIT_ROLE",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN_ROLE" => Ok(Role::Admin),
            "USER_ROLE" => Ok(Role::User),
            "SALES_ROLE" => Ok(Role::Sales),
            "DEPOSIT_ROLE" => Ok(Role::Deposit),
            other => Err(DomainError::validation(format!(
                "{other} is not a permitted role"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_wire_name() {
        for role in [Role::Admin, Role::User, Role::Sales, Role::Deposit] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn unknown_role_is_rejected() {
        let err = "SUPERUSER_ROLE".parse::<Role>().unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("SUPERUSER_ROLE")),
            _ => panic!("Expected Validation error for unknown role"),
        }
    }

    #[test]
    fn default_role_is_admin() {
        assert_eq!(Role::default(), Role::Admin);
    }
}
