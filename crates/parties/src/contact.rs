use serde::{Deserialize, Serialize};

/// Contact information shared by catalog records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub address: Option<String>,
    pub phone: Option<String>,
}
