use serde::{Deserialize, Serialize};

use orderdesk_core::{EntityId, impl_entity_id};

use crate::Role;

/// Identity of an authenticated caller (human user, service account, etc).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(pub EntityId);

impl_entity_id!(ActorId, "ActorId");

/// The authenticated caller, as handed over by the (out of scope) auth layer.
///
/// The engine consumes this for attribution only: it is stamped onto the
/// operation's log records, never used for enforcement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    pub role: Option<Role>,
}

impl Actor {
    pub fn new(id: ActorId) -> Self {
        Self { id, role: None }
    }

    pub fn with_role(id: ActorId, role: Role) -> Self {
        Self {
            id,
            role: Some(role),
        }
    }
}

impl core::fmt::Display for Actor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.id, f)
    }
}
