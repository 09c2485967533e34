//! Generic keyed stores for the supporting registries.
//!
//! Clients and suppliers are plain records with no cross-record rules, so one
//! generic store covers both. Users get their own [`UserDirectory`] because
//! the registry enforces unique email, tax id and national id.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use orderdesk_auth::{User, UserId};
use orderdesk_core::{DomainError, DomainResult, Entity};

/// Keyed record storage for a single entity type.
pub trait RecordStore<T: Entity>: Send + Sync {
    fn get(&self, id: &T::Id) -> DomainResult<Option<T>>;
    fn upsert(&self, record: T) -> DomainResult<()>;
    fn remove(&self, id: &T::Id) -> DomainResult<Option<T>>;
    fn list(&self) -> DomainResult<Vec<T>>;
}

impl<T, S> RecordStore<T> for Arc<S>
where
    T: Entity,
    S: RecordStore<T> + ?Sized,
{
    fn get(&self, id: &T::Id) -> DomainResult<Option<T>> {
        (**self).get(id)
    }

    fn upsert(&self, record: T) -> DomainResult<()> {
        (**self).upsert(record)
    }

    fn remove(&self, id: &T::Id) -> DomainResult<Option<T>> {
        (**self).remove(id)
    }

    fn list(&self) -> DomainResult<Vec<T>> {
        (**self).list()
    }
}

fn poisoned() -> DomainError {
    DomainError::storage("record store lock poisoned")
}

/// In-memory record store.
#[derive(Debug)]
pub struct InMemoryRecordStore<T: Entity> {
    inner: RwLock<HashMap<T::Id, T>>,
}

impl<T: Entity> InMemoryRecordStore<T> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl<T: Entity> Default for InMemoryRecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RecordStore<T> for InMemoryRecordStore<T>
where
    T: Entity + Clone + Send + Sync + 'static,
    T::Id: Send + Sync,
{
    fn get(&self, id: &T::Id) -> DomainResult<Option<T>> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        Ok(map.get(id).cloned())
    }

    fn upsert(&self, record: T) -> DomainResult<()> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        map.insert(record.id().clone(), record);
        Ok(())
    }

    fn remove(&self, id: &T::Id) -> DomainResult<Option<T>> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        Ok(map.remove(id))
    }

    fn list(&self) -> DomainResult<Vec<T>> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        Ok(map.values().cloned().collect())
    }
}

/// User registry enforcing unique email, tax id and national id.
///
/// The uniqueness scan and the insert happen under one write lock, so two
/// concurrent registrations with the same email cannot both pass the check.
#[derive(Debug, Default)]
pub struct UserDirectory {
    inner: RwLock<HashMap<UserId, User>>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look a user up by email (compared against the stored, normalized form).
    pub fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let email = email.trim().to_lowercase();
        let map = self.inner.read().map_err(|_| poisoned())?;
        Ok(map.values().find(|u| u.email == email).cloned())
    }
}

fn unique_violation(map: &HashMap<UserId, User>, candidate: &User) -> Option<DomainError> {
    for existing in map.values() {
        if existing.id == candidate.id {
            continue;
        }
        if existing.email == candidate.email {
            return Some(DomainError::conflict(format!(
                "email {} is already registered",
                candidate.email
            )));
        }
        if existing.tax_id == candidate.tax_id {
            return Some(DomainError::conflict(format!(
                "tax id {} is already registered",
                candidate.tax_id
            )));
        }
        if existing.national_id == candidate.national_id {
            return Some(DomainError::conflict(format!(
                "national id {} is already registered",
                candidate.national_id
            )));
        }
    }
    None
}

impl RecordStore<User> for UserDirectory {
    fn get(&self, id: &UserId) -> DomainResult<Option<User>> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        Ok(map.get(id).cloned())
    }

    fn upsert(&self, record: User) -> DomainResult<()> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        if let Some(conflict) = unique_violation(&map, &record) {
            return Err(conflict);
        }
        map.insert(record.id, record);
        Ok(())
    }

    fn remove(&self, id: &UserId) -> DomainResult<Option<User>> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        Ok(map.remove(id))
    }

    fn list(&self) -> DomainResult<Vec<User>> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        Ok(map.values().cloned().collect())
    }
}
