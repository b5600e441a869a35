//! Keyed projection table: the read-model state a fold pass transforms.

use std::collections::HashMap;

use tablefold_core::{EntityId, TenantId};

use crate::error::FoldError;
use crate::event::Event;

/// Key of a projection table entry: entity id plus optional tenant scope.
///
/// Single-tenant deployments leave the tenant at `None`; tenant-scoped
/// events with equal entity ids resolve to distinct keys.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TableKey {
    entity_id: EntityId,
    tenant_id: Option<TenantId>,
}

impl TableKey {
    pub fn new(entity_id: EntityId, tenant_id: Option<TenantId>) -> Self {
        Self {
            entity_id,
            tenant_id,
        }
    }

    /// Compute the key for an event.
    ///
    /// A missing entity identifier aborts the fold pass: keys are
    /// mandatory for all folding decisions.
    pub fn for_event<Ev: Event>(event: &Ev) -> Result<Self, FoldError> {
        let entity_id = event.entity_id().ok_or(FoldError::MissingEntityId {
            event_type: event.event_type(),
        })?;
        Ok(Self {
            entity_id,
            tenant_id: event.tenant_id(),
        })
    }

    pub fn entity_id(&self) -> EntityId {
        self.entity_id
    }

    pub fn tenant_id(&self) -> Option<TenantId> {
        self.tenant_id
    }
}

/// Mapping from [`TableKey`] to an entity value.
///
/// The table is transient/derived state: it is always rebuildable from the
/// full event log, and callers treat the value returned by a fold pass as
/// the new authoritative state. Insertion order is irrelevant; equality is
/// deep, key-for-key (used to verify idempotent rebuilds).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionTable<E> {
    entries: HashMap<TableKey, E>,
}

impl<E> ProjectionTable<E> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &TableKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &TableKey) -> Option<&E> {
        self.entries.get(key)
    }

    /// Insert or replace the entry for `key`.
    pub fn insert(&mut self, key: TableKey, entity: E) -> Option<E> {
        self.entries.insert(key, entity)
    }

    /// Remove the entry for `key` if present.
    pub fn remove(&mut self, key: &TableKey) -> Option<E> {
        self.entries.remove(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TableKey, &E)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &TableKey> {
        self.entries.keys()
    }

    pub fn entities(&self) -> impl Iterator<Item = &E> {
        self.entries.values()
    }
}

impl<E> Default for ProjectionTable<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> IntoIterator for ProjectionTable<E> {
    type Item = (TableKey, E);
    type IntoIter = std::collections::hash_map::IntoIter<TableKey, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<E> FromIterator<(TableKey, E)> for ProjectionTable<E> {
    fn from_iter<T: IntoIterator<Item = (TableKey, E)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
