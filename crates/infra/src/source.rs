//! Event source abstraction: where fold passes get their input.

use std::sync::{Arc, RwLock};

use thiserror::Error;

use tablefold_core::TenantId;
use tablefold_engine::Event;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The source could not produce the sequence (e.g. poisoned state).
    #[error("event source unavailable: {0}")]
    Unavailable(String),
}

/// Supplies a finite, ordered sequence of events for one entity type.
///
/// The sequence must already be in correct causal order; per-key ordering
/// is the source's responsibility, the folder performs no reordering.
/// Passing a tenant restricts the sequence to that tenant's events.
pub trait EventSource<Ev>: Send + Sync
where
    Ev: Event,
{
    fn load(&self, tenant: Option<TenantId>) -> Result<Vec<Ev>, SourceError>;
}

impl<Ev, S> EventSource<Ev> for Arc<S>
where
    Ev: Event,
    S: EventSource<Ev> + ?Sized,
{
    fn load(&self, tenant: Option<TenantId>) -> Result<Vec<Ev>, SourceError> {
        (**self).load(tenant)
    }
}

/// In-memory event log for tests/dev. Append order is replay order.
#[derive(Debug)]
pub struct InMemoryEventSource<Ev> {
    events: RwLock<Vec<Ev>>,
}

impl<Ev> InMemoryEventSource<Ev> {
    pub fn new() -> Self {
        Self {
            events: RwLock::new(Vec::new()),
        }
    }

    /// Append one event to the log.
    ///
    /// Fails the same way `load` does when the log is unavailable: an
    /// accepted append is never silently dropped.
    pub fn append(&self, event: Ev) -> Result<(), SourceError> {
        let mut events = self
            .events
            .write()
            .map_err(|_| SourceError::Unavailable("event log lock poisoned".to_string()))?;
        events.push(event);
        Ok(())
    }

    pub fn extend(&self, batch: impl IntoIterator<Item = Ev>) -> Result<(), SourceError> {
        let mut events = self
            .events
            .write()
            .map_err(|_| SourceError::Unavailable("event log lock poisoned".to_string()))?;
        events.extend(batch);
        Ok(())
    }
}

impl<Ev> Default for InMemoryEventSource<Ev> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Ev> EventSource<Ev> for InMemoryEventSource<Ev>
where
    Ev: Event,
{
    fn load(&self, tenant: Option<TenantId>) -> Result<Vec<Ev>, SourceError> {
        let events = self
            .events
            .read()
            .map_err(|_| SourceError::Unavailable("event log lock poisoned".to_string()))?;

        Ok(match tenant {
            Some(t) => events
                .iter()
                .filter(|e| e.tenant_id() == Some(t))
                .cloned()
                .collect(),
            None => events.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::Utc;
    use tablefold_core::EntityId;
    use tablefold_sites::site::{SiteEvent, SiteProvisioned};
    use tablefold_sites::SiteId;
    use uuid::Uuid;

    fn provisioned(n: u128) -> SiteEvent {
        SiteEvent::SiteProvisioned(SiteProvisioned {
            site_id: SiteId::new(EntityId::from_uuid(Uuid::from_u128(n))),
            tenant_id: None,
            name: format!("site-{n}"),
            occurred_at: Utc::now(),
        })
    }

    #[test]
    fn append_then_load_preserves_append_order() {
        let source = InMemoryEventSource::new();
        source.append(provisioned(1)).unwrap();
        source.extend([provisioned(2), provisioned(3)]).unwrap();

        let events = source.load(None).unwrap();
        let ids: Vec<_> = events.iter().filter_map(|e| e.entity_id()).collect();
        assert_eq!(
            ids,
            vec![
                EntityId::from_uuid(Uuid::from_u128(1)),
                EntityId::from_uuid(Uuid::from_u128(2)),
                EntityId::from_uuid(Uuid::from_u128(3)),
            ]
        );
    }

    #[test]
    fn poisoned_log_fails_writes_the_same_way_as_reads() {
        let source = Arc::new(InMemoryEventSource::<SiteEvent>::new());

        let poisoner = Arc::clone(&source);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.events.write().unwrap();
            panic!("poison the log lock");
        })
        .join();

        let write_err = source.append(provisioned(1)).unwrap_err();
        assert!(matches!(write_err, SourceError::Unavailable(_)));

        let batch_err = source.extend([provisioned(2)]).unwrap_err();
        assert!(matches!(batch_err, SourceError::Unavailable(_)));

        let read_err = source.load(None).unwrap_err();
        assert_eq!(write_err, read_err);
    }
}
