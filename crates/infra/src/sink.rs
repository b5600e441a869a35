//! Table sink abstraction: where finished fold passes get published.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use thiserror::Error;

use tablefold_core::TenantId;
use tablefold_engine::{ProjectionTable, TableKey};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SinkError {
    /// The sink could not accept the table (e.g. poisoned state).
    #[error("table sink unavailable: {0}")]
    Unavailable(String),
}

/// Receives the complete desired end-state table after a fold pass.
///
/// The folder produces the full table each pass; the sink decides how to
/// persist it. The reference strategy here is full replace per scope
/// (delete-and-reinsert): passing a tenant replaces only that tenant's
/// rows, passing `None` replaces everything.
pub trait TableSink<E>: Send + Sync {
    fn replace(&self, tenant: Option<TenantId>, table: &ProjectionTable<E>)
        -> Result<(), SinkError>;
}

impl<E, S> TableSink<E> for Arc<S>
where
    S: TableSink<E> + ?Sized,
{
    fn replace(
        &self,
        tenant: Option<TenantId>,
        table: &ProjectionTable<E>,
    ) -> Result<(), SinkError> {
        (**self).replace(tenant, table)
    }
}

/// In-memory sink for tests/dev, queryable by key or tenant.
#[derive(Debug)]
pub struct InMemoryTableSink<E> {
    rows: RwLock<HashMap<TableKey, E>>,
}

impl<E> InMemoryTableSink<E>
where
    E: Clone,
{
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
        }
    }

    pub fn get(&self, key: &TableKey) -> Option<E> {
        let rows = self.rows.read().ok()?;
        rows.get(key).cloned()
    }

    /// List rows, optionally restricted to one tenant.
    pub fn list(&self, tenant: Option<TenantId>) -> Vec<E> {
        let rows = match self.rows.read() {
            Ok(r) => r,
            Err(_) => return vec![],
        };

        rows.iter()
            .filter(|(k, _)| tenant.is_none() || k.tenant_id() == tenant)
            .map(|(_, v)| v.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rows.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E> Default for InMemoryTableSink<E>
where
    E: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E> TableSink<E> for InMemoryTableSink<E>
where
    E: Clone + Send + Sync + 'static,
{
    fn replace(
        &self,
        tenant: Option<TenantId>,
        table: &ProjectionTable<E>,
    ) -> Result<(), SinkError> {
        let mut rows = self
            .rows
            .write()
            .map_err(|_| SinkError::Unavailable("row store lock poisoned".to_string()))?;

        // Truncate the scope, then reinsert the pass's end state.
        match tenant {
            Some(t) => rows.retain(|k, _| k.tenant_id() != Some(t)),
            None => rows.clear(),
        }
        for (key, entity) in table.iter() {
            rows.insert(*key, entity.clone());
        }

        Ok(())
    }
}
