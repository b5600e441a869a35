//! Rebuild driver: one full load → fold → publish pass.

use thiserror::Error;
use tracing::info;

use tablefold_core::TenantId;
use tablefold_engine::{FoldError, FoldPolicy, ProjectionFolder, ProjectionTable};

use crate::sink::{SinkError, TableSink};
use crate::source::{EventSource, SourceError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RebuildError {
    #[error("event source error: {0}")]
    Source(#[from] SourceError),

    #[error("fold error: {0}")]
    Fold(#[from] FoldError),

    #[error("table sink error: {0}")]
    Sink(#[from] SinkError),
}

/// Outcome of a completed rebuild pass.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RebuildReport {
    pub events_replayed: usize,
    pub entities_projected: usize,
}

/// Object-safe rebuild handle, dispatched by entity-type name from the
/// registry.
pub trait Rebuild: Send + Sync {
    /// Entity-type name this pipeline projects (e.g. "site").
    fn entity_type(&self) -> &str;

    /// Run one full rebuild pass, optionally scoped to a tenant.
    fn rebuild(&self, tenant: Option<TenantId>) -> Result<RebuildReport, RebuildError>;
}

/// Ties one entity type's source, folder, and sink together.
///
/// Each pass folds from an **empty** table (read models are disposable;
/// the event log is the source of truth) and publishes the result only
/// after the whole pass completed — a partial fold is never externally
/// visible.
pub struct RebuildPipeline<P, Src, Snk>
where
    P: FoldPolicy,
{
    entity_type: String,
    folder: ProjectionFolder<P>,
    source: Src,
    sink: Snk,
}

impl<P, Src, Snk> RebuildPipeline<P, Src, Snk>
where
    P: FoldPolicy,
    Src: EventSource<P::Ev>,
    Snk: TableSink<P::Entity>,
{
    pub fn new(entity_type: impl Into<String>, policy: P, source: Src, sink: Snk) -> Self {
        Self {
            entity_type: entity_type.into(),
            folder: ProjectionFolder::new(policy),
            source,
            sink,
        }
    }

    pub fn run(&self, tenant: Option<TenantId>) -> Result<RebuildReport, RebuildError> {
        let events = self.source.load(tenant)?;
        let table = self.folder.fold(ProjectionTable::new(), events.iter())?;

        self.sink.replace(tenant, &table)?;

        let report = RebuildReport {
            events_replayed: events.len(),
            entities_projected: table.len(),
        };

        info!(
            entity_type = %self.entity_type,
            tenant = ?tenant,
            events = report.events_replayed,
            entities = report.entities_projected,
            "projection rebuilt"
        );

        Ok(report)
    }
}

impl<P, Src, Snk> Rebuild for RebuildPipeline<P, Src, Snk>
where
    P: FoldPolicy,
    P::Ev: Send + Sync,
    P::Entity: Send + Sync,
    P: Send + Sync,
    Src: EventSource<P::Ev>,
    Snk: TableSink<P::Entity>,
{
    fn entity_type(&self) -> &str {
        &self.entity_type
    }

    fn rebuild(&self, tenant: Option<TenantId>) -> Result<RebuildReport, RebuildError> {
        self.run(tenant)
    }
}
