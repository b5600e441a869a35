//! Entity-type name → rebuild pipeline wiring.
//!
//! The mapping is configuration, assembled once at startup; only the
//! name → pipeline dispatch is dynamic. A name that was never registered
//! is a configuration error — the folder itself never sees an event
//! stream without a resolved policy.

use std::collections::HashMap;

use anyhow::Context;
use thiserror::Error;

use tablefold_core::TenantId;

use crate::rebuild::{Rebuild, RebuildError, RebuildReport};

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("no entity type named '{0}' is registered")]
    UnknownEntityType(String),

    #[error(transparent)]
    Rebuild(#[from] RebuildError),
}

/// Statically-configured set of named rebuild pipelines.
#[derive(Default)]
pub struct ProjectionRegistry {
    pipelines: HashMap<String, Box<dyn Rebuild>>,
}

impl ProjectionRegistry {
    pub fn new() -> Self {
        Self {
            pipelines: HashMap::new(),
        }
    }

    /// Register a pipeline under its entity-type name.
    ///
    /// Re-registering a name replaces the previous pipeline (last wins,
    /// matching configuration-file override semantics).
    pub fn register(mut self, pipeline: Box<dyn Rebuild>) -> Self {
        self.pipelines
            .insert(pipeline.entity_type().to_string(), pipeline);
        self
    }

    pub fn entity_types(&self) -> impl Iterator<Item = &str> {
        self.pipelines.keys().map(String::as_str)
    }

    pub fn contains(&self, entity_type: &str) -> bool {
        self.pipelines.contains_key(entity_type)
    }

    /// Rebuild one entity type's projection, optionally tenant-scoped.
    pub fn rebuild(
        &self,
        entity_type: &str,
        tenant: Option<TenantId>,
    ) -> Result<RebuildReport, RegistryError> {
        let pipeline = self
            .pipelines
            .get(entity_type)
            .ok_or_else(|| RegistryError::UnknownEntityType(entity_type.to_string()))?;

        Ok(pipeline.rebuild(tenant)?)
    }

    /// Rebuild every registered projection.
    ///
    /// Stops at the first failing pipeline, naming it in the error chain.
    pub fn rebuild_all(&self, tenant: Option<TenantId>) -> anyhow::Result<Vec<RebuildReport>> {
        let mut reports = Vec::with_capacity(self.pipelines.len());
        for (name, pipeline) in &self.pipelines {
            let report = pipeline
                .rebuild(tenant)
                .with_context(|| format!("rebuilding projection '{name}'"))?;
            reports.push(report);
        }
        Ok(reports)
    }
}
