//! `tablefold-infra` — reference collaborators for the folding engine.
//!
//! The engine is a pure primitive; this crate supplies the pieces around
//! it: an [`EventSource`] that owns fetching an ordered event sequence, a
//! [`TableSink`] that makes the finished table durable/queryable, the
//! [`RebuildPipeline`] driving one full load → fold → publish pass, and
//! the [`ProjectionRegistry`] wiring entity-type names to pipelines at
//! configuration time.
//!
//! All implementations here are in-memory references for tests/dev;
//! production deployments substitute their own source and sink.


pub mod rebuild;
pub mod registry;
pub mod sink;
pub mod source;

pub use rebuild::{Rebuild, RebuildError, RebuildPipeline, RebuildReport};
pub use registry::{ProjectionRegistry, RegistryError};
pub use sink::{InMemoryTableSink, SinkError, TableSink};
pub use source::{EventSource, InMemoryEventSource, SourceError};
