//! `tablefold-engine` — the projection-folding primitive.
//!
//! Given a finite, ordered sequence of domain events and the current keyed
//! table of entities, [`ProjectionFolder::fold`] deterministically produces
//! the next table state using the create/update/delete transitions supplied
//! by the entity type's [`FoldPolicy`].
//!
//! The engine is a pure, synchronous library primitive: it performs no IO,
//! holds no state between calls, and never reorders its input. Fetching
//! events and persisting the resulting table belong to the caller (see
//! `tablefold-infra` for reference collaborators).

pub mod error;
pub mod event;
pub mod folder;
pub mod policy;
pub mod table;

pub use error::FoldError;
pub use event::Event;
pub use folder::ProjectionFolder;
pub use policy::{CreateSemantics, FoldPolicy};
pub use table::{ProjectionTable, TableKey};
