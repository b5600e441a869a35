//! `tablefold-core` — identifier and error primitives shared across the
//! workspace.
//!
//! This crate contains **pure domain** building blocks (no folding logic,
//! no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::DomainError;
pub use id::{EntityId, TenantId};
