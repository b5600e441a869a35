//! Entity trait: identity + continuity across folded state changes.

use crate::id::EntityId;

/// A projected entity value.
///
/// Entities are immutable values keyed by the identifier of their
/// originating create event; folding replaces entries wholesale rather
/// than mutating them in place.
pub trait Entity: Clone + core::fmt::Debug {
    /// Returns the stable entity identifier.
    ///
    /// Fold policies must preserve this across `apply` transitions: an
    /// update never changes the identifying key of the entry it replaces.
    fn entity_id(&self) -> EntityId;
}
