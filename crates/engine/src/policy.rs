//! Per-entity-type fold transitions.

use crate::event::Event;

/// Whether the creating event is also routed through `apply` once the
/// entity has been created.
///
/// This is an explicit configuration choice of the policy: entity types
/// whose `create` only sets the identity rely on `ApplyAfterCreate` to
/// fold in same-event extra fields, while policies whose `create` already
/// captures every field can opt out with `CreateOnly`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum CreateSemantics {
    /// Insert `apply(create(e), e)` — the creating event is applied once.
    #[default]
    ApplyAfterCreate,
    /// Insert `create(e)` as-is.
    CreateOnly,
}

/// Fold transitions for one entity type.
///
/// A policy is a pair of pure functions plus a designated delete-event
/// kind. Policies must be deterministic and side-effect free: the folder
/// relies on them to make replay reproducible.
///
/// ## Ignore-unknown contract
///
/// Multiple independently configured folders may run over the same event
/// stream. A policy therefore declares, per event, whether the event is
/// one of its create variants (`is_create`) and may still decline it in
/// `create` by returning `None` — both are silent skips, never errors.
/// `apply` handles unrecognized kinds as the identity transition.
pub trait FoldPolicy {
    type Ev: Event;
    type Entity: Clone + core::fmt::Debug;

    /// Whether `event` is one of this entity type's create variants.
    ///
    /// The set of create variants is closed per entity type and dispatched
    /// via the event enum, not runtime type lookup.
    fn is_create(&self, event: &Self::Ev) -> bool;

    /// Originate an entity from a create event.
    ///
    /// Returning `None` declares "this particular create variant does not
    /// apply to this entity type"; the folder skips the event without
    /// raising an error.
    fn create(&self, event: &Self::Ev) -> Option<Self::Entity>;

    /// Update transition: fold `event` into an existing entity.
    ///
    /// Must be the identity for event kinds the entity does not recognize,
    /// and must never change the entity's identifying key.
    fn apply(&self, entity: Self::Entity, event: &Self::Ev) -> Self::Entity;

    /// Whether `event` is the designated delete-event kind.
    ///
    /// Defaults to `false` (no delete kind configured).
    fn is_delete(&self, _event: &Self::Ev) -> bool {
        false
    }

    /// How the creating event itself is folded. See [`CreateSemantics`].
    fn create_semantics(&self) -> CreateSemantics {
        CreateSemantics::default()
    }
}
