use chrono::{DateTime, Utc};

use tablefold_core::{EntityId, TenantId};

/// A domain-agnostic event.
///
/// Events are:
/// - **immutable** (treat them as facts)
/// - identified by a **stable subject key** (entity id, optionally
///   tenant-scoped)
/// - designed to be **append-only** and replayed in log order
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event kind identifier (e.g. "sites.site.created").
    fn event_type(&self) -> &'static str;

    /// Identifier of the entity this event is about.
    ///
    /// `None` models a malformed event whose subject identifier is missing
    /// at the source boundary. The folder treats that as fatal for the
    /// pass: every folding decision needs a key.
    fn entity_id(&self) -> Option<EntityId>;

    /// Optional tenant tag.
    ///
    /// When present, the tenant becomes part of the table key: two events
    /// with equal entity ids but different tenants never collide.
    fn tenant_id(&self) -> Option<TenantId> {
        None
    }

    /// When the event occurred (business time).
    fn occurred_at(&self) -> DateTime<Utc>;
}
