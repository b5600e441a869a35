use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tablefold_core::{Entity, EntityId, TenantId};
use tablefold_engine::{Event, FoldPolicy};

/// Site identifier (tenant-scoped via `tenant_id` fields in events).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteId(pub EntityId);

impl SiteId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for SiteId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Projected read-model entry: the current state of one site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    id: SiteId,
    name: String,
}

impl Site {
    pub fn id_typed(&self) -> SiteId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Entity for Site {
    fn entity_id(&self) -> EntityId {
        self.id.0
    }
}

/// Event: SiteProvisioned (primary create shape).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteProvisioned {
    pub site_id: SiteId,
    pub tenant_id: Option<TenantId>,
    pub name: String,
    pub occurred_at: DateTime<Utc>,
}

/// Event: SiteImported (secondary create shape, e.g. bulk migration).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteImported {
    pub site_id: SiteId,
    pub tenant_id: Option<TenantId>,
    pub name: String,
    /// Where the record was imported from.
    pub origin: String,
    pub occurred_at: DateTime<Utc>,
}

/// Event: SiteRenamed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteRenamed {
    pub site_id: SiteId,
    pub tenant_id: Option<TenantId>,
    pub name: String,
    pub occurred_at: DateTime<Utc>,
}

/// Event: SiteArchived. The directory does not track archival, so the
/// policy folds this as the identity transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteArchived {
    pub site_id: SiteId,
    pub tenant_id: Option<TenantId>,
    pub occurred_at: DateTime<Utc>,
}

/// Event: SiteDeleted (designated delete kind for the directory).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteDeleted {
    pub site_id: SiteId,
    pub tenant_id: Option<TenantId>,
    pub occurred_at: DateTime<Utc>,
}

/// Event: SiteNoteAttached. The subject id is optional at the source
/// boundary; a note without one is a malformed event and aborts a fold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteNoteAttached {
    pub site_id: Option<SiteId>,
    pub tenant_id: Option<TenantId>,
    pub note: String,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SiteEvent {
    SiteProvisioned(SiteProvisioned),
    SiteImported(SiteImported),
    SiteRenamed(SiteRenamed),
    SiteArchived(SiteArchived),
    SiteDeleted(SiteDeleted),
    SiteNoteAttached(SiteNoteAttached),
}

impl Event for SiteEvent {
    fn event_type(&self) -> &'static str {
        match self {
            SiteEvent::SiteProvisioned(_) => "sites.site.provisioned",
            SiteEvent::SiteImported(_) => "sites.site.imported",
            SiteEvent::SiteRenamed(_) => "sites.site.renamed",
            SiteEvent::SiteArchived(_) => "sites.site.archived",
            SiteEvent::SiteDeleted(_) => "sites.site.deleted",
            SiteEvent::SiteNoteAttached(_) => "sites.site.note_attached",
        }
    }

    fn entity_id(&self) -> Option<EntityId> {
        match self {
            SiteEvent::SiteProvisioned(e) => Some(e.site_id.0),
            SiteEvent::SiteImported(e) => Some(e.site_id.0),
            SiteEvent::SiteRenamed(e) => Some(e.site_id.0),
            SiteEvent::SiteArchived(e) => Some(e.site_id.0),
            SiteEvent::SiteDeleted(e) => Some(e.site_id.0),
            SiteEvent::SiteNoteAttached(e) => e.site_id.map(|id| id.0),
        }
    }

    fn tenant_id(&self) -> Option<TenantId> {
        match self {
            SiteEvent::SiteProvisioned(e) => e.tenant_id,
            SiteEvent::SiteImported(e) => e.tenant_id,
            SiteEvent::SiteRenamed(e) => e.tenant_id,
            SiteEvent::SiteArchived(e) => e.tenant_id,
            SiteEvent::SiteDeleted(e) => e.tenant_id,
            SiteEvent::SiteNoteAttached(e) => e.tenant_id,
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            SiteEvent::SiteProvisioned(e) => e.occurred_at,
            SiteEvent::SiteImported(e) => e.occurred_at,
            SiteEvent::SiteRenamed(e) => e.occurred_at,
            SiteEvent::SiteArchived(e) => e.occurred_at,
            SiteEvent::SiteDeleted(e) => e.occurred_at,
            SiteEvent::SiteNoteAttached(e) => e.occurred_at,
        }
    }
}

/// Fold policy for the site directory.
///
/// Both create shapes capture every field they carry, so `apply` treats
/// them as identity and the default create semantics are harmless.
#[derive(Debug, Default)]
pub struct SitePolicy;

impl FoldPolicy for SitePolicy {
    type Ev = SiteEvent;
    type Entity = Site;

    fn is_create(&self, event: &SiteEvent) -> bool {
        matches!(
            event,
            SiteEvent::SiteProvisioned(_) | SiteEvent::SiteImported(_)
        )
    }

    fn create(&self, event: &SiteEvent) -> Option<Site> {
        match event {
            SiteEvent::SiteProvisioned(e) => Some(Site {
                id: e.site_id,
                name: e.name.clone(),
            }),
            SiteEvent::SiteImported(e) => Some(Site {
                id: e.site_id,
                name: e.name.clone(),
            }),
            _ => None,
        }
    }

    fn apply(&self, mut site: Site, event: &SiteEvent) -> Site {
        match event {
            SiteEvent::SiteRenamed(e) => {
                site.name = e.name.clone();
            }
            // Creates already captured their fields; everything else is
            // not tracked by the directory.
            _ => {}
        }
        site
    }

    fn is_delete(&self, event: &SiteEvent) -> bool {
        matches!(event, SiteEvent::SiteDeleted(_))
    }
}
