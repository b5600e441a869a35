//! The fold pass: one linear walk over an event sequence.
//!
//! Read models are **disposable**; events are the source of truth. The
//! folder rebuilds (or advances) a table deterministically from log order
//! without making any storage assumptions.

use tracing::trace;

use crate::error::FoldError;
use crate::policy::{CreateSemantics, FoldPolicy};
use crate::table::{ProjectionTable, TableKey};

/// Folds event sequences into a projection table using one entity type's
/// [`FoldPolicy`].
///
/// The folder is stateless between calls: each [`fold`](Self::fold) pass
/// is an independent, synchronous computation, so callers may run several
/// folders concurrently as long as each call gets its own table and event
/// slice.
#[derive(Debug)]
pub struct ProjectionFolder<P>
where
    P: FoldPolicy,
{
    policy: P,
}

impl<P> ProjectionFolder<P>
where
    P: FoldPolicy,
{
    pub fn new(policy: P) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Fold `events` into `table`, returning the next table state.
    ///
    /// Events are applied strictly in the order given; the folder performs
    /// no reordering or causal-consistency checks (per-key ordering is the
    /// event source's responsibility). Per event:
    ///
    /// 1. the designated delete kind removes the key if present (no-op
    ///    otherwise);
    /// 2. an event for a present key replaces the entry via `apply`;
    /// 3. a create variant for an absent key inserts the created entity
    ///    (optionally routed through `apply` once, per
    ///    [`CreateSemantics`]) — unless the policy declines it;
    /// 4. anything else is dropped silently.
    ///
    /// The table is taken by value and handed back: the return value is
    /// the new authoritative state. The only error is an event with no
    /// entity identifier, which aborts the pass.
    pub fn fold<'a, I>(
        &self,
        mut table: ProjectionTable<P::Entity>,
        events: I,
    ) -> Result<ProjectionTable<P::Entity>, FoldError>
    where
        I: IntoIterator<Item = &'a P::Ev>,
        P::Ev: 'a,
    {
        for event in events {
            self.fold_one(&mut table, event)?;
        }
        Ok(table)
    }

    fn fold_one(
        &self,
        table: &mut ProjectionTable<P::Entity>,
        event: &P::Ev,
    ) -> Result<(), FoldError> {
        use crate::event::Event;

        let key = TableKey::for_event(event)?;

        if self.policy.is_delete(event) {
            if table.remove(&key).is_none() {
                trace!(event_type = event.event_type(), "delete for absent key, skipping");
            }
            return Ok(());
        }

        if let Some(current) = table.get(&key) {
            let next = self.policy.apply(current.clone(), event);
            table.insert(key, next);
            return Ok(());
        }

        if self.policy.is_create(event) {
            match self.policy.create(event) {
                Some(seed) => {
                    let entity = match self.policy.create_semantics() {
                        CreateSemantics::ApplyAfterCreate => self.policy.apply(seed, event),
                        CreateSemantics::CreateOnly => seed,
                    };
                    table.insert(key, entity);
                }
                None => {
                    // The policy declined this create variant; not an error.
                    trace!(event_type = event.event_type(), "create declined by policy, skipping");
                }
            }
            return Ok(());
        }

        // Update for an unknown key: tolerated (partial/foreign streams).
        trace!(event_type = event.event_type(), "update for unknown key, dropping");
        Ok(())
    }
}
