use thiserror::Error;

/// Error raised by a fold pass.
///
/// The folder is deliberately permissive: unknown event kinds, create
/// variants the policy declines, deletes of absent keys, and updates for
/// unknown keys are all absorbed silently so that evolving the event
/// schema never breaks old projections. The single exception is an event
/// with no subject identifier — without a key there is no sound folding
/// decision, so the pass aborts rather than corrupting the table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FoldError {
    /// An event arrived without its mandatory entity identifier.
    #[error("event '{event_type}' is missing its entity identifier")]
    MissingEntityId { event_type: &'static str },
}
