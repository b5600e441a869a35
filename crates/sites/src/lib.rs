//! `tablefold-sites` — reference entity type for the folding engine.
//!
//! A minimal "site directory": sites are created (from two distinct create
//! shapes), renamed, and deleted. Serves as the canonical example of wiring
//! a [`tablefold_engine::FoldPolicy`] and as the fixture for end-to-end
//! rebuild tests in `tablefold-infra`.

pub mod site;

pub use site::{Site, SiteEvent, SiteId, SitePolicy};
