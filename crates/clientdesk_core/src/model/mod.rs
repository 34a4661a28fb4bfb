//! Domain records for the client, project and meeting screens.
//!
//! # Responsibility
//! - Define the three record shapes held by the entity store.
//! - Provide the `Record` contract used for id-based lookup.
//!
//! # Invariants
//! - Identifiers are caller-assigned integers; uniqueness is not enforced here.
//! - `client_id` references are plain integers and may dangle.

pub mod client;
pub mod meeting;
pub mod project;

/// Integer identifier shared by all record kinds.
pub type EntityId = i64;

/// Minimal contract for records kept in an insertion-ordered collection.
pub trait Record: Clone {
    /// Stable lowercase label used in diagnostics (`client|project|meeting`).
    const KIND: &'static str;

    /// Identifier used by update/delete matching.
    fn id(&self) -> EntityId;
}
