//! In-memory entity store shared by all screens.
//!
//! # Responsibility
//! - Own the client, project and meeting collections for the process lifetime.
//! - Provide add/update/delete entry points and read-only snapshots.
//! - Assign identifiers for new records according to `IdStrategy`.
//!
//! # Invariants
//! - Collections are insertion-ordered and mutated only through `EntityStore`.
//! - Store operations never fail and never reject input; validation belongs to
//!   callers (see `crate::validation`).
//! - Deleting a client never cascades to projects or meetings.

pub mod collection;
pub mod entity_store;

pub use collection::Collection;
pub use entity_store::{EntityStore, IdStrategy, StoreConfig, StoredRecord, UNKNOWN_CLIENT_NAME};
