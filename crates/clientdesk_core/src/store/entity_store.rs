//! Process-wide entity store.
//!
//! # Responsibility
//! - Hold the three record collections and expose their mutations.
//! - Resolve dangling client references to a placeholder label.
//!
//! # Invariants
//! - `add` always appends, even when the id already exists.
//! - `update` and `delete` are silent no-ops for unknown ids.
//! - Ids handed out by `next_id` under `IdStrategy::Monotonic` are never
//!   reused within one store, regardless of deletions.

use crate::model::client::Client;
use crate::model::meeting::Meeting;
use crate::model::project::Project;
use crate::model::{EntityId, Record};
use crate::store::collection::Collection;
use log::{debug, warn};

/// Display label for a project/meeting whose client no longer exists.
pub const UNKNOWN_CLIENT_NAME: &str = "Unknown";

/// Policy used by `EntityStore::next_id`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdStrategy {
    /// One past the highest id ever appended to the collection.
    #[default]
    Monotonic,
    /// `len + 1`. Collides with live ids after a deletion; kept for
    /// compatibility with data captured from the legacy screens.
    LengthPlusOne,
}

/// Store construction options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreConfig {
    pub id_strategy: IdStrategy,
}

/// Record kinds that live in an `EntityStore` collection.
pub trait StoredRecord: Record {
    fn collection(store: &EntityStore) -> &Collection<Self>;

    #[doc(hidden)]
    fn collection_mut(store: &mut EntityStore) -> &mut Collection<Self>;
}

impl StoredRecord for Client {
    fn collection(store: &EntityStore) -> &Collection<Self> {
        &store.clients
    }

    fn collection_mut(store: &mut EntityStore) -> &mut Collection<Self> {
        &mut store.clients
    }
}

impl StoredRecord for Project {
    fn collection(store: &EntityStore) -> &Collection<Self> {
        &store.projects
    }

    fn collection_mut(store: &mut EntityStore) -> &mut Collection<Self> {
        &mut store.projects
    }
}

impl StoredRecord for Meeting {
    fn collection(store: &EntityStore) -> &Collection<Self> {
        &store.meetings
    }

    fn collection_mut(store: &mut EntityStore) -> &mut Collection<Self> {
        &mut store.meetings
    }
}

/// Single source of truth for clients, projects and meetings.
///
/// Passed by reference to whichever screen needs it; there is no global
/// instance.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    config: StoreConfig,
    clients: Collection<Client>,
    projects: Collection<Project>,
    meetings: Collection<Meeting>,
}

impl EntityStore {
    /// Creates an empty store with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with explicit configuration.
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> StoreConfig {
        self.config
    }

    pub fn clients(&self) -> &[Client] {
        self.clients.as_slice()
    }

    pub fn projects(&self) -> &[Project] {
        self.projects.as_slice()
    }

    pub fn meetings(&self) -> &[Meeting] {
        self.meetings.as_slice()
    }

    pub fn client(&self, id: EntityId) -> Option<&Client> {
        self.clients.get(id)
    }

    pub fn project(&self, id: EntityId) -> Option<&Project> {
        self.projects.get(id)
    }

    pub fn meeting(&self, id: EntityId) -> Option<&Meeting> {
        self.meetings.get(id)
    }

    /// Returns the client's name, or `"Unknown"` when the reference dangles
    /// or the stored name is empty.
    pub fn client_name_or_unknown(&self, client_id: EntityId) -> &str {
        self.clients
            .get(client_id)
            .map(|client| client.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(UNKNOWN_CLIENT_NAME)
    }

    /// Read access to the collection holding `T`.
    pub fn records<T: StoredRecord>(&self) -> &Collection<T> {
        T::collection(self)
    }

    /// Identifier for the next record of kind `T` under the configured strategy.
    pub fn next_id<T: StoredRecord>(&self) -> EntityId {
        let collection = T::collection(self);
        match self.config.id_strategy {
            IdStrategy::Monotonic => collection
                .highest_id()
                .map_or(1, |highest| highest.saturating_add(1)),
            IdStrategy::LengthPlusOne => {
                EntityId::try_from(collection.len()).map_or(EntityId::MAX, |len| len + 1)
            }
        }
    }

    /// Appends `record` to its collection.
    pub fn add<T: StoredRecord>(&mut self, record: T) {
        let id = record.id();
        let collection = T::collection_mut(self);
        if collection.contains(id) {
            warn!(
                "event=record_add module=store status=duplicate_id kind={} id={}",
                T::KIND,
                id
            );
        }
        collection.push(record);
        debug!(
            "event=record_add module=store status=ok kind={} id={} len={}",
            T::KIND,
            id,
            collection.len()
        );
    }

    /// Replaces the record carrying `record.id()` in place.
    ///
    /// Returns `false` (and changes nothing) when no record matches.
    pub fn update<T: StoredRecord>(&mut self, record: T) -> bool {
        let id = record.id();
        let replaced = T::collection_mut(self).replace(record);
        let status = if replaced == 0 { "noop" } else { "ok" };
        debug!(
            "event=record_update module=store status={} kind={} id={} replaced={}",
            status,
            T::KIND,
            id,
            replaced
        );
        replaced > 0
    }

    /// Removes the record carrying `id`.
    ///
    /// Returns `false` when nothing was removed. References held by other
    /// collections are left untouched.
    pub fn delete<T: StoredRecord>(&mut self, id: EntityId) -> bool {
        let removed = T::collection_mut(self).remove(id);
        let status = if removed == 0 { "noop" } else { "ok" };
        debug!(
            "event=record_delete module=store status={} kind={} id={} removed={}",
            status,
            T::KIND,
            id,
            removed
        );
        removed > 0
    }

    pub fn add_client(&mut self, client: Client) {
        self.add(client);
    }

    pub fn update_client(&mut self, client: Client) -> bool {
        self.update(client)
    }

    pub fn delete_client(&mut self, id: EntityId) -> bool {
        self.delete::<Client>(id)
    }

    pub fn add_project(&mut self, project: Project) {
        self.add(project);
    }

    pub fn update_project(&mut self, project: Project) -> bool {
        self.update(project)
    }

    pub fn delete_project(&mut self, id: EntityId) -> bool {
        self.delete::<Project>(id)
    }

    pub fn add_meeting(&mut self, meeting: Meeting) {
        self.add(meeting);
    }

    pub fn update_meeting(&mut self, meeting: Meeting) -> bool {
        self.update(meeting)
    }

    pub fn delete_meeting(&mut self, id: EntityId) -> bool {
        self.delete::<Meeting>(id)
    }
}
