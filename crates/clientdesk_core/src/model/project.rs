//! Project record.

use crate::model::{EntityId, Record};
use serde::{Deserialize, Serialize};

/// Project owned by a client.
///
/// `client_id` is serialized as `clientId` and is not checked against the
/// client collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: EntityId,
    pub name: String,
    pub client_id: EntityId,
}

impl Project {
    pub fn new(id: EntityId, name: impl Into<String>, client_id: EntityId) -> Self {
        Self {
            id,
            name: name.into(),
            client_id,
        }
    }
}

impl Record for Project {
    const KIND: &'static str = "project";

    fn id(&self) -> EntityId {
        self.id
    }
}
