//! Client record.

use crate::model::{EntityId, Record};
use serde::{Deserialize, Serialize};

/// Customer contact entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: EntityId,
    pub name: String,
    pub email: String,
}

impl Client {
    pub fn new(id: EntityId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

impl Record for Client {
    const KIND: &'static str = "client";

    fn id(&self) -> EntityId {
        self.id
    }
}
