//! Meeting record.
//!
//! # Invariants
//! - `date` is kept verbatim as entered (local `YYYY-MM-DDTHH:MM` style);
//!   no parsing or timezone normalization happens in core.

use crate::model::{EntityId, Record};
use serde::{Deserialize, Serialize};

/// Scheduled meeting with a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub id: EntityId,
    pub title: String,
    /// Local date-time string, e.g. `2026-03-01T09:30`.
    pub date: String,
    pub client_id: EntityId,
}

impl Meeting {
    pub fn new(
        id: EntityId,
        title: impl Into<String>,
        date: impl Into<String>,
        client_id: EntityId,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            date: date.into(),
            client_id,
        }
    }
}

impl Record for Meeting {
    const KIND: &'static str = "meeting";

    fn id(&self) -> EntityId {
        self.id
    }
}
