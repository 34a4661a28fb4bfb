//! Per-screen form validators.
//!
//! # Responsibility
//! - Decide whether a client/project/meeting draft may be saved.
//! - Produce field-scoped, human-readable messages for live feedback.
//!
//! # Invariants
//! - A draft may be saved only when its `FieldErrors` is empty.
//! - Validators are pure: no store access, no referential checks.
//! - Meeting treats `client_id == Some(0)` as unselected; project does not.

use crate::model::EntityId;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid email regex"));

pub const NAME_REQUIRED: &str = "Name is required.";
pub const EMAIL_REQUIRED: &str = "Email is required.";
pub const EMAIL_INVALID: &str = "Invalid email format.";
pub const PROJECT_NAME_REQUIRED: &str = "Project name is required.";
pub const PROJECT_CLIENT_REQUIRED: &str = "Please select a client.";
pub const TITLE_REQUIRED: &str = "Title is required.";
pub const DATE_REQUIRED: &str = "Date is required.";
pub const MEETING_CLIENT_REQUIRED: &str = "Client is required.";

/// Form field identifiers. Ordering follows on-screen layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Email,
    Title,
    Date,
    ClientId,
}

impl Field {
    /// Wire/display name of the field (`clientId` keeps its camelCase form).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Title => "title",
            Self::Date => "date",
            Self::ClientId => "clientId",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field name -> message mapping produced by one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    pub fn fields(&self) -> Vec<Field> {
        self.0.keys().copied().collect()
    }
}

impl Display for FieldErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Raw client form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientDraft {
    pub name: String,
    pub email: String,
}

/// Raw project form input. `client_id == None` is the "Select Client" option.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub name: String,
    pub client_id: Option<EntityId>,
}

/// Raw meeting form input. `client_id == None` is the "Select Client" option.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeetingDraft {
    pub title: String,
    pub date: String,
    pub client_id: Option<EntityId>,
}

/// Returns whether `email` contains `<non-ws>@<non-ws>.<non-ws>` anywhere.
pub fn is_plausible_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn validate_client(draft: &ClientDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if is_blank(&draft.name) {
        errors.insert(Field::Name, NAME_REQUIRED);
    }
    if is_blank(&draft.email) {
        errors.insert(Field::Email, EMAIL_REQUIRED);
    } else if !is_plausible_email(&draft.email) {
        errors.insert(Field::Email, EMAIL_INVALID);
    }
    errors
}

pub fn validate_project(draft: &ProjectDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if is_blank(&draft.name) {
        errors.insert(Field::Name, PROJECT_NAME_REQUIRED);
    }
    if draft.client_id.is_none() {
        errors.insert(Field::ClientId, PROJECT_CLIENT_REQUIRED);
    }
    errors
}

pub fn validate_meeting(draft: &MeetingDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if is_blank(&draft.title) {
        errors.insert(Field::Title, TITLE_REQUIRED);
    }
    if is_blank(&draft.date) {
        errors.insert(Field::Date, DATE_REQUIRED);
    }
    // Zero counts as "not selected" on this screen.
    if matches!(draft.client_id, None | Some(0)) {
        errors.insert(Field::ClientId, MEETING_CLIENT_REQUIRED);
    }
    errors
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
