//! Navigation targets and read-side card projections.
//!
//! # Responsibility
//! - Name the three screens and map path selectors onto them.
//! - Project store records into display rows, resolving client references.
//!
//! # Invariants
//! - The root path redirects to the clients screen.
//! - Dangling client references render as `"Unknown"`, never as an error.

use crate::model::EntityId;
use crate::store::EntityStore;
use serde::Serialize;

/// One of the three top-level screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Clients,
    Projects,
    Meetings,
}

impl View {
    /// Navbar order.
    pub const ALL: [View; 3] = [View::Clients, View::Projects, View::Meetings];

    /// Redirect target for the root path.
    pub const DEFAULT: View = View::Clients;

    pub fn path(self) -> &'static str {
        match self {
            Self::Clients => "/clients",
            Self::Projects => "/projects",
            Self::Meetings => "/meetings",
        }
    }

    /// Navbar link text.
    pub fn title(self) -> &'static str {
        match self {
            Self::Clients => "Clients",
            Self::Projects => "Projects",
            Self::Meetings => "Meetings",
        }
    }

    /// Maps a path selector to a screen.
    ///
    /// `""` and `"/"` resolve to `View::DEFAULT`; a trailing slash is
    /// ignored. Unknown paths return `None`.
    pub fn resolve(path: &str) -> Option<View> {
        let trimmed = path.trim();
        let normalized = trimmed.strip_suffix('/').unwrap_or(trimmed);
        match normalized {
            "" => Some(Self::DEFAULT),
            "/clients" => Some(Self::Clients),
            "/projects" => Some(Self::Projects),
            "/meetings" => Some(Self::Meetings),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientCard {
    pub id: EntityId,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCard {
    pub id: EntityId,
    pub name: String,
    pub client_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingCard {
    pub id: EntityId,
    pub title: String,
    pub date: String,
    pub client_name: String,
}

/// Rows for the clients screen, in store order.
pub fn client_cards(store: &EntityStore) -> Vec<ClientCard> {
    store
        .clients()
        .iter()
        .map(|client| ClientCard {
            id: client.id,
            name: client.name.clone(),
            email: client.email.clone(),
        })
        .collect()
}

/// Rows for the projects screen, in store order.
pub fn project_cards(store: &EntityStore) -> Vec<ProjectCard> {
    store
        .projects()
        .iter()
        .map(|project| ProjectCard {
            id: project.id,
            name: project.name.clone(),
            client_name: store.client_name_or_unknown(project.client_id).to_string(),
        })
        .collect()
}

/// Rows for the meetings screen, in store order.
pub fn meeting_cards(store: &EntityStore) -> Vec<MeetingCard> {
    store
        .meetings()
        .iter()
        .map(|meeting| MeetingCard {
            id: meeting.id,
            title: meeting.title.clone(),
            date: meeting.date.clone(),
            client_name: store.client_name_or_unknown(meeting.client_id).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::View;

    #[test]
    fn root_redirects_to_clients() {
        assert_eq!(View::resolve("/"), Some(View::Clients));
        assert_eq!(View::resolve(""), Some(View::Clients));
    }

    #[test]
    fn named_paths_resolve_and_unknown_paths_do_not() {
        for view in View::ALL {
            assert_eq!(View::resolve(view.path()), Some(view));
        }
        assert_eq!(View::resolve("/projects/"), Some(View::Projects));
        assert_eq!(View::resolve("/invoices"), None);
        assert_eq!(View::resolve("clients"), None);
    }
}
