use clientdesk_core::{Client, EntityStore, Meeting, Project};

fn seeded_clients(count: i64) -> EntityStore {
    let mut store = EntityStore::new();
    for id in 1..=count {
        store.add_client(Client::new(id, format!("client {id}"), format!("c{id}@x.io")));
    }
    store
}

#[test]
fn new_store_starts_empty() {
    let store = EntityStore::new();
    assert!(store.clients().is_empty());
    assert!(store.projects().is_empty());
    assert!(store.meetings().is_empty());
}

#[test]
fn add_appends_and_is_retrievable_by_id() {
    let mut store = seeded_clients(2);
    let before = store.clients().len();

    store.add_client(Client::new(10, "Globex", "info@globex.com"));

    assert_eq!(store.clients().len(), before + 1);
    assert_eq!(store.clients().last().expect("store should hold clients").id, 10);
    assert_eq!(store.client(10).expect("client should exist").name, "Globex");
}

#[test]
fn add_keeps_duplicate_ids() {
    let mut store = seeded_clients(1);
    store.add_client(Client::new(1, "shadow", "s@x.io"));

    assert_eq!(store.clients().len(), 2);
    assert_eq!(store.clients()[0].name, "client 1");
    assert_eq!(store.clients()[1].name, "shadow");
}

#[test]
fn update_replaces_in_place_without_changing_length() {
    let mut store = seeded_clients(3);

    let changed = store.update_client(Client::new(2, "renamed", "new@x.io"));

    assert!(changed);
    assert_eq!(store.clients().len(), 3);
    assert_eq!(store.clients()[1], Client::new(2, "renamed", "new@x.io"));
    assert_eq!(store.clients()[0].name, "client 1");
    assert_eq!(store.clients()[2].name, "client 3");
}

#[test]
fn update_unknown_id_leaves_collection_identical() {
    let mut store = seeded_clients(3);
    let snapshot = store.clients().to_vec();

    let changed = store.update_client(Client::new(99, "ghost", "g@x.io"));

    assert!(!changed);
    assert_eq!(store.clients(), snapshot.as_slice());
}

#[test]
fn delete_is_idempotent() {
    let mut store = seeded_clients(3);

    assert!(store.delete_client(2));
    assert_eq!(store.clients().len(), 2);
    assert!(!store.delete_client(2));
    assert_eq!(store.clients().len(), 2);
    assert!(store.client(2).is_none());
}

#[test]
fn deleting_client_does_not_cascade() {
    let mut store = seeded_clients(1);
    store.add_project(Project::new(1, "Website", 1));
    store.add_meeting(Meeting::new(1, "Kickoff", "2026-03-01T09:30", 1));

    store.delete_client(1);

    assert_eq!(store.projects().len(), 1);
    assert_eq!(store.meetings().len(), 1);
    assert_eq!(store.client_name_or_unknown(1), "Unknown");
}

#[test]
fn project_and_meeting_operations_mirror_clients() {
    let mut store = EntityStore::new();
    store.add_project(Project::new(1, "Website", 42));
    store.add_project(Project::new(2, "App", 42));
    store.add_meeting(Meeting::new(1, "Sync", "2026-04-02T10:00", 42));

    assert!(store.update_project(Project::new(2, "Mobile App", 7)));
    assert_eq!(store.project(2).expect("project should exist").client_id, 7);
    assert!(store.update_meeting(Meeting::new(1, "Weekly sync", "2026-04-09T10:00", 42)));
    assert_eq!(store.meeting(1).expect("meeting should exist").title, "Weekly sync");

    assert!(store.delete_project(1));
    assert!(store.delete_meeting(1));
    assert!(!store.delete_meeting(1));
    assert_eq!(store.projects().len(), 1);
    assert!(store.meetings().is_empty());
}

#[test]
fn store_accepts_data_validators_would_reject() {
    let mut store = EntityStore::new();
    store.add_client(Client::new(1, "", "not-an-email"));
    store.add_meeting(Meeting::new(1, "  ", "", 0));

    assert_eq!(store.clients().len(), 1);
    assert_eq!(store.meetings().len(), 1);
}
