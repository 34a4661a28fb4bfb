use clientdesk_core::{
    client_cards, meeting_cards, project_cards, Client, ClientForm, EntityStore, Field, FormError,
    Meeting, MeetingForm, Project,
};

fn acme_store() -> EntityStore {
    let mut store = EntityStore::new();
    store.add_client(Client::new(1, "Acme", "a@acme.com"));
    store
}

#[test]
fn add_first_client() {
    let store = acme_store();
    assert_eq!(store.clients(), &[Client::new(1, "Acme", "a@acme.com")]);
}

#[test]
fn rename_client_through_edit() {
    let mut store = acme_store();
    let mut form = ClientForm::new();

    form.begin_edit(&store, 1);
    form.set_name("Acme Corp");
    form.submit(&mut store).expect("valid form should submit");

    assert_eq!(store.clients(), &[Client::new(1, "Acme Corp", "a@acme.com")]);
}

#[test]
fn project_outlives_its_client() {
    let mut store = acme_store();
    store.add_project(Project::new(1, "Website", 1));
    assert_eq!(project_cards(&store)[0].client_name, "Acme");

    store.delete_client(1);

    assert_eq!(store.projects(), &[Project::new(1, "Website", 1)]);
    let cards = project_cards(&store);
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].name, "Website");
    assert_eq!(cards[0].client_name, "Unknown");
}

#[test]
fn meeting_without_client_is_rejected_before_store() {
    let mut store = acme_store();
    let mut form = MeetingForm::new();
    form.set_title("Kickoff");
    form.set_date("2026-03-01T09:30");
    form.select_client(None);

    let err = form.submit(&mut store).expect_err("invalid form must not submit");

    assert!(matches!(err, FormError::Invalid(ref errors) if errors.contains(Field::ClientId)));
    assert!(store.meetings().is_empty());
    assert!(meeting_cards(&store).is_empty());
}

#[test]
fn meeting_outlives_its_client() {
    let mut store = acme_store();
    store.add_meeting(Meeting::new(1, "Kickoff", "2026-03-01T09:30", 1));
    assert_eq!(meeting_cards(&store)[0].client_name, "Acme");

    store.delete_client(1);

    assert_eq!(store.meetings().len(), 1);
    let cards = meeting_cards(&store);
    assert_eq!(cards[0].title, "Kickoff");
    assert_eq!(cards[0].date, "2026-03-01T09:30");
    assert_eq!(cards[0].client_name, "Unknown");
}

#[test]
fn blank_client_name_renders_as_unknown() {
    let mut store = EntityStore::new();
    store.add_client(Client::new(1, "", "a@x.io"));
    store.add_project(Project::new(1, "Website", 1));
    store.add_meeting(Meeting::new(1, "Kickoff", "2026-03-01T09:30", 1));

    assert_eq!(project_cards(&store)[0].client_name, "Unknown");
    assert_eq!(meeting_cards(&store)[0].client_name, "Unknown");
}

#[test]
fn client_cards_follow_insertion_order() {
    let mut store = acme_store();
    store.add_client(Client::new(3, "Initech", "it@initech.com"));
    store.add_client(Client::new(2, "Globex", "g@globex.com"));

    let cards = client_cards(&store);

    let ids: Vec<_> = cards.iter().map(|card| card.id).collect();
    assert_eq!(ids, vec![1, 3, 2]);
    assert_eq!(cards[1].name, "Initech");
    assert_eq!(cards[1].email, "it@initech.com");
}
