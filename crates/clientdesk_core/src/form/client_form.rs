//! Client screen draft binding and field setters.

use crate::form::{FormController, FormDraft};
use crate::model::client::Client;
use crate::model::EntityId;
use crate::validation::{validate_client, ClientDraft, FieldErrors};

impl FormDraft for ClientDraft {
    type Record = Client;

    const LABEL: &'static str = "Client";

    fn validate(&self) -> FieldErrors {
        validate_client(self)
    }

    fn to_record(&self, id: EntityId) -> Client {
        Client::new(id, self.name.clone(), self.email.clone())
    }

    fn from_record(record: &Client) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
        }
    }
}

impl FormController<ClientDraft> {
    pub fn set_name(&mut self, name: impl Into<String>) -> &FieldErrors {
        let name = name.into();
        self.change(|draft| draft.name = name)
    }

    pub fn set_email(&mut self, email: impl Into<String>) -> &FieldErrors {
        let email = email.into();
        self.change(|draft| draft.email = email)
    }
}
