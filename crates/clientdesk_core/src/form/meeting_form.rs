//! Meeting screen draft binding and field setters.

use crate::form::{FormController, FormDraft};
use crate::model::meeting::Meeting;
use crate::model::EntityId;
use crate::validation::{validate_meeting, FieldErrors, MeetingDraft};

impl FormDraft for MeetingDraft {
    type Record = Meeting;

    const LABEL: &'static str = "Meeting";

    fn validate(&self) -> FieldErrors {
        validate_meeting(self)
    }

    fn to_record(&self, id: EntityId) -> Meeting {
        Meeting::new(
            id,
            self.title.clone(),
            self.date.clone(),
            self.client_id.unwrap_or_default(),
        )
    }

    fn from_record(record: &Meeting) -> Self {
        Self {
            title: record.title.clone(),
            date: record.date.clone(),
            client_id: Some(record.client_id),
        }
    }
}

impl FormController<MeetingDraft> {
    pub fn set_title(&mut self, title: impl Into<String>) -> &FieldErrors {
        let title = title.into();
        self.change(|draft| draft.title = title)
    }

    pub fn set_date(&mut self, date: impl Into<String>) -> &FieldErrors {
        let date = date.into();
        self.change(|draft| draft.date = date)
    }

    /// `None` selects the empty "Select Client" option.
    pub fn select_client(&mut self, client_id: Option<EntityId>) -> &FieldErrors {
        self.change(|draft| draft.client_id = client_id)
    }
}
