//! Project screen draft binding and field setters.

use crate::form::{FormController, FormDraft};
use crate::model::project::Project;
use crate::model::EntityId;
use crate::validation::{validate_project, FieldErrors, ProjectDraft};

impl FormDraft for ProjectDraft {
    type Record = Project;

    const LABEL: &'static str = "Project";

    fn validate(&self) -> FieldErrors {
        validate_project(self)
    }

    fn to_record(&self, id: EntityId) -> Project {
        // client_id is Some after a clean validation pass.
        Project::new(id, self.name.clone(), self.client_id.unwrap_or_default())
    }

    fn from_record(record: &Project) -> Self {
        Self {
            name: record.name.clone(),
            client_id: Some(record.client_id),
        }
    }
}

impl FormController<ProjectDraft> {
    pub fn set_name(&mut self, name: impl Into<String>) -> &FieldErrors {
        let name = name.into();
        self.change(|draft| draft.name = name)
    }

    /// `None` selects the empty "Select Client" option.
    pub fn select_client(&mut self, client_id: Option<EntityId>) -> &FieldErrors {
        self.change(|draft| draft.client_id = client_id)
    }
}
