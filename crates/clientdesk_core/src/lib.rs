//! Core state and validation for the client/project/meeting desk.
//! Screens hold a reference to one `EntityStore` and drive it through the
//! form controllers; this crate owns every business rule they rely on.

pub mod form;
pub mod logging;
pub mod model;
pub mod store;
pub mod validation;
pub mod view;

pub use form::{
    ClientForm, FormController, FormDraft, FormError, FormMode, FormPhase, MeetingForm,
    ProjectForm, SaveOutcome,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::client::Client;
pub use model::meeting::Meeting;
pub use model::project::Project;
pub use model::{EntityId, Record};
pub use store::{
    Collection, EntityStore, IdStrategy, StoreConfig, StoredRecord, UNKNOWN_CLIENT_NAME,
};
pub use validation::{
    validate_client, validate_meeting, validate_project, ClientDraft, Field, FieldErrors,
    MeetingDraft, ProjectDraft,
};
pub use view::{
    client_cards, meeting_cards, project_cards, ClientCard, MeetingCard, ProjectCard, View,
};

/// Minimal health-check API for wiring probes.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
