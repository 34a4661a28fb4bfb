//! Screen-level form controllers.
//!
//! # Responsibility
//! - Hold in-progress input for one screen and re-validate on every change.
//! - Gate store writes on a clean validation pass.
//! - Track create vs. update mode for the edit flow.
//!
//! # Invariants
//! - `submit` never touches the store while any field error is present.
//! - Update mode is entered only by `begin_edit` and left only by a
//!   successful `submit`.
//! - New record ids come from `EntityStore::next_id`, never from the caller.

mod client_form;
mod meeting_form;
mod project_form;

use crate::model::{EntityId, Record};
use crate::store::{EntityStore, StoredRecord};
use crate::validation::{ClientDraft, FieldErrors, MeetingDraft, ProjectDraft};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ClientForm = FormController<ClientDraft>;
pub type ProjectForm = FormController<ProjectDraft>;
pub type MeetingForm = FormController<MeetingDraft>;

/// Binds a draft type to the record it produces and the rules it must pass.
pub trait FormDraft: Clone + Default {
    type Record: StoredRecord;

    /// Screen noun used in button labels (`Client`, `Project`, `Meeting`).
    const LABEL: &'static str;

    fn validate(&self) -> FieldErrors;

    /// Builds the record to persist. Only called after `validate` passed.
    fn to_record(&self, id: EntityId) -> Self::Record;

    fn from_record(record: &Self::Record) -> Self;
}

/// Validation phase of a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Fresh or just saved; no input since the last reset.
    Idle,
    Valid,
    Invalid,
}

/// Whether a submit creates a new record or replaces an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update(EntityId),
}

/// Result of a successful submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created(EntityId),
    Updated(EntityId),
}

/// Error for rejected form submissions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// At least one field failed validation; the store was not touched.
    Invalid(FieldErrors),
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(errors) => write!(f, "form has invalid fields: {errors}"),
        }
    }
}

impl Error for FormError {}

/// Input state and edit mode for one screen.
#[derive(Debug, Clone)]
pub struct FormController<D: FormDraft> {
    draft: D,
    errors: FieldErrors,
    phase: FormPhase,
    mode: FormMode,
}

impl<D: FormDraft> Default for FormController<D> {
    fn default() -> Self {
        Self {
            draft: D::default(),
            errors: FieldErrors::new(),
            phase: FormPhase::Idle,
            mode: FormMode::Create,
        }
    }
}

impl<D: FormDraft> FormController<D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    /// Errors from the most recent validation pass.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Update(_))
    }

    /// Whether the submit button should be enabled.
    pub fn can_submit(&self) -> bool {
        self.phase == FormPhase::Valid
    }

    /// `Add <label>` in create mode, `Update <label>` in update mode.
    pub fn submit_label(&self) -> String {
        match self.mode {
            FormMode::Create => format!("Add {}", D::LABEL),
            FormMode::Update(_) => format!("Update {}", D::LABEL),
        }
    }

    /// Applies one field mutation and re-runs validation.
    pub fn change(&mut self, apply: impl FnOnce(&mut D)) -> &FieldErrors {
        apply(&mut self.draft);
        self.revalidate()
    }

    /// Loads record `id` into the draft and switches to update mode.
    ///
    /// Returns `false` and leaves the form untouched when `id` is unknown.
    pub fn begin_edit(&mut self, store: &EntityStore, id: EntityId) -> bool {
        let Some(record) = store.records::<D::Record>().get(id) else {
            debug!(
                "event=form_edit module=form status=not_found kind={} id={}",
                <D::Record as Record>::KIND,
                id
            );
            return false;
        };
        self.draft = D::from_record(record);
        self.mode = FormMode::Update(id);
        self.revalidate();
        true
    }

    /// Validates and writes the draft to `store`.
    ///
    /// On success the form returns to a fresh create-mode state.
    ///
    /// # Errors
    /// - `FormError::Invalid` when any field fails; the store is unchanged.
    pub fn submit(&mut self, store: &mut EntityStore) -> Result<SaveOutcome, FormError> {
        let kind = <D::Record as Record>::KIND;
        let errors = self.revalidate().clone();
        if !errors.is_empty() {
            info!(
                "event=form_submit module=form status=rejected kind={} fields={}",
                kind,
                errors
                    .fields()
                    .iter()
                    .map(|field| field.as_str())
                    .collect::<Vec<_>>()
                    .join(",")
            );
            return Err(FormError::Invalid(errors));
        }

        let outcome = match self.mode {
            FormMode::Update(id) => {
                store.update(self.draft.to_record(id));
                SaveOutcome::Updated(id)
            }
            FormMode::Create => {
                let id = store.next_id::<D::Record>();
                store.add(self.draft.to_record(id));
                SaveOutcome::Created(id)
            }
        };
        debug!(
            "event=form_submit module=form status=ok kind={} outcome={:?}",
            kind, outcome
        );
        self.reset();
        Ok(outcome)
    }

    /// Clears input and errors and returns to create mode.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn revalidate(&mut self) -> &FieldErrors {
        self.errors = self.draft.validate();
        self.phase = if self.errors.is_empty() {
            FormPhase::Valid
        } else {
            FormPhase::Invalid
        };
        &self.errors
    }
}
