use std::sync::Arc;

use crate::configuration::StoreSettings;
use crate::domain::{
    CompanySize, EntrantEmail, EntrantName, NewWaitlistEntry, WaitlistStore, WaitlistStoreError,
};

/// One of the three signup input widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    CompanySize,
}

/// Raw widget state. Mutated on every edit; only parsed into a
/// [`NewWaitlistEntry`] when the visitor submits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupDraft {
    pub name: String,
    pub email: String,
    pub company_size: String,
}

impl TryFrom<&SignupDraft> for NewWaitlistEntry {
    type Error = String;

    fn try_from(draft: &SignupDraft) -> Result<Self, Self::Error> {
        let name = EntrantName::parse(draft.name.clone())?;
        let email = EntrantEmail::parse(draft.email.clone())?;
        let company_size = CompanySize::parse(&draft.company_size)?;

        Ok(Self {
            name,
            email,
            company_size,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(SubmitFailure),
}

/// Why a submission attempt ended in failure. `Display` is the text shown
/// under the form.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitFailure {
    #[error("Waitlist configuration is missing. Please try again later.")]
    ConfigurationMissing,
    #[error("This email is already on the waitlist.")]
    DuplicateEmail,
    #[error("Error joining waitlist. Please try again.")]
    ServiceFailure,
    #[error("{0}")]
    InvalidEntry(String),
}

/// Owns the signup form's field values and submission lifecycle. Submits at
/// most one insert to the waitlist store at a time and translates the
/// outcome into user-facing text.
pub struct SignupForm {
    store_settings: StoreSettings,
    store: Arc<dyn WaitlistStore>,
    draft: SignupDraft,
    status: SubmissionStatus,
}

impl SignupForm {
    pub fn new(store_settings: StoreSettings, store: Arc<dyn WaitlistStore>) -> Self {
        Self {
            store_settings,
            store,
            draft: SignupDraft::default(),
            status: SubmissionStatus::default(),
        }
    }

    pub fn update_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.draft.name = value,
            FormField::Email => self.draft.email = value,
            FormField::CompanySize => self.draft.company_size = value,
        }
    }

    #[tracing::instrument(
        name = "Joining the waitlist",
        skip(self),
        fields(
            entrant_email = %self.draft.email,
            entrant_name = %self.draft.name)
    )]
    pub async fn submit(&mut self) {
        // The submit control is disabled while a request is in flight; at
        // most one insert per form instance at a time.
        if self.status == SubmissionStatus::Submitting {
            return;
        }

        if !self.store_settings.is_complete() {
            self.status = SubmissionStatus::Failed(SubmitFailure::ConfigurationMissing);
            return;
        }

        let entry = match NewWaitlistEntry::try_from(&self.draft) {
            Ok(entry) => entry,
            Err(reason) => {
                self.status = SubmissionStatus::Failed(SubmitFailure::InvalidEntry(reason));
                return;
            }
        };

        self.status = SubmissionStatus::Submitting;

        match self.store.insert_entry(&entry).await {
            Ok(()) => {
                self.status = SubmissionStatus::Succeeded;
                self.draft = SignupDraft::default();
            }
            Err(WaitlistStoreError::DuplicateEmail(_)) => {
                self.status = SubmissionStatus::Failed(SubmitFailure::DuplicateEmail);
            }
            Err(e) => {
                tracing::error!("Failed to insert waitlist entry: {:?}", e);
                self.status = SubmissionStatus::Failed(SubmitFailure::ServiceFailure);
            }
        }
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn draft(&self) -> &SignupDraft {
        &self.draft
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            "Joining..."
        } else {
            "Join the Waitlist"
        }
    }

    pub fn success_message(&self) -> Option<&'static str> {
        match self.status {
            SubmissionStatus::Succeeded => Some("Successfully joined the waitlist!"),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<String> {
        match &self.status {
            SubmissionStatus::Failed(failure) => Some(failure.to_string()),
            _ => None,
        }
    }
}
