use async_trait::async_trait;
use uuid::Uuid;

use crate::error::{AppError, Result};

/// A collection edited through a list-plus-dialog management page.
#[async_trait]
pub trait ManagedCollection: Send + Sync {
    type Record: Clone + Send + Sync;
    type Form: Default + Clone + Send + Sync;
    type Data: Send;

    /// Lower-case noun used in fallback error messages.
    const NOUN: &'static str;

    fn record_id(record: &Self::Record) -> Uuid;
    fn form_for(record: &Self::Record) -> Self::Form;
    fn validate(form: &Self::Form) -> Result<Self::Data>;

    async fn fetch_all(&self) -> Result<Vec<Self::Record>>;
    async fn add(&self, data: Self::Data) -> Result<Self::Record>;
    async fn update(&self, id: Uuid, data: Self::Data) -> Result<Self::Record>;
    async fn delete(&self, id: Uuid) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added,
    Updated,
    /// Local validation failed; nothing was sent.
    Rejected,
    /// The store call failed; the banner holds the message.
    Failed,
}

/// State and operations of one management page.
pub struct ManagementPage<C: ManagedCollection> {
    collection: C,
    records: Vec<C::Record>,
    loading: bool,
    dialog_open: bool,
    delete_dialog_open: bool,
    selected: Option<C::Record>,
    form: C::Form,
    error: Option<String>,
}

impl<C: ManagedCollection> ManagementPage<C> {
    pub fn new(collection: C) -> Self {
        Self {
            collection,
            records: Vec::new(),
            loading: true,
            dialog_open: false,
            delete_dialog_open: false,
            selected: None,
            form: C::Form::default(),
            error: None,
        }
    }

    pub fn collection(&self) -> &C {
        &self.collection
    }

    pub fn records(&self) -> &[C::Record] {
        &self.records
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn is_delete_dialog_open(&self) -> bool {
        self.delete_dialog_open
    }

    pub fn selected(&self) -> Option<&C::Record> {
        self.selected.as_ref()
    }

    /// True when the dialog edits an existing record rather than creating one.
    pub fn is_editing(&self) -> bool {
        self.selected.is_some()
    }

    pub fn form(&self) -> &C::Form {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut C::Form {
        &mut self.form
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub async fn refresh(&mut self) {
        self.loading = true;
        match self.collection.fetch_all().await {
            Ok(records) => self.records = records,
            Err(e) => {
                tracing::error!("Failed to load {} list: {}", C::NOUN, e);
                self.error = Some(banner_message(&e, format!("Failed to load {}", C::NOUN)));
            }
        }
        self.loading = false;
    }

    /// Opens the edit dialog, pre-filled from `record` or blank for a new one.
    pub fn open_dialog(&mut self, record: Option<&C::Record>) {
        match record {
            Some(record) => {
                self.form = C::form_for(record);
                self.selected = Some(record.clone());
            }
            None => {
                self.form = C::Form::default();
                self.selected = None;
            }
        }
        self.error = None;
        self.dialog_open = true;
    }

    pub fn close_dialog(&mut self) {
        self.dialog_open = false;
        self.selected = None;
        self.form = C::Form::default();
        self.error = None;
    }

    /// Validates the form, then issues exactly one add or update.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let data = match C::validate(&self.form) {
            Ok(data) => data,
            Err(e) => {
                self.error = Some(e.to_string());
                return SubmitOutcome::Rejected;
            }
        };

        let (result, outcome, verb) = match self.selected.as_ref().map(C::record_id) {
            Some(id) => (self.collection.update(id, data).await, SubmitOutcome::Updated, "update"),
            None => (self.collection.add(data).await, SubmitOutcome::Added, "add"),
        };

        match result {
            Ok(_) => {
                self.close_dialog();
                self.refresh().await;
                outcome
            }
            Err(e) => {
                self.error = Some(banner_message(&e, format!("Failed to {} {}", verb, C::NOUN)));
                SubmitOutcome::Failed
            }
        }
    }

    pub fn request_delete(&mut self, record: &C::Record) {
        self.selected = Some(record.clone());
        self.delete_dialog_open = true;
    }

    pub fn cancel_delete(&mut self) {
        self.delete_dialog_open = false;
        self.selected = None;
    }

    /// Deletes the record chosen with `request_delete`. Returns whether it was removed.
    pub async fn confirm_delete(&mut self) -> bool {
        let Some(id) = self.selected.as_ref().map(C::record_id) else {
            return false;
        };

        match self.collection.delete(id).await {
            Ok(()) => {
                self.delete_dialog_open = false;
                self.selected = None;
                self.refresh().await;
                true
            }
            Err(e) => {
                self.error = Some(banner_message(&e, format!("Failed to delete {}", C::NOUN)));
                false
            }
        }
    }

    pub(crate) fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }
}

/// The error's own text, or `fallback` when it has none.
pub(crate) fn banner_message(err: &AppError, fallback: String) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        fallback
    } else {
        message
    }
}
