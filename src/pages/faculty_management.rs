use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    domain::{Faculty, FacultyData, FacultyForm},
    error::Result,
    pages::management::{ManagedCollection, ManagementPage},
    service::faculty_service::FacultyService,
};

/// The faculties of one institution account.
pub struct FacultyCollection {
    service: Arc<FacultyService>,
    institution_id: String,
}

impl FacultyCollection {
    pub fn new(service: Arc<FacultyService>, institution_id: impl Into<String>) -> Self {
        Self {
            service,
            institution_id: institution_id.into(),
        }
    }

    pub fn institution_id(&self) -> &str {
        &self.institution_id
    }
}

#[async_trait]
impl ManagedCollection for FacultyCollection {
    type Record = Faculty;
    type Form = FacultyForm;
    type Data = FacultyData;

    const NOUN: &'static str = "faculty";

    fn record_id(record: &Faculty) -> Uuid {
        record.id
    }

    fn form_for(record: &Faculty) -> FacultyForm {
        FacultyForm::from_faculty(record)
    }

    fn validate(form: &FacultyForm) -> Result<FacultyData> {
        form.validate()
    }

    async fn fetch_all(&self) -> Result<Vec<Faculty>> {
        self.service.list(&self.institution_id).await
    }

    async fn add(&self, data: FacultyData) -> Result<Faculty> {
        self.service.create(&self.institution_id, data).await
    }

    async fn update(&self, id: Uuid, data: FacultyData) -> Result<Faculty> {
        self.service.update(&self.institution_id, id, data).await
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        self.service.delete(&self.institution_id, id).await
    }
}

pub type FacultyManagementPage = ManagementPage<FacultyCollection>;
