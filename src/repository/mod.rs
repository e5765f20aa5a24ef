use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::*;
use crate::error::Result;

pub mod announcement_repository;
pub mod course_repository;
pub mod faculty_repository;
pub mod job_repository;
pub mod saved_item_repository;
pub mod user_repository;

pub use announcement_repository::SqliteAnnouncementRepository;
pub use course_repository::SqliteCourseRepository;
pub use faculty_repository::SqliteFacultyRepository;
pub use job_repository::SqliteJobRepository;
pub use saved_item_repository::SqliteSavedItemRepository;
pub use user_repository::SqliteUserRepository;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts the profile, or replaces email/name/role when the uid is known.
    async fn upsert(&self, request: CreateUserRequest) -> Result<UserProfile>;
    async fn find_by_uid(&self, uid: &str) -> Result<Option<UserProfile>>;
}

#[async_trait]
pub trait AnnouncementRepository: Send + Sync {
    async fn create(&self, data: AnnouncementData) -> Result<Announcement>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Announcement>>;
    /// Every announcement, newest first.
    async fn list(&self) -> Result<Vec<Announcement>>;
    /// Active announcements only, newest first.
    async fn list_active(&self) -> Result<Vec<Announcement>>;
    async fn update(&self, id: Uuid, data: AnnouncementData) -> Result<Announcement>;
    async fn set_active(&self, id: Uuid, is_active: bool) -> Result<Announcement>;
    async fn delete(&self, id: Uuid) -> Result<()>;
}

#[async_trait]
pub trait FacultyRepository: Send + Sync {
    async fn create(&self, institution_id: &str, data: FacultyData) -> Result<Faculty>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Faculty>>;
    async fn list_by_institution(&self, institution_id: &str) -> Result<Vec<Faculty>>;
    async fn update(&self, id: Uuid, data: FacultyData) -> Result<Faculty>;
    async fn delete(&self, id: Uuid) -> Result<()>;
}

#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn create(&self, request: CreateCourseRequest) -> Result<Course>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Course>>;
    async fn list(&self, status: Option<ListingStatus>) -> Result<Vec<Course>>;
}

#[async_trait]
pub trait JobRepository: Send + Sync {
    async fn create(&self, request: CreateJobRequest) -> Result<Job>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>>;
    async fn list(&self, status: Option<ListingStatus>) -> Result<Vec<Job>>;
}

#[async_trait]
pub trait SavedItemRepository: Send + Sync {
    async fn exists(&self, key: &SavedItemKey) -> Result<bool>;
    /// Inserts unless a record with the same key exists. Returns whether a row was written.
    async fn insert(&self, key: &SavedItemKey, snapshot: SavedItemSnapshot) -> Result<bool>;
    /// Returns whether a row was removed.
    async fn remove(&self, key: &SavedItemKey) -> Result<bool>;
    /// Removes the record if present, inserts it otherwise, in one write
    /// transaction. Returns whether the item is saved afterwards.
    async fn toggle(&self, key: &SavedItemKey, snapshot: SavedItemSnapshot) -> Result<bool>;
    async fn list_by_user(&self, user_id: &str, item_type: Option<ItemType>) -> Result<Vec<SavedItem>>;
}

pub(crate) fn encode_list(items: &[String]) -> Result<String> {
    Ok(serde_json::to_string(items)?)
}

pub(crate) fn decode_list(raw: &str) -> Result<Vec<String>> {
    Ok(serde_json::from_str(raw)?)
}
