pub mod announcement_service;
pub mod catalog_service;
pub mod faculty_service;
pub mod password_reset_service;
pub mod saved_item_service;

use std::sync::Arc;
use sqlx::SqlitePool;
use crate::auth::AuthProvider;
use crate::repository::*;
use announcement_service::AnnouncementService;
use catalog_service::CatalogService;
use faculty_service::FacultyService;
use password_reset_service::PasswordResetService;
use saved_item_service::SavedItemService;

pub use password_reset_service::ResetError;

pub struct ServiceContext {
    pub user_repo: Arc<dyn UserRepository>,
    pub auth_provider: Arc<dyn AuthProvider>,
    pub announcement_service: Arc<AnnouncementService>,
    pub faculty_service: Arc<FacultyService>,
    pub catalog_service: Arc<CatalogService>,
    pub saved_item_service: Arc<SavedItemService>,
    pub password_reset_service: Arc<PasswordResetService>,
    pub db_pool: SqlitePool,
}

impl ServiceContext {
    /// Wires the SQLite repositories and services around `db_pool`.
    pub fn new(db_pool: SqlitePool, auth_provider: Arc<dyn AuthProvider>) -> Self {
        let user_repo = Arc::new(SqliteUserRepository::new(db_pool.clone()));
        let announcement_repo = Arc::new(SqliteAnnouncementRepository::new(db_pool.clone()));
        let faculty_repo = Arc::new(SqliteFacultyRepository::new(db_pool.clone()));
        let course_repo = Arc::new(SqliteCourseRepository::new(db_pool.clone()));
        let job_repo = Arc::new(SqliteJobRepository::new(db_pool.clone()));
        let saved_item_repo = Arc::new(SqliteSavedItemRepository::new(db_pool.clone()));

        Self {
            user_repo,
            announcement_service: Arc::new(AnnouncementService::new(announcement_repo)),
            faculty_service: Arc::new(FacultyService::new(faculty_repo)),
            catalog_service: Arc::new(CatalogService::new(course_repo, job_repo)),
            saved_item_service: Arc::new(SavedItemService::new(saved_item_repo)),
            password_reset_service: Arc::new(PasswordResetService::new(auth_provider.clone())),
            auth_provider,
            db_pool,
        }
    }
}
