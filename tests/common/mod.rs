#![allow(dead_code)]

use std::{
    collections::{HashMap, HashSet},
    path::PathBuf,
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
};

use async_trait::async_trait;
use career_findr::{
    auth::{AuthProvider, Identity, ProviderError, ProviderErrorCode},
    domain::{
        CreateCourseRequest, CreateJobRequest, CreateUserRequest, Course, Faculty, FacultyData,
        ItemType, Job, ListingStatus, SavedItem, SavedItemKey, SavedItemSnapshot, UserRole,
    },
    error::{AppError, Result},
    repository::{
        CourseRepository, FacultyRepository, JobRepository, SavedItemRepository,
        SqliteCourseRepository, SqliteFacultyRepository, SqliteJobRepository,
        SqliteSavedItemRepository, SqliteUserRepository, UserRepository,
    },
};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};
use uuid::Uuid;

/// Fresh in-memory database with migrations applied.
///
/// Limited to one connection: every connection to `sqlite::memory:` opens its own database.
pub async fn test_pool() -> anyhow::Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await?;

    Ok(pool)
}

/// File-backed database shared by several connections, for tests that need real lock contention.
pub async fn file_pool(max_connections: u32) -> anyhow::Result<(SqlitePool, PathBuf)> {
    let path = std::env::temp_dir().join(format!("career_findr_{}.db", Uuid::new_v4()));
    let options = SqliteConnectOptions::new()
        .filename(&path)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await?;

    Ok((pool, path))
}

pub async fn remove_file_pool(pool: SqlitePool, path: PathBuf) {
    pool.close().await;
    for suffix in ["", "-wal", "-shm", "-journal"] {
        let mut file = path.clone().into_os_string();
        file.push(suffix);
        let _ = std::fs::remove_file(file);
    }
}

/// Identity provider double: fixed tokens, a set of registered e-mails and a call counter.
#[derive(Default)]
pub struct StubAuthProvider {
    tokens: HashMap<String, String>,
    registered_emails: HashSet<String>,
    rate_limited: bool,
    reset_calls: AtomicUsize,
}

impl StubAuthProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(mut self, token: &str, uid: &str) -> Self {
        self.tokens.insert(token.to_string(), uid.to_string());
        self
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.registered_emails.insert(email.to_string());
        self
    }

    pub fn rate_limited(mut self) -> Self {
        self.rate_limited = true;
        self
    }

    pub fn reset_calls(&self) -> usize {
        self.reset_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthProvider for StubAuthProvider {
    async fn verify_id_token(&self, id_token: &str) -> std::result::Result<Identity, ProviderError> {
        self.tokens
            .get(id_token)
            .map(|uid| Identity { uid: uid.clone(), email: None })
            .ok_or_else(|| ProviderError::new(ProviderErrorCode::InvalidToken, "INVALID_ID_TOKEN"))
    }

    async fn send_password_reset_email(&self, email: &str) -> std::result::Result<(), ProviderError> {
        self.reset_calls.fetch_add(1, Ordering::SeqCst);

        if self.rate_limited {
            return Err(ProviderError::new(ProviderErrorCode::TooManyRequests, "TOO_MANY_ATTEMPTS_TRY_LATER"));
        }
        if !self.registered_emails.contains(email) {
            return Err(ProviderError::new(ProviderErrorCode::UserNotFound, "EMAIL_NOT_FOUND"));
        }
        Ok(())
    }
}

/// Wraps the SQLite faculty repository and counts write calls.
pub struct CountingFacultyRepository {
    inner: SqliteFacultyRepository,
    pub creates: AtomicUsize,
    pub updates: AtomicUsize,
}

impl CountingFacultyRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            inner: SqliteFacultyRepository::new(pool),
            creates: AtomicUsize::new(0),
            updates: AtomicUsize::new(0),
        }
    }

    pub fn writes(&self) -> usize {
        self.creates.load(Ordering::SeqCst) + self.updates.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FacultyRepository for CountingFacultyRepository {
    async fn create(&self, institution_id: &str, data: FacultyData) -> Result<Faculty> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        self.inner.create(institution_id, data).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Faculty>> {
        self.inner.find_by_id(id).await
    }

    async fn list_by_institution(&self, institution_id: &str) -> Result<Vec<Faculty>> {
        self.inner.list_by_institution(institution_id).await
    }

    async fn update(&self, id: Uuid, data: FacultyData) -> Result<Faculty> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        self.inner.update(id, data).await
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        self.inner.delete(id).await
    }
}

pub async fn create_user(pool: &SqlitePool, uid: &str, role: UserRole) -> anyhow::Result<()> {
    SqliteUserRepository::new(pool.clone())
        .upsert(CreateUserRequest {
            uid: uid.to_string(),
            email: format!("{}@example.com", uid),
            display_name: uid.to_string(),
            role,
        })
        .await?;
    Ok(())
}

pub async fn create_course(pool: &SqlitePool, title: &str, status: ListingStatus) -> anyhow::Result<Course> {
    let course = SqliteCourseRepository::new(pool.clone())
        .create(CreateCourseRequest {
            title: title.to_string(),
            institution_id: "inst-1".to_string(),
            institution_name: "Northgate Polytechnic".to_string(),
            description: "An introductory programme".to_string(),
            duration: Some("3 years".to_string()),
            fee: Some("M12000".to_string()),
            status,
            level: Some("Diploma".to_string()),
            degree: None,
            mode: Some("Full-time".to_string()),
            location: Some("Maseru".to_string()),
            language: Some("English".to_string()),
            credits: Some(120),
            start_date: None,
            deadline: None,
            prerequisites: vec!["High school certificate".to_string()],
            skills: vec!["Programming".to_string(), "Databases".to_string()],
            curriculum: vec!["Year 1".to_string()],
        })
        .await?;
    Ok(course)
}

pub async fn create_job(pool: &SqlitePool, title: &str, status: ListingStatus) -> anyhow::Result<Job> {
    let job = SqliteJobRepository::new(pool.clone())
        .create(CreateJobRequest {
            title: title.to_string(),
            company_id: "company-1".to_string(),
            company_name: "Brightwave Labs".to_string(),
            description: "Build and run services".to_string(),
            location: Some("Johannesburg".to_string()),
            salary: Some("R30000".to_string()),
            job_type: Some("Full-time".to_string()),
            work_mode: Some("Hybrid".to_string()),
            remote: false,
            department: Some("Engineering".to_string()),
            experience: Some("2+ years".to_string()),
            positions: Some(2),
            status,
            deadline: None,
            requirements: vec!["Rust".to_string()],
            responsibilities: vec!["Ship features".to_string()],
            skills: vec!["SQL".to_string()],
            benefits: vec!["Medical aid".to_string()],
        })
        .await?;
    Ok(job)
}

/// SQLite saved-item repository whose writes can be switched to fail.
pub struct FailingSavedItemRepository {
    inner: SqliteSavedItemRepository,
    failing: AtomicBool,
}

impl FailingSavedItemRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            inner: SqliteSavedItemRepository::new(pool),
            failing: AtomicBool::new(false),
        }
    }

    pub fn fail_writes(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::Database("database is locked".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl SavedItemRepository for FailingSavedItemRepository {
    async fn exists(&self, key: &SavedItemKey) -> Result<bool> {
        self.inner.exists(key).await
    }

    async fn insert(&self, key: &SavedItemKey, snapshot: SavedItemSnapshot) -> Result<bool> {
        self.check()?;
        self.inner.insert(key, snapshot).await
    }

    async fn remove(&self, key: &SavedItemKey) -> Result<bool> {
        self.check()?;
        self.inner.remove(key).await
    }

    async fn toggle(&self, key: &SavedItemKey, snapshot: SavedItemSnapshot) -> Result<bool> {
        self.check()?;
        self.inner.toggle(key, snapshot).await
    }

    async fn list_by_user(&self, user_id: &str, item_type: Option<ItemType>) -> Result<Vec<SavedItem>> {
        self.inner.list_by_user(user_id, item_type).await
    }
}
