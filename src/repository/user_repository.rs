use async_trait::async_trait;
use chrono::{DateTime, Utc, NaiveDateTime};
use sqlx::{SqlitePool, FromRow};

use crate::{
    domain::{CreateUserRequest, UserProfile, UserRole},
    error::{AppError, Result},
    repository::UserRepository,
};

#[derive(FromRow)]
struct UserRow {
    uid: String,
    email: String,
    display_name: String,
    role: String,
    created_at: NaiveDateTime,
}

pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: UserRow) -> Result<UserProfile> {
        Ok(UserProfile {
            role: UserRole::from_str(&row.role)
                .ok_or_else(|| AppError::Database(format!("Invalid user role: {}", row.role)))?,
            uid: row.uid,
            email: row.email,
            display_name: row.display_name,
            created_at: DateTime::from_naive_utc_and_offset(row.created_at, Utc),
        })
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn upsert(&self, request: CreateUserRequest) -> Result<UserProfile> {
        let now = Utc::now().naive_utc();

        sqlx::query(
            r#"
            INSERT INTO users (uid, email, display_name, role, created_at)
            VALUES (?, ?, ?, ?, ?)
            ON CONFLICT(uid) DO UPDATE SET
                email = excluded.email,
                display_name = excluded.display_name,
                role = excluded.role
            "#
        )
        .bind(&request.uid)
        .bind(&request.email)
        .bind(&request.display_name)
        .bind(request.role.as_str())
        .bind(now)
        .execute(&self.pool)
        .await?;

        self.find_by_uid(&request.uid).await?.ok_or_else(|| {
            AppError::Database("Failed to retrieve stored user".to_string())
        })
    }

    async fn find_by_uid(&self, uid: &str) -> Result<Option<UserProfile>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT uid, email, display_name, role, created_at FROM users WHERE uid = ?"
        )
        .bind(uid)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Self::row_to_user).transpose()
    }
}
