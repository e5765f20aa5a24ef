use async_trait::async_trait;
use chrono::{DateTime, Utc, NaiveDateTime};
use sqlx::{SqlitePool, FromRow};
use uuid::Uuid;

use crate::{
    domain::{Announcement, AnnouncementData, AnnouncementType, Audience},
    error::{AppError, Result},
    repository::AnnouncementRepository,
};

#[derive(FromRow)]
struct AnnouncementRow {
    id: String,
    title: String,
    message: String,
    announcement_type: String,
    target_audience: String,
    is_active: i32,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

pub struct SqliteAnnouncementRepository {
    pool: SqlitePool,
}

impl SqliteAnnouncementRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_announcement(row: AnnouncementRow) -> Result<Announcement> {
        Ok(Announcement {
            id: Uuid::parse_str(&row.id).map_err(|e| AppError::Database(e.to_string()))?,
            title: row.title,
            message: row.message,
            announcement_type: AnnouncementType::from_str(&row.announcement_type).ok_or_else(|| {
                AppError::Database(format!("Invalid announcement type: {}", row.announcement_type))
            })?,
            target_audience: Audience::from_str(&row.target_audience).ok_or_else(|| {
                AppError::Database(format!("Invalid target audience: {}", row.target_audience))
            })?,
            is_active: row.is_active != 0,
            created_at: DateTime::from_naive_utc_and_offset(row.created_at, Utc),
            updated_at: DateTime::from_naive_utc_and_offset(row.updated_at, Utc),
        })
    }

    async fn fetch_existing(&self, id: Uuid) -> Result<Announcement> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Announcement not found".to_string()))
    }
}

#[async_trait]
impl AnnouncementRepository for SqliteAnnouncementRepository {
    async fn create(&self, data: AnnouncementData) -> Result<Announcement> {
        let id = Uuid::new_v4();
        let is_active_int = if data.is_active { 1i32 } else { 0i32 };
        let now = Utc::now().naive_utc();

        sqlx::query(
            r#"
            INSERT INTO announcements (
                id, title, message, announcement_type, target_audience,
                is_active, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#
        )
        .bind(id.to_string())
        .bind(&data.title)
        .bind(&data.message)
        .bind(data.announcement_type.as_str())
        .bind(data.target_audience.as_str())
        .bind(is_active_int)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        self.find_by_id(id).await?.ok_or_else(|| {
            AppError::Database("Failed to retrieve created announcement".to_string())
        })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Announcement>> {
        let row = sqlx::query_as::<_, AnnouncementRow>(
            r#"
            SELECT id, title, message, announcement_type, target_audience,
                   is_active, created_at, updated_at
            FROM announcements
            WHERE id = ?
            "#
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Self::row_to_announcement).transpose()
    }

    async fn list(&self) -> Result<Vec<Announcement>> {
        let rows = sqlx::query_as::<_, AnnouncementRow>(
            r#"
            SELECT id, title, message, announcement_type, target_audience,
                   is_active, created_at, updated_at
            FROM announcements
            ORDER BY created_at DESC
            "#
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(Self::row_to_announcement)
            .collect()
    }

    async fn list_active(&self) -> Result<Vec<Announcement>> {
        let rows = sqlx::query_as::<_, AnnouncementRow>(
            r#"
            SELECT id, title, message, announcement_type, target_audience,
                   is_active, created_at, updated_at
            FROM announcements
            WHERE is_active = 1
            ORDER BY created_at DESC
            "#
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(Self::row_to_announcement)
            .collect()
    }

    async fn update(&self, id: Uuid, data: AnnouncementData) -> Result<Announcement> {
        let is_active_int = if data.is_active { 1i32 } else { 0i32 };
        let now = Utc::now().naive_utc();

        let result = sqlx::query(
            r#"
            UPDATE announcements
            SET title = ?, message = ?, announcement_type = ?,
                target_audience = ?, is_active = ?, updated_at = ?
            WHERE id = ?
            "#
        )
        .bind(&data.title)
        .bind(&data.message)
        .bind(data.announcement_type.as_str())
        .bind(data.target_audience.as_str())
        .bind(is_active_int)
        .bind(now)
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Announcement not found".to_string()));
        }

        self.fetch_existing(id).await
    }

    async fn set_active(&self, id: Uuid, is_active: bool) -> Result<Announcement> {
        let is_active_int = if is_active { 1i32 } else { 0i32 };
        let now = Utc::now().naive_utc();

        let result = sqlx::query(
            "UPDATE announcements SET is_active = ?, updated_at = ? WHERE id = ?"
        )
        .bind(is_active_int)
        .bind(now)
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Announcement not found".to_string()));
        }

        self.fetch_existing(id).await
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM announcements WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Announcement not found".to_string()));
        }

        Ok(())
    }
}
