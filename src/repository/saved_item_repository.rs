use async_trait::async_trait;
use chrono::{DateTime, Utc, NaiveDateTime};
use sqlx::{Sqlite, SqlitePool, FromRow, Transaction};
use uuid::Uuid;

use crate::{
    domain::{ItemType, SavedItem, SavedItemKey, SavedItemSnapshot},
    error::{AppError, Result},
    repository::SavedItemRepository,
};

#[derive(FromRow)]
struct SavedItemRow {
    user_id: String,
    item_id: String,
    item_type: String,
    title: String,
    provider_name: Option<String>,
    duration_or_location: Option<String>,
    fee_or_salary: Option<String>,
    saved_at: NaiveDateTime,
}

pub struct SqliteSavedItemRepository {
    pool: SqlitePool,
}

impl SqliteSavedItemRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_saved_item(row: SavedItemRow) -> Result<SavedItem> {
        Ok(SavedItem {
            user_id: row.user_id,
            item_id: Uuid::parse_str(&row.item_id).map_err(|e| AppError::Database(e.to_string()))?,
            item_type: ItemType::from_str(&row.item_type)
                .ok_or_else(|| AppError::Database(format!("Invalid item type: {}", row.item_type)))?,
            snapshot: SavedItemSnapshot {
                title: row.title,
                provider_name: row.provider_name,
                duration_or_location: row.duration_or_location,
                fee_or_salary: row.fee_or_salary,
            },
            saved_at: DateTime::from_naive_utc_and_offset(row.saved_at, Utc),
        })
    }

    async fn delete_in(tx: &mut Transaction<'_, Sqlite>, key: &SavedItemKey) -> Result<bool> {
        let result = sqlx::query(
            "DELETE FROM saved_items WHERE user_id = ? AND item_id = ? AND item_type = ?"
        )
        .bind(&key.user_id)
        .bind(key.item_id.to_string())
        .bind(key.item_type.as_str())
        .execute(&mut **tx)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn insert_in(
        tx: &mut Transaction<'_, Sqlite>,
        key: &SavedItemKey,
        snapshot: &SavedItemSnapshot,
    ) -> Result<bool> {
        let now = Utc::now().naive_utc();

        let result = sqlx::query(
            r#"
            INSERT INTO saved_items (
                user_id, item_id, item_type, title, provider_name,
                duration_or_location, fee_or_salary, saved_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(user_id, item_id, item_type) DO NOTHING
            "#
        )
        .bind(&key.user_id)
        .bind(key.item_id.to_string())
        .bind(key.item_type.as_str())
        .bind(&snapshot.title)
        .bind(&snapshot.provider_name)
        .bind(&snapshot.duration_or_location)
        .bind(&snapshot.fee_or_salary)
        .bind(now)
        .execute(&mut **tx)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl SavedItemRepository for SqliteSavedItemRepository {
    async fn exists(&self, key: &SavedItemKey) -> Result<bool> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM saved_items WHERE user_id = ? AND item_id = ? AND item_type = ?"
        )
        .bind(&key.user_id)
        .bind(key.item_id.to_string())
        .bind(key.item_type.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }

    async fn insert(&self, key: &SavedItemKey, snapshot: SavedItemSnapshot) -> Result<bool> {
        let mut tx = self.pool.begin().await?;
        let inserted = Self::insert_in(&mut tx, key, &snapshot).await?;
        tx.commit().await?;
        Ok(inserted)
    }

    async fn remove(&self, key: &SavedItemKey) -> Result<bool> {
        let mut tx = self.pool.begin().await?;
        let removed = Self::delete_in(&mut tx, key).await?;
        tx.commit().await?;
        Ok(removed)
    }

    async fn toggle(&self, key: &SavedItemKey, snapshot: SavedItemSnapshot) -> Result<bool> {
        // The delete takes the write lock, so the insert below cannot race
        // another toggle of the same key.
        let mut tx = self.pool.begin().await?;

        let saved = if Self::delete_in(&mut tx, key).await? {
            false
        } else {
            Self::insert_in(&mut tx, key, &snapshot).await?;
            true
        };

        tx.commit().await?;
        Ok(saved)
    }

    async fn list_by_user(&self, user_id: &str, item_type: Option<ItemType>) -> Result<Vec<SavedItem>> {
        let item_type_str = item_type.map(|t| t.as_str());
        let rows = sqlx::query_as::<_, SavedItemRow>(
            r#"
            SELECT user_id, item_id, item_type, title, provider_name,
                   duration_or_location, fee_or_salary, saved_at
            FROM saved_items
            WHERE user_id = ? AND (? IS NULL OR item_type = ?)
            ORDER BY saved_at DESC
            "#
        )
        .bind(user_id)
        .bind(item_type_str)
        .bind(item_type_str)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(Self::row_to_saved_item)
            .collect()
    }
}
