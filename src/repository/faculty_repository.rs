use async_trait::async_trait;
use chrono::{DateTime, Utc, NaiveDateTime};
use sqlx::{SqlitePool, FromRow};
use uuid::Uuid;

use crate::{
    domain::{Faculty, FacultyData},
    error::{AppError, Result},
    repository::{decode_list, encode_list, FacultyRepository},
};

#[derive(FromRow)]
struct FacultyRow {
    id: String,
    institution_id: String,
    name: String,
    description: String,
    dean: String,
    contact_email: String,
    departments: String,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

pub struct SqliteFacultyRepository {
    pool: SqlitePool,
}

impl SqliteFacultyRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_faculty(row: FacultyRow) -> Result<Faculty> {
        Ok(Faculty {
            id: Uuid::parse_str(&row.id).map_err(|e| AppError::Database(e.to_string()))?,
            institution_id: row.institution_id,
            name: row.name,
            description: row.description,
            dean: row.dean,
            contact_email: row.contact_email,
            departments: decode_list(&row.departments)?,
            created_at: DateTime::from_naive_utc_and_offset(row.created_at, Utc),
            updated_at: DateTime::from_naive_utc_and_offset(row.updated_at, Utc),
        })
    }
}

#[async_trait]
impl FacultyRepository for SqliteFacultyRepository {
    async fn create(&self, institution_id: &str, data: FacultyData) -> Result<Faculty> {
        let id = Uuid::new_v4();
        let departments = encode_list(&data.departments)?;
        let now = Utc::now().naive_utc();

        sqlx::query(
            r#"
            INSERT INTO faculties (
                id, institution_id, name, description, dean, contact_email,
                departments, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#
        )
        .bind(id.to_string())
        .bind(institution_id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.dean)
        .bind(&data.contact_email)
        .bind(&departments)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        self.find_by_id(id).await?.ok_or_else(|| {
            AppError::Database("Failed to retrieve created faculty".to_string())
        })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Faculty>> {
        let row = sqlx::query_as::<_, FacultyRow>(
            r#"
            SELECT id, institution_id, name, description, dean, contact_email,
                   departments, created_at, updated_at
            FROM faculties
            WHERE id = ?
            "#
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Self::row_to_faculty).transpose()
    }

    async fn list_by_institution(&self, institution_id: &str) -> Result<Vec<Faculty>> {
        let rows = sqlx::query_as::<_, FacultyRow>(
            r#"
            SELECT id, institution_id, name, description, dean, contact_email,
                   departments, created_at, updated_at
            FROM faculties
            WHERE institution_id = ?
            ORDER BY created_at ASC
            "#
        )
        .bind(institution_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(Self::row_to_faculty)
            .collect()
    }

    async fn update(&self, id: Uuid, data: FacultyData) -> Result<Faculty> {
        let departments = encode_list(&data.departments)?;
        let now = Utc::now().naive_utc();

        let result = sqlx::query(
            r#"
            UPDATE faculties
            SET name = ?, description = ?, dean = ?, contact_email = ?,
                departments = ?, updated_at = ?
            WHERE id = ?
            "#
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.dean)
        .bind(&data.contact_email)
        .bind(&departments)
        .bind(now)
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Faculty not found".to_string()));
        }

        self.find_by_id(id).await?.ok_or_else(|| {
            AppError::Database("Failed to retrieve updated faculty".to_string())
        })
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM faculties WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Faculty not found".to_string()));
        }

        Ok(())
    }
}
