use async_trait::async_trait;
use chrono::{DateTime, Utc, NaiveDateTime};
use sqlx::{SqlitePool, FromRow};
use uuid::Uuid;

use crate::{
    domain::{Course, CreateCourseRequest, ListingStatus},
    error::{AppError, Result},
    repository::{decode_list, encode_list, CourseRepository},
};

#[derive(FromRow)]
struct CourseRow {
    id: String,
    title: String,
    institution_id: String,
    institution_name: String,
    description: String,
    duration: Option<String>,
    fee: Option<String>,
    status: String,
    level: Option<String>,
    degree: Option<String>,
    mode: Option<String>,
    location: Option<String>,
    language: Option<String>,
    credits: Option<i64>,
    start_date: Option<NaiveDateTime>,
    deadline: Option<NaiveDateTime>,
    prerequisites: String,
    skills: String,
    curriculum: String,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

const COURSE_COLUMNS: &str = r#"
    id, title, institution_id, institution_name, description, duration, fee,
    status, level, degree, mode, location, language, credits, start_date,
    deadline, prerequisites, skills, curriculum, created_at, updated_at
"#;

pub struct SqliteCourseRepository {
    pool: SqlitePool,
}

impl SqliteCourseRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_course(row: CourseRow) -> Result<Course> {
        Ok(Course {
            id: Uuid::parse_str(&row.id).map_err(|e| AppError::Database(e.to_string()))?,
            title: row.title,
            institution_id: row.institution_id,
            institution_name: row.institution_name,
            description: row.description,
            duration: row.duration,
            fee: row.fee,
            status: ListingStatus::from_str(&row.status)
                .ok_or_else(|| AppError::Database(format!("Invalid course status: {}", row.status)))?,
            level: row.level,
            degree: row.degree,
            mode: row.mode,
            location: row.location,
            language: row.language,
            credits: row.credits,
            start_date: row.start_date.map(|dt| DateTime::from_naive_utc_and_offset(dt, Utc)),
            deadline: row.deadline.map(|dt| DateTime::from_naive_utc_and_offset(dt, Utc)),
            prerequisites: decode_list(&row.prerequisites)?,
            skills: decode_list(&row.skills)?,
            curriculum: decode_list(&row.curriculum)?,
            created_at: DateTime::from_naive_utc_and_offset(row.created_at, Utc),
            updated_at: DateTime::from_naive_utc_and_offset(row.updated_at, Utc),
        })
    }
}

#[async_trait]
impl CourseRepository for SqliteCourseRepository {
    async fn create(&self, request: CreateCourseRequest) -> Result<Course> {
        let id = Uuid::new_v4();
        let now = Utc::now().naive_utc();

        sqlx::query(
            r#"
            INSERT INTO courses (
                id, title, institution_id, institution_name, description, duration, fee,
                status, level, degree, mode, location, language, credits, start_date,
                deadline, prerequisites, skills, curriculum, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#
        )
        .bind(id.to_string())
        .bind(&request.title)
        .bind(&request.institution_id)
        .bind(&request.institution_name)
        .bind(&request.description)
        .bind(&request.duration)
        .bind(&request.fee)
        .bind(request.status.as_str())
        .bind(&request.level)
        .bind(&request.degree)
        .bind(&request.mode)
        .bind(&request.location)
        .bind(&request.language)
        .bind(request.credits)
        .bind(request.start_date.map(|dt| dt.naive_utc()))
        .bind(request.deadline.map(|dt| dt.naive_utc()))
        .bind(encode_list(&request.prerequisites)?)
        .bind(encode_list(&request.skills)?)
        .bind(encode_list(&request.curriculum)?)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        self.find_by_id(id).await?.ok_or_else(|| {
            AppError::Database("Failed to retrieve created course".to_string())
        })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Course>> {
        let row = sqlx::query_as::<_, CourseRow>(
            &format!("SELECT {} FROM courses WHERE id = ?", COURSE_COLUMNS)
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Self::row_to_course).transpose()
    }

    async fn list(&self, status: Option<ListingStatus>) -> Result<Vec<Course>> {
        let status_str = status.map(|s| s.as_str());
        let rows = sqlx::query_as::<_, CourseRow>(
            &format!(
                "SELECT {} FROM courses WHERE (? IS NULL OR status = ?) ORDER BY created_at DESC",
                COURSE_COLUMNS
            )
        )
        .bind(status_str)
        .bind(status_str)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(Self::row_to_course)
            .collect()
    }
}
