use async_trait::async_trait;
use chrono::{DateTime, Utc, NaiveDateTime};
use sqlx::{SqlitePool, FromRow};
use uuid::Uuid;

use crate::{
    domain::{CreateJobRequest, Job, ListingStatus},
    error::{AppError, Result},
    repository::{decode_list, encode_list, JobRepository},
};

#[derive(FromRow)]
struct JobRow {
    id: String,
    title: String,
    company_id: String,
    company_name: String,
    description: String,
    location: Option<String>,
    salary: Option<String>,
    job_type: Option<String>,
    work_mode: Option<String>,
    remote: i32,
    department: Option<String>,
    experience: Option<String>,
    positions: Option<i64>,
    status: String,
    deadline: Option<NaiveDateTime>,
    requirements: String,
    responsibilities: String,
    skills: String,
    benefits: String,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

const JOB_COLUMNS: &str = r#"
    id, title, company_id, company_name, description, location, salary,
    job_type, work_mode, remote, department, experience, positions, status,
    deadline, requirements, responsibilities, skills, benefits, created_at, updated_at
"#;

pub struct SqliteJobRepository {
    pool: SqlitePool,
}

impl SqliteJobRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_job(row: JobRow) -> Result<Job> {
        Ok(Job {
            id: Uuid::parse_str(&row.id).map_err(|e| AppError::Database(e.to_string()))?,
            title: row.title,
            company_id: row.company_id,
            company_name: row.company_name,
            description: row.description,
            location: row.location,
            salary: row.salary,
            job_type: row.job_type,
            work_mode: row.work_mode,
            remote: row.remote != 0,
            department: row.department,
            experience: row.experience,
            positions: row.positions,
            status: ListingStatus::from_str(&row.status)
                .ok_or_else(|| AppError::Database(format!("Invalid job status: {}", row.status)))?,
            deadline: row.deadline.map(|dt| DateTime::from_naive_utc_and_offset(dt, Utc)),
            requirements: decode_list(&row.requirements)?,
            responsibilities: decode_list(&row.responsibilities)?,
            skills: decode_list(&row.skills)?,
            benefits: decode_list(&row.benefits)?,
            created_at: DateTime::from_naive_utc_and_offset(row.created_at, Utc),
            updated_at: DateTime::from_naive_utc_and_offset(row.updated_at, Utc),
        })
    }
}

#[async_trait]
impl JobRepository for SqliteJobRepository {
    async fn create(&self, request: CreateJobRequest) -> Result<Job> {
        let id = Uuid::new_v4();
        let remote_int = if request.remote { 1i32 } else { 0i32 };
        let now = Utc::now().naive_utc();

        sqlx::query(
            r#"
            INSERT INTO jobs (
                id, title, company_id, company_name, description, location, salary,
                job_type, work_mode, remote, department, experience, positions, status,
                deadline, requirements, responsibilities, skills, benefits, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#
        )
        .bind(id.to_string())
        .bind(&request.title)
        .bind(&request.company_id)
        .bind(&request.company_name)
        .bind(&request.description)
        .bind(&request.location)
        .bind(&request.salary)
        .bind(&request.job_type)
        .bind(&request.work_mode)
        .bind(remote_int)
        .bind(&request.department)
        .bind(&request.experience)
        .bind(request.positions)
        .bind(request.status.as_str())
        .bind(request.deadline.map(|dt| dt.naive_utc()))
        .bind(encode_list(&request.requirements)?)
        .bind(encode_list(&request.responsibilities)?)
        .bind(encode_list(&request.skills)?)
        .bind(encode_list(&request.benefits)?)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        self.find_by_id(id).await?.ok_or_else(|| {
            AppError::Database("Failed to retrieve created job".to_string())
        })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>> {
        let row = sqlx::query_as::<_, JobRow>(
            &format!("SELECT {} FROM jobs WHERE id = ?", JOB_COLUMNS)
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Self::row_to_job).transpose()
    }

    async fn list(&self, status: Option<ListingStatus>) -> Result<Vec<Job>> {
        let status_str = status.map(|s| s.as_str());
        let rows = sqlx::query_as::<_, JobRow>(
            &format!(
                "SELECT {} FROM jobs WHERE (? IS NULL OR status = ?) ORDER BY created_at DESC",
                JOB_COLUMNS
            )
        )
        .bind(status_str)
        .bind(status_str)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(Self::row_to_job)
            .collect()
    }
}
