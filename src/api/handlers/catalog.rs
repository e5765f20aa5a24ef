use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    api::state::AppState,
    domain::{Course, Job, ListingStatus},
    error::{AppError, Result},
};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub status: Option<String>,
}

impl ListQuery {
    fn status(&self) -> Result<Option<ListingStatus>> {
        self.status
            .as_deref()
            .map(|s| {
                ListingStatus::from_str(s)
                    .ok_or_else(|| AppError::BadRequest(format!("Unknown status: {}", s)))
            })
            .transpose()
    }
}

pub async fn list_courses(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Json<Vec<Course>>> {
    let courses = state.service_context.catalog_service
        .list_courses(params.status()?)
        .await?;

    Ok(Json(courses))
}

pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Course>> {
    let course = state.service_context.catalog_service.get_course(id).await?;
    Ok(Json(course))
}

pub async fn list_jobs(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Json<Vec<Job>>> {
    let jobs = state.service_context.catalog_service
        .list_jobs(params.status()?)
        .await?;

    Ok(Json(jobs))
}

pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Job>> {
    let job = state.service_context.catalog_service.get_job(id).await?;
    Ok(Json(job))
}
