use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
    Extension,
};
use uuid::Uuid;

use crate::{
    api::{state::AppState, middleware::auth::CurrentUser},
    domain::{Faculty, FacultyForm},
    error::Result,
};

// Every route here runs behind `require_institute`; the caller's uid is the institution id.

pub async fn list(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<Vec<Faculty>>> {
    let faculties = state.service_context.faculty_service.list(user.uid()).await?;
    Ok(Json(faculties))
}

pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(form): Json<FacultyForm>,
) -> Result<(StatusCode, Json<Faculty>)> {
    let data = form.validate()?;
    let faculty = state.service_context.faculty_service
        .create(user.uid(), data)
        .await?;

    Ok((StatusCode::CREATED, Json(faculty)))
}

pub async fn update(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
    Json(form): Json<FacultyForm>,
) -> Result<Json<Faculty>> {
    let data = form.validate()?;
    let faculty = state.service_context.faculty_service
        .update(user.uid(), id, data)
        .await?;

    Ok(Json(faculty))
}

pub async fn delete(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    state.service_context.faculty_service.delete(user.uid(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
