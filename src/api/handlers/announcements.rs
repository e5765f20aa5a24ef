use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
    Extension,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    api::{state::AppState, middleware::auth::CurrentUser},
    domain::{Announcement, AnnouncementForm},
    error::{AppError, Result},
};

#[derive(Debug, Deserialize)]
pub struct SetStatusRequest {
    pub is_active: bool,
}

/// Active announcements visible to the caller's audience.
pub async fn list_active(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
) -> Result<Json<Vec<Announcement>>> {
    let role = user.map(|Extension(user)| user.role());
    let announcements = state.service_context.announcement_service
        .list_active_for(role)
        .await?;

    Ok(Json(announcements))
}

pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<Announcement>>> {
    let announcements = state.service_context.announcement_service.list().await?;
    Ok(Json(announcements))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Announcement>> {
    let announcement = state.service_context.announcement_service
        .get(id)
        .await?
        .ok_or(AppError::NotFound("Announcement not found".to_string()))?;

    Ok(Json(announcement))
}

pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(form): Json<AnnouncementForm>,
) -> Result<(StatusCode, Json<Announcement>)> {
    let data = form.validate()?;
    let announcement = state.service_context.announcement_service.create(data).await?;

    tracing::info!(admin = %user.uid(), announcement_id = %announcement.id, "Announcement created");
    Ok((StatusCode::CREATED, Json(announcement)))
}

/// Replaces the announcement with the submitted form; a submitted form is always active.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(form): Json<AnnouncementForm>,
) -> Result<Json<Announcement>> {
    let data = form.validate()?;
    let announcement = state.service_context.announcement_service.update(id, data).await?;
    Ok(Json(announcement))
}

pub async fn set_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SetStatusRequest>,
) -> Result<Json<Announcement>> {
    let announcement = state.service_context.announcement_service
        .set_status(id, req.is_active)
        .await?;

    Ok(Json(announcement))
}

pub async fn delete(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    state.service_context.announcement_service.delete(id).await?;

    tracing::info!(admin = %user.uid(), announcement_id = %id, "Announcement deleted");
    Ok(StatusCode::NO_CONTENT)
}
