use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
    Extension,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    api::{state::AppState, middleware::auth::CurrentUser},
    domain::{ItemType, SavedItem, SavedItemKey, SavedItemSnapshot, ToggleResult},
    error::{AppError, Result},
};

#[derive(Debug, Deserialize)]
pub struct ListSavedQuery {
    pub item_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SavedStatus {
    pub saved: bool,
}

fn parse_item_type(value: &str) -> Result<ItemType> {
    ItemType::from_str(value)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown item type: {}", value)))
}

fn key_for(user: &CurrentUser, item_type: &str, item_id: Uuid) -> Result<SavedItemKey> {
    Ok(SavedItemKey::new(user.uid().to_string(), item_id, parse_item_type(item_type)?))
}

/// Builds the denormalized snapshot from the live catalogue record.
async fn snapshot_for(state: &AppState, key: &SavedItemKey) -> Result<SavedItemSnapshot> {
    let catalog = &state.service_context.catalog_service;
    let snapshot = match key.item_type {
        ItemType::Course => SavedItemSnapshot::from(&catalog.get_course(key.item_id).await?),
        ItemType::Job => SavedItemSnapshot::from(&catalog.get_job(key.item_id).await?),
    };
    Ok(snapshot)
}

pub async fn list(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Query(params): Query<ListSavedQuery>,
) -> Result<Json<Vec<SavedItem>>> {
    let item_type = params.item_type.as_deref().map(parse_item_type).transpose()?;
    let items = state.service_context.saved_item_service
        .list(user.uid(), item_type)
        .await?;

    Ok(Json(items))
}

pub async fn status(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path((item_type, item_id)): Path<(String, Uuid)>,
) -> Result<Json<SavedStatus>> {
    let key = key_for(&user, &item_type, item_id)?;
    let saved = state.service_context.saved_item_service.is_saved(&key).await?;
    Ok(Json(SavedStatus { saved }))
}

pub async fn save(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path((item_type, item_id)): Path<(String, Uuid)>,
) -> Result<StatusCode> {
    let key = key_for(&user, &item_type, item_id)?;
    let snapshot = snapshot_for(&state, &key).await?;
    state.service_context.saved_item_service.save(&key, snapshot).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn unsave(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path((item_type, item_id)): Path<(String, Uuid)>,
) -> Result<StatusCode> {
    let key = key_for(&user, &item_type, item_id)?;
    state.service_context.saved_item_service.unsave(&key).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn toggle(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path((item_type, item_id)): Path<(String, Uuid)>,
) -> Result<Json<ToggleResult>> {
    let key = key_for(&user, &item_type, item_id)?;
    let snapshot = snapshot_for(&state, &key).await?;
    let result = state.service_context.saved_item_service.toggle(&key, snapshot).await?;
    Ok(Json(result))
}
