use axum::{
    extract::State,
    Json,
    Extension,
};
use serde::{Deserialize, Serialize};

use crate::{
    api::{state::AppState, middleware::auth::CurrentUser},
    domain::UserProfile,
    error::Result,
};

#[derive(Debug, Deserialize)]
pub struct PasswordResetRequest {
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct PasswordResetResponse {
    pub message: String,
}

pub async fn password_reset(
    State(state): State<AppState>,
    Json(req): Json<PasswordResetRequest>,
) -> Result<Json<PasswordResetResponse>> {
    state.service_context.password_reset_service
        .request_reset(&req.email)
        .await?;

    Ok(Json(PasswordResetResponse {
        message: "Password reset email sent. Check your inbox.".to_string(),
    }))
}

pub async fn me(
    Extension(user): Extension<CurrentUser>,
) -> Json<UserProfile> {
    Json(user.profile)
}
