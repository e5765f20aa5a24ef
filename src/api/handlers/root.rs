use axum::{http::StatusCode, Json, response::IntoResponse};
use serde::Serialize;
use serde_json::json;

#[derive(Serialize)]
pub struct ApiInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub status: String,
}

pub async fn root() -> impl IntoResponse {
    Json(json!({
        "name": "Career Findr API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Courses, jobs and announcements for students, institutions and companies",
        "status": "operational",
        "endpoints": {
            "health": "/health",
            "password_reset": "/auth/password-reset",
            "me": "/api/me",
            "announcements": "/api/announcements",
            "courses": "/api/courses",
            "jobs": "/api/jobs",
            "saved_items": "/api/saved-items",
            "faculties": "/api/faculties",
            "admin_announcements": "/admin/announcements"
        }
    }))
}

pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    })))
}

pub async fn api_info() -> impl IntoResponse {
    Json(ApiInfo {
        name: "Career Findr API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: "Courses, jobs and announcements for students, institutions and companies".to_string(),
        status: "operational".to_string(),
    })
}
