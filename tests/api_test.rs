mod common;

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use career_findr::{
    api::create_app,
    config::Settings,
    domain::{AnnouncementData, AnnouncementType, Audience, ListingStatus, UserRole},
    service::ServiceContext,
};
use common::StubAuthProvider;
use serde_json::{json, Value};
use tower::ServiceExt;

struct TestApp {
    router: Router,
    context: Arc<ServiceContext>,
    provider: Arc<StubAuthProvider>,
    pool: sqlx::SqlitePool,
}

async fn spawn_app() -> anyhow::Result<TestApp> {
    let pool = common::test_pool().await?;
    common::create_user(&pool, "admin-1", UserRole::Admin).await?;
    common::create_user(&pool, "student-1", UserRole::Student).await?;
    common::create_user(&pool, "inst-1", UserRole::Institute).await?;

    let provider = Arc::new(
        StubAuthProvider::new()
            .with_token("admin-token", "admin-1")
            .with_token("student-token", "student-1")
            .with_token("institute-token", "inst-1")
            .with_token("stranger-token", "no-profile")
            .with_email("student-1@example.com"),
    );
    let context = Arc::new(ServiceContext::new(pool.clone(), provider.clone()));
    let router = create_app(context.clone(), Arc::new(Settings::default()));

    Ok(TestApp { router, context, provider, pool })
}

async fn send(
    app: &TestApp,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> anyhow::Result<(StatusCode, Value)> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))?,
        None => builder.body(Body::empty())?,
    };

    let response = app.router.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok((status, value))
}

fn titles(value: &Value) -> Vec<String> {
    let mut titles: Vec<String> = value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item["title"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();
    titles.sort();
    titles
}

#[tokio::test]
async fn test_health_check() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    let (status, body) = send(&app, Method::GET, "/health", None, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    Ok(())
}

#[tokio::test]
async fn test_root_lists_route_groups() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    let (status, body) = send(&app, Method::GET, "/", None, None).await?;
    assert_eq!(status, StatusCode::OK);

    let endpoints = &body["endpoints"];
    assert_eq!(endpoints["courses"], "/api/courses");
    assert_eq!(endpoints["jobs"], "/api/jobs");
    assert_eq!(endpoints["saved_items"], "/api/saved-items");
    assert_eq!(endpoints["faculties"], "/api/faculties");
    assert_eq!(endpoints["admin_announcements"], "/admin/announcements");
    Ok(())
}

#[tokio::test]
async fn test_announcements_follow_caller_role() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    let service = &app.context.announcement_service;
    for (title, audience, is_active) in [
        ("Everyone", Audience::All, true),
        ("Students", Audience::Student, true),
        ("Companies", Audience::Company, true),
        ("Retired", Audience::All, false),
    ] {
        service.create(AnnouncementData {
            title: title.to_string(),
            message: "Body".to_string(),
            announcement_type: AnnouncementType::Info,
            target_audience: audience,
            is_active,
        }).await?;
    }

    let (status, body) = send(&app, Method::GET, "/api/announcements", None, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body), vec!["Everyone"]);

    let (_, body) = send(&app, Method::GET, "/api/announcements", Some("student-token"), None).await?;
    assert_eq!(titles(&body), vec!["Everyone", "Students"]);

    // A bad token falls back to the anonymous view
    let (status, body) = send(&app, Method::GET, "/api/announcements", Some("bogus"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body), vec!["Everyone"]);

    Ok(())
}

#[tokio::test]
async fn test_admin_announcement_routes() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    let payload = json!({ "title": " Exams ", "message": "Timetable is out", "target_audience": "student" });

    let (status, _) = send(&app, Method::POST, "/admin/announcements", None, Some(payload.clone())).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, Method::POST, "/admin/announcements", Some("student-token"), Some(payload.clone())).await?;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(&app, Method::POST, "/admin/announcements", Some("stranger-token"), Some(payload.clone())).await?;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(&app, Method::POST, "/admin/announcements", Some("admin-token"), Some(payload)).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["title"], "Exams");
    assert_eq!(body["announcement_type"], "info");
    assert_eq!(body["target_audience"], "student");
    assert_eq!(body["is_active"], true);
    let id = body["id"].as_str().unwrap_or_default().to_string();

    let (status, body) = send(
        &app,
        Method::POST,
        "/admin/announcements",
        Some("admin-token"),
        Some(json!({ "title": "", "message": "x" })),
    ).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Title is required");

    let uri = format!("/admin/announcements/{}/status", id);
    let (status, body) = send(&app, Method::POST, &uri, Some("admin-token"), Some(json!({ "is_active": false }))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_active"], false);

    let uri = format!("/admin/announcements/{}", id);
    let (status, _) = send(&app, Method::DELETE, &uri, Some("admin-token"), None).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, Method::DELETE, &uri, Some("admin-token"), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Announcement not found");

    Ok(())
}

#[tokio::test]
async fn test_password_reset_endpoint() -> anyhow::Result<()> {
    let app = spawn_app().await?;

    let (status, body) = send(&app, Method::POST, "/auth/password-reset", None, Some(json!({ "email": "not-an-email" }))).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Please enter a valid email address");
    assert_eq!(app.provider.reset_calls(), 0);

    let (status, body) = send(&app, Method::POST, "/auth/password-reset", None, Some(json!({ "email": "ghost@example.com" }))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No account found with this email address");

    let (status, _) = send(&app, Method::POST, "/auth/password-reset", None, Some(json!({ "email": "student-1@example.com" }))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(app.provider.reset_calls(), 2);

    Ok(())
}

#[tokio::test]
async fn test_me_returns_profile() -> anyhow::Result<()> {
    let app = spawn_app().await?;

    let (status, _) = send(&app, Method::GET, "/api/me", None, None).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = send(&app, Method::GET, "/api/me", Some("institute-token"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["uid"], "inst-1");
    assert_eq!(body["role"], "institute");

    Ok(())
}

#[tokio::test]
async fn test_saved_item_routes() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    let course = common::create_course(&app.pool, "Software Engineering", ListingStatus::Active).await?;
    let toggle = format!("/api/saved-items/course/{}/toggle", course.id);
    let item = format!("/api/saved-items/course/{}", course.id);

    let (status, _) = send(&app, Method::POST, &toggle, None, None).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = send(&app, Method::POST, &toggle, Some("student-token"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["saved"], true);

    let (_, body) = send(&app, Method::GET, &item, Some("student-token"), None).await?;
    assert_eq!(body["saved"], true);

    let (_, body) = send(&app, Method::GET, "/api/saved-items?item_type=course", Some("student-token"), None).await?;
    assert_eq!(titles(&body), vec!["Software Engineering"]);
    assert_eq!(body[0]["provider_name"], "Northgate Polytechnic");

    let (_, body) = send(&app, Method::POST, &toggle, Some("student-token"), None).await?;
    assert_eq!(body["saved"], false);

    // Explicit save twice still stores one row
    let (status, _) = send(&app, Method::PUT, &item, Some("student-token"), None).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);
    send(&app, Method::PUT, &item, Some("student-token"), None).await?;
    let (_, body) = send(&app, Method::GET, "/api/saved-items", Some("student-token"), None).await?;
    assert_eq!(body.as_array().map(Vec::len), Some(1));

    let (status, _) = send(&app, Method::DELETE, &item, Some("student-token"), None).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let bad = format!("/api/saved-items/event/{}/toggle", course.id);
    let (status, _) = send(&app, Method::POST, &bad, Some("student-token"), None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let missing = format!("/api/saved-items/job/{}/toggle", uuid::Uuid::new_v4());
    let (status, body) = send(&app, Method::POST, &missing, Some("student-token"), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Job not found");

    Ok(())
}

#[tokio::test]
async fn test_catalog_routes() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    common::create_course(&app.pool, "Open Course", ListingStatus::Active).await?;
    common::create_course(&app.pool, "Closed Course", ListingStatus::Closed).await?;
    let job = common::create_job(&app.pool, "Analyst", ListingStatus::Active).await?;

    let (_, body) = send(&app, Method::GET, "/api/courses", None, None).await?;
    assert_eq!(titles(&body), vec!["Closed Course", "Open Course"]);

    let (_, body) = send(&app, Method::GET, "/api/courses?status=closed", None, None).await?;
    assert_eq!(titles(&body), vec!["Closed Course"]);

    let (status, _) = send(&app, Method::GET, "/api/courses?status=paused", None, None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, Method::GET, &format!("/api/jobs/{}", job.id), None, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Analyst");
    assert_eq!(body["skills"], json!(["SQL"]));

    let (status, body) = send(&app, Method::GET, &format!("/api/courses/{}", uuid::Uuid::new_v4()), None, None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Course not found");

    Ok(())
}

#[tokio::test]
async fn test_faculty_routes_require_institute() -> anyhow::Result<()> {
    let app = spawn_app().await?;
    let payload = json!({ "name": "Faculty of Science", "departments": "CS, Math" });

    let (status, _) = send(&app, Method::POST, "/api/faculties", Some("student-token"), Some(payload.clone())).await?;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(&app, Method::POST, "/api/faculties", Some("institute-token"), Some(payload)).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["institution_id"], "inst-1");
    assert_eq!(body["departments"], json!(["CS", "Math"]));

    let (status, body) = send(&app, Method::POST, "/api/faculties", Some("institute-token"), Some(json!({ "name": " " }))).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Faculty name is required");

    let (_, body) = send(&app, Method::GET, "/api/faculties", Some("institute-token"), None).await?;
    assert_eq!(titles_by_name(&body), vec!["Faculty of Science"]);

    Ok(())
}

fn titles_by_name(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| items.iter().filter_map(|i| i["name"].as_str().map(str::to_string)).collect())
        .unwrap_or_default()
}
