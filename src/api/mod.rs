pub mod handlers;
pub mod middleware;
pub mod state;

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    trace::TraceLayer,
};
use std::sync::Arc;

use crate::{
    config::Settings,
    service::ServiceContext,
};
use state::AppState;

pub fn create_app(
    service_context: Arc<ServiceContext>,
    settings: Arc<Settings>,
) -> Router {
    let app_state = AppState::new(service_context, settings);

    Router::new()
        // Root and health endpoints
        .route("/", get(handlers::root::root))
        .route("/health", get(handlers::root::health_check))
        .route("/api", get(handlers::root::api_info))

        // Auth routes
        .route("/auth/password-reset", post(handlers::auth::password_reset))

        // API routes
        .nest("/api", api_routes(app_state.clone()))

        // Admin routes
        .nest("/admin", admin_routes(app_state.clone()))

        .with_state(app_state)

        // Middleware
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(catalog_routes())
        .merge(announcement_routes(state.clone()))
        .merge(account_routes(state.clone()))
        .nest("/faculties", faculty_routes(state))
}

fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/courses", get(handlers::catalog::list_courses))
        .route("/courses/:id", get(handlers::catalog::get_course))
        .route("/jobs", get(handlers::catalog::list_jobs))
        .route("/jobs/:id", get(handlers::catalog::get_job))
}

fn announcement_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/announcements", get(handlers::announcements::list_active))
        .route_layer(axum::middleware::from_fn_with_state(
            state,
            middleware::auth::optional_auth,
        ))
}

fn account_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/me", get(handlers::auth::me))
        .route("/saved-items", get(handlers::saved_items::list))
        .route(
            "/saved-items/:item_type/:item_id",
            get(handlers::saved_items::status)
                .put(handlers::saved_items::save)
                .delete(handlers::saved_items::unsave),
        )
        .route("/saved-items/:item_type/:item_id/toggle", post(handlers::saved_items::toggle))
        .route_layer(axum::middleware::from_fn_with_state(
            state,
            middleware::auth::require_auth,
        ))
}

fn faculty_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::faculties::list).post(handlers::faculties::create))
        .route("/:id", put(handlers::faculties::update).delete(handlers::faculties::delete))
        .route_layer(axum::middleware::from_fn_with_state(
            state,
            middleware::auth::require_institute,
        ))
}

fn admin_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/announcements",
            get(handlers::announcements::list).post(handlers::announcements::create),
        )
        .route(
            "/announcements/:id",
            get(handlers::announcements::get)
                .put(handlers::announcements::update)
                .delete(handlers::announcements::delete),
        )
        .route("/announcements/:id/status", post(handlers::announcements::set_status))
        .route_layer(axum::middleware::from_fn_with_state(
            state,
            middleware::auth::require_admin,
        ))
}
