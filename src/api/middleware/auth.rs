use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};

use crate::{
    api::state::AppState,
    auth::ProviderErrorCode,
    domain::{UserProfile, UserRole},
    error::{AppError, Result},
};

/// The signed-in account, inserted into request extensions by the middleware below.
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub profile: UserProfile,
}

impl CurrentUser {
    pub fn uid(&self) -> &str {
        &self.profile.uid
    }

    pub fn role(&self) -> UserRole {
        self.profile.role
    }
}

type BearerHeader = TypedHeader<Authorization<Bearer>>;

async fn authenticate(state: &AppState, token: &str) -> Result<CurrentUser> {
    let identity = state.service_context.auth_provider
        .verify_id_token(token)
        .await
        .map_err(|e| match e.code {
            ProviderErrorCode::InvalidToken | ProviderErrorCode::UserNotFound => AppError::Unauthorized,
            _ => AppError::External(format!("Token verification failed: {}", e.message)),
        })?;

    // A provider account without a marketplace profile has no role to act under
    let profile = state.service_context.user_repo
        .find_by_uid(&identity.uid)
        .await?
        .ok_or(AppError::Forbidden)?;

    Ok(CurrentUser { profile })
}

pub async fn require_auth(
    State(state): State<AppState>,
    bearer: Option<BearerHeader>,
    mut request: Request,
    next: Next,
) -> Result<Response> {
    let TypedHeader(Authorization(bearer)) = bearer.ok_or(AppError::Unauthorized)?;
    let user = authenticate(&state, bearer.token()).await?;

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

async fn require_role(
    state: AppState,
    bearer: Option<BearerHeader>,
    role: UserRole,
    mut request: Request,
    next: Next,
) -> Result<Response> {
    let TypedHeader(Authorization(bearer)) = bearer.ok_or(AppError::Unauthorized)?;
    let user = authenticate(&state, bearer.token()).await?;

    if user.role() != role {
        return Err(AppError::Forbidden);
    }

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

pub async fn require_admin(
    State(state): State<AppState>,
    bearer: Option<BearerHeader>,
    request: Request,
    next: Next,
) -> Result<Response> {
    require_role(state, bearer, UserRole::Admin, request, next).await
}

pub async fn require_institute(
    State(state): State<AppState>,
    bearer: Option<BearerHeader>,
    request: Request,
    next: Next,
) -> Result<Response> {
    require_role(state, bearer, UserRole::Institute, request, next).await
}

/// Attaches the user when a valid token is present; anonymous otherwise.
pub async fn optional_auth(
    State(state): State<AppState>,
    bearer: Option<BearerHeader>,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(TypedHeader(Authorization(bearer))) = bearer {
        match authenticate(&state, bearer.token()).await {
            Ok(user) => {
                request.extensions_mut().insert(user);
            }
            Err(e) => tracing::debug!("Ignoring unusable bearer token: {}", e),
        }
    }

    next.run(request).await
}
