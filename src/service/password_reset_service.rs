use std::sync::Arc;
use thiserror::Error;

use crate::{
    auth::{AuthProvider, ProviderErrorCode},
    domain::is_valid_email,
    error::AppError,
};

/// Why a reset request was refused. `Display` is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResetError {
    #[error("Email is required")]
    EmailRequired,

    #[error("Please enter a valid email address")]
    InvalidFormat,

    #[error("No account found with this email address")]
    UserNotFound,

    #[error("Invalid email address")]
    RejectedEmail,

    #[error("Too many requests. Please try again later")]
    TooManyRequests,

    #[error("Failed to send reset email. Please try again")]
    Failed,
}

impl ResetError {
    fn from_provider(code: &ProviderErrorCode) -> Self {
        match code {
            ProviderErrorCode::UserNotFound => ResetError::UserNotFound,
            ProviderErrorCode::InvalidEmail => ResetError::RejectedEmail,
            ProviderErrorCode::TooManyRequests => ResetError::TooManyRequests,
            _ => ResetError::Failed,
        }
    }
}

impl From<ResetError> for AppError {
    fn from(err: ResetError) -> Self {
        let message = err.to_string();
        match err {
            ResetError::EmailRequired | ResetError::InvalidFormat => AppError::Validation(message),
            ResetError::UserNotFound => AppError::NotFound(message),
            ResetError::RejectedEmail => AppError::BadRequest(message),
            ResetError::TooManyRequests => AppError::TooManyRequests(message),
            ResetError::Failed => AppError::External(message),
        }
    }
}

pub struct PasswordResetService {
    provider: Arc<dyn AuthProvider>,
}

impl PasswordResetService {
    pub fn new(provider: Arc<dyn AuthProvider>) -> Self {
        Self { provider }
    }

    /// Checks the address locally, then asks the provider to send the reset
    /// e-mail. Local failures never reach the provider.
    pub async fn request_reset(&self, email: &str) -> Result<(), ResetError> {
        if email.trim().is_empty() {
            return Err(ResetError::EmailRequired);
        }
        if !is_valid_email(email) {
            return Err(ResetError::InvalidFormat);
        }

        match self.provider.send_password_reset_email(email).await {
            Ok(()) => {
                tracing::info!("Password reset e-mail requested");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(code = e.code.as_str(), "Password reset failed: {}", e.message);
                Err(ResetError::from_provider(&e.code))
            }
        }
    }
}
