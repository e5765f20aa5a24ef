use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod identity_toolkit;

pub use identity_toolkit::IdentityToolkitProvider;

/// Account identity vouched for by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub uid: String,
    pub email: Option<String>,
}

/// Provider failure codes the application reacts to. Anything else is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderErrorCode {
    UserNotFound,
    InvalidEmail,
    TooManyRequests,
    InvalidToken,
    Other(String),
}

impl ProviderErrorCode {
    pub fn as_str(&self) -> &str {
        match self {
            ProviderErrorCode::UserNotFound => "auth/user-not-found",
            ProviderErrorCode::InvalidEmail => "auth/invalid-email",
            ProviderErrorCode::TooManyRequests => "auth/too-many-requests",
            ProviderErrorCode::InvalidToken => "auth/invalid-id-token",
            ProviderErrorCode::Other(code) => code.as_str(),
        }
    }
}

#[derive(Debug, Clone, Error)]
#[error("{} ({})", .code.as_str(), .message)]
pub struct ProviderError {
    pub code: ProviderErrorCode,
    pub message: String,
}

impl ProviderError {
    pub fn new(code: ProviderErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// The external authentication service. Accounts, passwords and reset
/// e-mails all live there; this crate only asks.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Resolves a client-held id token to the account it was issued for.
    async fn verify_id_token(&self, id_token: &str) -> Result<Identity, ProviderError>;

    /// Asks the provider to e-mail a password reset link.
    async fn send_password_reset_email(&self, email: &str) -> Result<(), ProviderError>;
}
