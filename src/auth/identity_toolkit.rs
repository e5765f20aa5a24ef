use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    auth::{AuthProvider, Identity, ProviderError, ProviderErrorCode},
    config::AuthConfig,
    error::{AppError, Result},
};

/// `AuthProvider` backed by an Identity-Toolkit style REST API
/// (`/v1/accounts:lookup`, `/v1/accounts:sendOobCode`).
#[derive(Clone)]
pub struct IdentityToolkitProvider {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LookupRequest<'a> {
    id_token: &'a str,
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<LookupUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupUser {
    local_id: String,
    email: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SendOobCodeRequest<'a> {
    request_type: &'a str,
    email: &'a str,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl IdentityToolkitProvider {
    pub fn new(config: &AuthConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    async fn post<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        method: &str,
        body: &B,
    ) -> std::result::Result<R, ProviderError> {
        let url = format!("{}/v1/accounts:{}", self.base_url, method);
        debug!(method, "Calling identity provider");

        let response = self.client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(body)
            .send()
            .await
            .map_err(|e| ProviderError::new(ProviderErrorCode::Other("auth/network-request-failed".into()), e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<R>()
                .await
                .map_err(|e| ProviderError::new(ProviderErrorCode::Other("auth/internal-error".into()), e.to_string()));
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorEnvelope>(&text)
            .map(|env| env.error.message)
            .unwrap_or_else(|_| format!("HTTP {}", status.as_u16()));

        warn!(method, status = status.as_u16(), %message, "Identity provider rejected request");
        Err(ProviderError::new(code_for_message(&message), message))
    }
}

/// Maps the provider's upper-case error message (e.g. `EMAIL_NOT_FOUND`,
/// sometimes followed by ` : detail`) onto an error code.
pub fn code_for_message(message: &str) -> ProviderErrorCode {
    let head = message.split(':').next().unwrap_or_default().trim();
    match head {
        "EMAIL_NOT_FOUND" | "USER_NOT_FOUND" => ProviderErrorCode::UserNotFound,
        "INVALID_EMAIL" => ProviderErrorCode::InvalidEmail,
        "TOO_MANY_ATTEMPTS_TRY_LATER" => ProviderErrorCode::TooManyRequests,
        "INVALID_ID_TOKEN" | "TOKEN_EXPIRED" | "USER_DISABLED" => ProviderErrorCode::InvalidToken,
        other => ProviderErrorCode::Other(format!("auth/{}", other.to_lowercase().replace('_', "-"))),
    }
}

#[async_trait]
impl AuthProvider for IdentityToolkitProvider {
    async fn verify_id_token(&self, id_token: &str) -> std::result::Result<Identity, ProviderError> {
        let response: LookupResponse = self.post("lookup", &LookupRequest { id_token }).await?;

        response
            .users
            .into_iter()
            .next()
            .map(|user| Identity {
                uid: user.local_id,
                email: user.email,
            })
            .ok_or_else(|| ProviderError::new(ProviderErrorCode::InvalidToken, "No account for token"))
    }

    async fn send_password_reset_email(&self, email: &str) -> std::result::Result<(), ProviderError> {
        let _: serde_json::Value = self
            .post(
                "sendOobCode",
                &SendOobCodeRequest {
                    request_type: "PASSWORD_RESET",
                    email,
                },
            )
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_for_message() {
        assert_eq!(code_for_message("EMAIL_NOT_FOUND"), ProviderErrorCode::UserNotFound);
        assert_eq!(code_for_message("INVALID_EMAIL"), ProviderErrorCode::InvalidEmail);
        assert_eq!(
            code_for_message("TOO_MANY_ATTEMPTS_TRY_LATER : Access blocked"),
            ProviderErrorCode::TooManyRequests
        );
        assert_eq!(code_for_message("INVALID_ID_TOKEN"), ProviderErrorCode::InvalidToken);
        assert_eq!(
            code_for_message("OPERATION_NOT_ALLOWED"),
            ProviderErrorCode::Other("auth/operation-not-allowed".to_string())
        );
    }
}
