use std::sync::Arc;

use crate::service::password_reset_service::PasswordResetService;

/// The "forgot password" screen: one e-mail field, an error banner and a
/// success notice.
pub struct ForgotPasswordPage {
    service: Arc<PasswordResetService>,
    pub email: String,
    error: Option<String>,
    success: bool,
}

impl ForgotPasswordPage {
    pub fn new(service: Arc<PasswordResetService>) -> Self {
        Self {
            service,
            email: String::new(),
            error: None,
            success: false,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn succeeded(&self) -> bool {
        self.success
    }

    /// Requests the reset e-mail. On success the field is cleared.
    pub async fn submit(&mut self) -> bool {
        self.error = None;
        self.success = false;

        match self.service.request_reset(&self.email).await {
            Ok(()) => {
                self.success = true;
                self.email.clear();
                true
            }
            Err(e) => {
                self.error = Some(e.to_string());
                false
            }
        }
    }
}
