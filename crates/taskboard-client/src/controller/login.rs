use crate::error::{ApiError, ApiResult};
use crate::models::Session;
use crate::transport::{HttpBackend, Transport};

pub const WELCOME_MESSAGE: &str = "Welcome back!";

const REJECTED_MESSAGE: &str = "Identity verification failed. Please check your credentials.";
const UNREACHABLE_MESSAGE: &str = "Network error. The command center is currently unreachable.";
const GENERIC_MESSAGE: &str = "Invalid credentials. Please verify your email and password.";

/// Login form text for a failed attempt
pub fn login_failure_message(err: &ApiError) -> &'static str {
    match err {
        ApiError::Unauthorized => REJECTED_MESSAGE,
        ApiError::Network(_) => UNREACHABLE_MESSAGE,
        _ => GENERIC_MESSAGE,
    }
}

pub struct LoginController<B> {
    transport: Transport<B>,
}

impl<B: HttpBackend> LoginController<B> {
    pub fn new(transport: Transport<B>) -> Self {
        Self { transport }
    }

    /// A visitor with a session skips the form
    pub fn already_signed_in(&self) -> bool {
        self.transport.session().is_active()
    }

    pub async fn submit(&self, email: &str, password: &str) -> ApiResult<Session> {
        let result = self.transport.session().login(&self.transport, email, password).await;
        if let Err(e) = &result {
            log::warn!("[Login] Login failed: {}", e);
        }
        result
    }
}
