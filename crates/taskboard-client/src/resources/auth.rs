use crate::error::ApiResult;
use crate::models::{AuthResponse, LoginRequest};
use crate::transport::{HttpBackend, HttpRequest, Transport};

pub struct AuthClient<'a, B> {
    transport: &'a Transport<B>,
}

impl<'a, B: HttpBackend> AuthClient<'a, B> {
    pub fn new(transport: &'a Transport<B>) -> Self {
        Self { transport }
    }

    /// `POST /auth/login`. The token may be missing; the caller decides what that means.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<AuthResponse> {
        let email = email.trim();
        let request = HttpRequest::post("/auth/login").with_json(&LoginRequest { email, password })?;
        let response: Option<AuthResponse> = self.transport.send_json(request).await?;
        Ok(response.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{MemoryCredentials, SessionStore};
    use crate::testing::ScriptedBackend;
    use crate::transport::Method;
    use std::rc::Rc;

    #[tokio::test]
    async fn test_login_posts_trimmed_email() {
        let store = SessionStore::new(Rc::new(MemoryCredentials::default()));
        let transport = Transport::new(
            ScriptedBackend::new().on(Method::Post, "/auth/login", 200, r#"{"token":"t"}"#),
            store,
        );

        let response = AuthClient::new(&transport).login(" a@b.com", "pw").await.unwrap();

        assert_eq!(response.token.as_deref(), Some("t"));
        let (request, bearer) = &transport.backend().requests()[0];
        assert_eq!(request.body.as_ref().unwrap()["email"], "a@b.com");
        assert_eq!(*bearer, None);
    }

    #[tokio::test]
    async fn test_empty_login_body_has_no_token() {
        let store = SessionStore::new(Rc::new(MemoryCredentials::default()));
        let transport = Transport::new(ScriptedBackend::new().on(Method::Post, "/auth/login", 200, ""), store);

        let response = AuthClient::new(&transport).login("a@b.com", "pw").await.unwrap();

        assert_eq!(response.token, None);
    }
}
