//! Signup, login and logout.

use store::models::{Credentials, LoginResponse, NewUser};

use crate::client::ApiClient;
use crate::error::{ApiError, ApiResult};
use crate::transport::Transport;

/// Everything the signup form collects.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignupForm {
    pub login_id: String,
    pub password: String,
    pub confirm_password: String,
    pub username: String,
}

impl SignupForm {
    /// Presence and confirmation checks, in that order.
    pub fn validate(&self) -> ApiResult<NewUser> {
        let fields = [
            &self.login_id,
            &self.password,
            &self.confirm_password,
            &self.username,
        ];
        if fields.iter().any(|f| f.trim().is_empty()) {
            return Err(ApiError::validation("All fields are required."));
        }
        if self.password != self.confirm_password {
            return Err(ApiError::validation("Passwords do not match."));
        }
        Ok(NewUser {
            login_id: self.login_id.trim().to_string(),
            username: self.username.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

impl<T: Transport> ApiClient<T> {
    pub async fn signup(&self, form: &SignupForm) -> ApiResult<()> {
        let user = form.validate()?;
        self.post("/api/auth/signup", Some(&user)).await?;
        tracing::info!("Registered {}", user.login_id);
        Ok(())
    }

    /// Exchange credentials for a token and open the session.
    ///
    /// Returns the login id now stored as the session user.
    pub async fn login(&self, login_id: &str, password: &str) -> ApiResult<String> {
        let login_id = login_id.trim();
        if login_id.is_empty() || password.is_empty() {
            return Err(ApiError::validation("Please enter your ID and password."));
        }
        let credentials = Credentials {
            login_id: login_id.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self.post_json("/api/auth/login", &credentials).await?;
        if response.token.is_empty() {
            return Err(ApiError::Decode("login response carried no token".into()));
        }
        self.session().begin(&response.token, login_id);
        tracing::info!("Signed in as {login_id}");
        Ok(login_id.to_string())
    }

    /// Tell the backend, then drop the local session whatever it answered.
    pub async fn logout(&self) {
        if let Err(e) = self.post::<()>("/api/auth/logout", None).await {
            tracing::warn!("Logout request failed: {e}");
        }
        self.session().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{client_with, RecordingTransport};

    fn form() -> SignupForm {
        SignupForm {
            login_id: "alice".into(),
            password: "pw".into(),
            confirm_password: "pw".into(),
            username: "Alice".into(),
        }
    }

    #[tokio::test]
    async fn test_login_stores_token_and_user() {
        let transport = RecordingTransport::new();
        transport.respond(200, r#"{"token":"t1"}"#);
        let client = client_with(&transport, None);

        let user = client.login("alice", "pw").await.unwrap();

        assert_eq!(user, "alice");
        assert_eq!(client.session().token().as_deref(), Some("t1"));
        assert_eq!(client.session().user_id().as_deref(), Some("alice"));
        let sent = transport.requests();
        assert_eq!(sent[0].path, "/api/auth/login");
        assert_eq!(
            transport.body(0),
            serde_json::json!({"loginId": "alice", "password": "pw"})
        );
    }

    #[tokio::test]
    async fn test_login_requires_both_fields() {
        let transport = RecordingTransport::new();
        let client = client_with(&transport, None);

        let err = client.login("alice", "").await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert!(client.login("  ", "pw").await.is_err());
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_failed_login_leaves_session_empty() {
        let transport = RecordingTransport::new();
        transport.respond(401, r#"{"message":"Invalid credentials"}"#);
        let client = client_with(&transport, None);

        let err = client.login("alice", "nope").await.unwrap_err();
        assert_eq!(err.user_message("Login failed"), "Invalid credentials");
        assert!(!client.session().is_active());
    }

    #[test]
    fn test_signup_validation() {
        assert!(form().validate().is_ok());

        let mut missing = form();
        missing.username = " ".into();
        assert_eq!(
            missing.validate(),
            Err(ApiError::validation("All fields are required."))
        );

        let mut mismatch = form();
        mismatch.confirm_password = "other".into();
        assert_eq!(
            mismatch.validate(),
            Err(ApiError::validation("Passwords do not match."))
        );
    }

    #[tokio::test]
    async fn test_signup_sends_new_user() {
        let transport = RecordingTransport::new();
        transport.respond(200, "{}");
        let client = client_with(&transport, None);

        client.signup(&form()).await.unwrap();
        assert_eq!(transport.requests()[0].path, "/api/auth/signup");
        assert_eq!(
            transport.body(0),
            serde_json::json!({"loginId": "alice", "username": "Alice", "password": "pw"})
        );
    }

    #[tokio::test]
    async fn test_logout_clears_even_on_failure() {
        let transport = RecordingTransport::new();
        transport.respond(500, "");
        let client = client_with(&transport, Some(("t1", "alice")));

        client.logout().await;
        assert!(!client.session().is_active());
        assert_eq!(transport.requests()[0].bearer.as_deref(), Some("t1"));
    }
}
