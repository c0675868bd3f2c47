//! # API client — session-aware request wrapper
//!
//! [`ApiClient`] is the single configured client every view goes through. For each
//! request it:
//!
//! 1. attaches the session's bearer token, if there is one;
//! 2. sends the request through its [`Transport`];
//! 3. returns 2xx responses untouched and maps everything else to [`ApiError`].
//!
//! A 401 on a request that carried a token means the token is no longer valid:
//! the session is cleared and the `on_unauthorized` hook runs (the UI installs a
//! hook that forces the browser back to the login page). A 401 on a request sent
//! without a token, such as a failed login, is reported as an ordinary
//! [`ApiError::Server`] so the form can show the backend's message.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use store::Session;

use crate::error::{ApiError, ApiResult};
use crate::transport::{ApiRequest, ApiResponse, HttpTransport, Transport};

type UnauthorizedHook = Arc<dyn Fn() + Send + Sync>;

#[derive(Clone)]
pub struct ApiClient<T = HttpTransport> {
    transport: T,
    session: Session,
    on_unauthorized: Option<UnauthorizedHook>,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, session: Session) -> Self {
        Self {
            transport,
            session,
            on_unauthorized: None,
        }
    }

    /// Run `hook` after the session has been cleared because of a 401.
    pub fn on_unauthorized(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_unauthorized = Some(Arc::new(hook));
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Send `request` with the current bearer token and map the status.
    pub async fn execute(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let bearer = self.session.token();
        let authenticated = bearer.is_some();
        let method = request.method;
        let path = request.path.clone();

        let response = self
            .transport
            .send(request.with_bearer(bearer))
            .await
            .inspect_err(|e| tracing::warn!("{method} {path} failed: {e}"))?;

        if response.is_success() {
            return Ok(response);
        }

        let message = response.message();
        tracing::warn!("{method} {path} returned {}", response.status);

        if response.status == 401 {
            if !authenticated {
                return Err(ApiError::Server {
                    status: 401,
                    message,
                });
            }
            tracing::info!("Bearer token rejected, clearing session");
            self.session.clear();
            if let Some(hook) = &self.on_unauthorized {
                hook();
            }
        }

        Err(ApiError::from_status(response.status, message))
    }

    pub async fn get_json<R: DeserializeOwned>(&self, path: &str) -> ApiResult<R> {
        self.execute(ApiRequest::get(path)).await?.json()
    }

    /// POST `body` as JSON and return the raw response.
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<ApiResponse> {
        let body = body.map(serde_json::to_string).transpose()?;
        self.execute(ApiRequest::post(path, body)).await
    }

    pub async fn post_json<B, R>(&self, path: &str, body: &B) -> ApiResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.post(path, Some(body)).await?.json()
    }
}

impl<T> fmt::Debug for ApiClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("session", &self.session)
            .field("on_unauthorized", &self.on_unauthorized.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::testing::{client_with, RecordingTransport};
    use crate::transport::Method;

    #[tokio::test]
    async fn test_attaches_bearer_token() {
        let transport = RecordingTransport::new();
        transport.respond(200, "[]");
        let client = client_with(&transport, Some(("t1", "alice")));

        let _: Vec<serde_json::Value> = client.get_json("/api/project/read/project").await.unwrap();

        let sent = transport.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::Get);
        assert_eq!(sent[0].bearer.as_deref(), Some("t1"));
    }

    #[tokio::test]
    async fn test_no_bearer_without_session() {
        let transport = RecordingTransport::new();
        transport.respond(200, "{}");
        let client = client_with(&transport, None);

        client.post::<()>("/api/auth/logout", None).await.unwrap();
        assert_eq!(transport.requests()[0].bearer, None);
    }

    #[tokio::test]
    async fn test_401_clears_session_and_runs_hook() {
        let transport = RecordingTransport::new();
        transport.respond(401, "");
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let client = client_with(&transport, Some(("t1", "alice"))).on_unauthorized(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let err = client
            .get_json::<serde_json::Value>("/api/project/read/1")
            .await
            .unwrap_err();

        assert_eq!(err, ApiError::Unauthorized);
        assert!(!client.session().is_active());
        assert_eq!(client.session().user_id(), None);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_401_without_token_keeps_message() {
        let transport = RecordingTransport::new();
        transport.respond(401, r#"{"message":"Wrong password"}"#);
        let client = client_with(&transport, None).on_unauthorized(|| panic!("hook must not run"));

        let err = client
            .post("/api/auth/login", Some(&serde_json::json!({})))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Server {
                status: 401,
                message: Some("Wrong password".into())
            }
        );
    }

    #[tokio::test]
    async fn test_status_mapping() {
        let transport = RecordingTransport::new();
        transport.respond(403, r#"{"message":"Owner only"}"#);
        transport.respond(404, "");
        transport.respond(500, "boom");
        let client = client_with(&transport, Some(("t1", "alice")));

        let forbidden = client.get_json::<serde_json::Value>("/a").await.unwrap_err();
        let missing = client.get_json::<serde_json::Value>("/b").await.unwrap_err();
        let broken = client.get_json::<serde_json::Value>("/c").await.unwrap_err();

        assert_eq!(forbidden, ApiError::Forbidden(Some("Owner only".into())));
        assert_eq!(missing, ApiError::NotFound(None));
        assert_eq!(
            broken,
            ApiError::Server {
                status: 500,
                message: None
            }
        );
        // Only 401 resets the session.
        assert!(client.session().is_active());
    }

    #[tokio::test]
    async fn test_bad_body_is_decode_error() {
        let transport = RecordingTransport::new();
        transport.respond(200, "not json");
        let client = client_with(&transport, None);

        let err = client.get_json::<Vec<u64>>("/x").await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
