//! In-memory transport that replays queued responses and records requests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use store::{MemoryStorage, Session};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::transport::{ApiRequest, ApiResponse, Transport};

#[derive(Clone, Default)]
pub struct RecordingTransport {
    responses: Arc<Mutex<VecDeque<Result<ApiResponse, ApiError>>>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(ApiResponse::new(status, body)));
    }

    pub fn fail(&self, error: ApiError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Request body decoded as JSON.
    pub fn body(&self, index: usize) -> serde_json::Value {
        let requests = self.requests();
        let body = requests[index].body.as_deref().unwrap_or("null");
        serde_json::from_str(body).unwrap()
    }
}

impl Transport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no response queued".into())))
    }
}

/// A client over `transport`, optionally already signed in as `(token, user)`.
pub fn client_with(
    transport: &RecordingTransport,
    signed_in: Option<(&str, &str)>,
) -> ApiClient<RecordingTransport> {
    let session = Session::restore(MemoryStorage::new());
    if let Some((token, user)) = signed_in {
        session.begin(token, user);
    }
    ApiClient::new(transport.clone(), session)
}
