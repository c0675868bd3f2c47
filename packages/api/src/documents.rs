//! # Document operations
//!
//! Besides the plain reads, this module carries the two document-form workflows:
//!
//! - **Prefill**: [`ApiClient::previous_document_for`] looks up the most recent
//!   document the backend offers as an example and keeps it only if it was written
//!   by the signed-in user for the same project. Every failure yields `None`; the
//!   form then starts empty.
//! - **Submit**: [`ApiClient::submit_draft`] validates the draft and the session
//!   before anything goes over the wire, then posts the assembled document.

use chrono::{SecondsFormat, Utc};
use store::models::{sort_newest_first, Document, NewDocument, PreviousDocument};
use store::DocumentDraft;

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::transport::{ApiRequest, Transport};

/// Creation timestamp in the format the backend stores, e.g. `2024-01-01T09:30:00.000Z`.
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl<T: Transport> ApiClient<T> {
    /// The backend's example document, if it has one.
    pub async fn previous_document(&self) -> ApiResult<Option<PreviousDocument>> {
        let response = self
            .execute(ApiRequest::get("/api/document/read/exDocumentData"))
            .await?;
        let body = response.body.trim();
        if body.is_empty() || body == "null" {
            return Ok(None);
        }
        response.json().map(Some)
    }

    /// The previous document, when it is usable to prefill a form for `project_id`.
    pub async fn previous_document_for(&self, project_id: u64) -> Option<PreviousDocument> {
        let document = match self.previous_document().await {
            Ok(Some(document)) => document,
            Ok(None) => return None,
            Err(e) => {
                tracing::debug!("No previous document to prefill from: {e}");
                return None;
            }
        };

        let user = self.session().user_id();
        if user.is_none() || document.writer != user {
            tracing::debug!("Previous document was written by {:?}", document.writer);
            return None;
        }
        if document.project_id.is_some_and(|id| id != project_id) {
            tracing::debug!(
                "Previous document belongs to project {:?}, not {project_id}",
                document.project_id
            );
            return None;
        }
        Some(document)
    }

    pub async fn get_document(&self, id: u64) -> ApiResult<Document> {
        self.get_json(&format!("/api/document/read/{id}")).await
    }

    /// Documents of a project, newest first.
    pub async fn list_project_documents(&self, project_id: u64) -> ApiResult<Vec<Document>> {
        let documents: Option<Vec<Document>> = self
            .get_json(&format!("/api/document/project/{project_id}"))
            .await?;
        let mut documents = documents.unwrap_or_default();
        sort_newest_first(&mut documents);
        Ok(documents)
    }

    pub async fn create_document(&self, document: &NewDocument) -> ApiResult<()> {
        self.post("/api/document/create", Some(document)).await?;
        tracing::info!(
            "Created document with {} endpoints for project {}",
            document.endpoints.len(),
            document.project_id
        );
        Ok(())
    }

    /// Validate and send `draft` as the signed-in user.
    ///
    /// Returns the owning project id for navigation. Validation failures issue no
    /// request.
    pub async fn submit_draft(&self, draft: &DocumentDraft) -> ApiResult<u64> {
        let user = self.session().user_id();
        let document = draft.to_new_document(user.as_deref(), timestamp_now())?;
        self.create_document(&document).await?;
        Ok(document.project_id)
    }
}
