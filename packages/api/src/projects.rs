//! Project listing, creation, deletion and the invitation workflow.

use store::models::{NewProject, Project};

use crate::client::ApiClient;
use crate::error::{ApiError, ApiResult};
use crate::transport::Transport;

/// Status the backend uses to say "this project accepts an invitation now".
const INVITABLE: u16 = 202;

/// Result of an invitation attempt that reached the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InviteOutcome {
    /// The check passed and the invitation was sent.
    Sent,
    /// The check answered with something other than "invitable"; nothing was sent.
    NotInvitable,
}

impl<T: Transport> ApiClient<T> {
    pub async fn list_projects(&self) -> ApiResult<Vec<Project>> {
        let projects: Option<Vec<Project>> = self.get_json("/api/project/read/project").await?;
        Ok(projects.unwrap_or_default())
    }

    pub async fn get_project(&self, id: u64) -> ApiResult<Project> {
        self.get_json(&format!("/api/project/read/{id}")).await
    }

    pub async fn create_project(&self, project: &NewProject) -> ApiResult<()> {
        if project.project_name.trim().is_empty() {
            return Err(ApiError::validation("Please enter a project name."));
        }
        if !self.session().is_active() {
            return Err(ApiError::SignedOut);
        }
        let project = NewProject {
            project_name: project.project_name.trim().to_string(),
            ..project.clone()
        };
        self.post("/api/project/create", Some(&project)).await?;
        tracing::info!("Created project {}", project.project_name);
        Ok(())
    }

    /// Delete a project. The backend removes its documents too.
    pub async fn delete_project(&self, id: u64) -> ApiResult<()> {
        self.post::<()>(&format!("/api/project/delete/{id}"), None).await?;
        tracing::info!("Deleted project {id}");
        Ok(())
    }

    /// Check whether `project_id` can take an invitation, then send it to `username`.
    ///
    /// At most two requests: the send is only issued when the check answers
    /// "invitable".
    pub async fn invite(&self, project_id: u64, username: &str) -> ApiResult<InviteOutcome> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ApiError::validation("Please enter a username."));
        }

        let check = self
            .post::<()>(&format!("/api/project/read/{project_id}/invitations"), None)
            .await?;
        if check.status != INVITABLE {
            tracing::info!(
                "Invitation check for project {project_id} returned {}, not sending",
                check.status
            );
            return Ok(InviteOutcome::NotInvitable);
        }

        self.post(
            &format!("/api/project/read/{project_id}/invitations/send"),
            Some(username),
        )
        .await?;
        tracing::info!("Invited {username} to project {project_id}");
        Ok(InviteOutcome::Sent)
    }
}
