//! # Wire models for the project manager backend
//!
//! Every type here mirrors a JSON body exchanged with the backend. Field names
//! are camelCase on the wire. Read-side types default missing strings to `""` so
//! a partially filled record from the backend still renders.
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Project`] | A project as listed and shown in detail. Older responses name the title `project` instead of `projectName`; both are accepted. |
//! | [`NewProject`] | Body of the create-project request. |
//! | [`Document`] | A stored API document: creation date, owning project, writer and the ordered [`Endpoint`] list. `creator` is accepted as an alias of `writer`. |
//! | [`PreviousDocument`] | The example document used to prefill the create form. Shaped like the create request, so it has no `id`. |
//! | [`Endpoint`] / [`Parameter`] | One documented HTTP endpoint and its annotated parameters. Order is display order. |
//! | [`NewDocument`] | Body of the create-document request. |
//! | [`Credentials`] / [`LoginResponse`] | Login request and the bearer token it returns. |
//! | [`NewUser`] | Body of the signup request. |
//! | [`ErrorBody`] | Error payload; only `message` is read. |

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u64,
    #[serde(alias = "project", default)]
    pub project_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_private: bool,
    #[serde(default)]
    pub creator: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub project_name: String,
    pub description: String,
    pub is_private: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: u64,
    /// ISO 8601 timestamp as sent by the backend.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub project_id: Option<u64>,
    #[serde(default, alias = "creator")]
    pub writer: Option<String>,
    #[serde(default)]
    pub endpoints: Vec<Endpoint>,
}

/// The example document served for prefilling the create form.
///
/// Same shape as the create request: it carries no `id`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviousDocument {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub project_id: Option<u64>,
    #[serde(default, alias = "creator")]
    pub writer: Option<String>,
    #[serde(default)]
    pub endpoints: Vec<Endpoint>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Endpoint {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    #[serde(default)]
    pub annotation: String,
    #[serde(default)]
    pub r#type: String,
    #[serde(default)]
    pub data: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDocument {
    pub date: String,
    pub project_id: u64,
    pub writer: String,
    pub creator: String,
    pub endpoints: Vec<Endpoint>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub login_id: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Signup request. `username` is the display name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub login_id: String,
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl Endpoint {
    /// An endpoint with one empty parameter, the shape of a fresh form row.
    pub fn blank() -> Self {
        Self {
            parameters: vec![Parameter::default()],
            ..Self::default()
        }
    }
}

impl Document {
    /// Creation time, if the backend sent something parseable.
    pub fn created_at(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.date)
    }

    /// Creation date as `YYYY-MM-DD`, or `"N/A"`.
    pub fn display_date(&self) -> String {
        self.created_at()
            .map(|at| at.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }
}

/// Order documents newest first. Undated documents sink to the bottom.
pub fn sort_newest_first(documents: &mut [Document]) {
    documents.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
}

/// Parse the timestamp shapes the backend produces: RFC 3339 with an offset,
/// a naive `YYYY-MM-DDTHH:MM:SS[.fff]`, or a bare date.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.naive_utc());
    }
    if let Ok(at) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(at);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
}
