//! # API crate — typed client for the project manager backend
//!
//! Every backend call the front end makes goes through [`ApiClient`]. The client
//! owns the [`Session`](store::Session) so bearer tokens and 401 handling live in
//! one place, and returns [`ApiResult`] so every view handles failures the same way.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`transport`] | The [`Transport`] seam, request/response types and the `reqwest` implementation |
//! | [`client`] | [`ApiClient`]: bearer token, status mapping, session reset on 401 |
//! | [`error`] | [`ApiError`] and [`ApiResult`] |
//! | [`auth`] | Signup, login, logout |
//! | [`projects`] | Project list/detail/create/delete and the invitation workflow |
//! | [`documents`] | Document reads, previous-document prefill, draft submission |
//!
//! ## Backend routes
//!
//! | Operation | Route |
//! |-----------|-------|
//! | `signup` / `login` / `logout` | `POST /api/auth/{signup,login,logout}` |
//! | `list_projects` | `GET /api/project/read/project` |
//! | `get_project` | `GET /api/project/read/{id}` |
//! | `create_project` | `POST /api/project/create` |
//! | `delete_project` | `POST /api/project/delete/{id}` |
//! | `invite` | `POST /api/project/read/{id}/invitations`, then `.../invitations/send` |
//! | `previous_document` | `GET /api/document/read/exDocumentData` |
//! | `get_document` | `GET /api/document/read/{id}` |
//! | `list_project_documents` | `GET /api/document/project/{id}` |
//! | `create_document` / `submit_draft` | `POST /api/document/create` |

pub mod auth;
pub mod client;
pub mod documents;
pub mod error;
pub mod projects;
pub mod transport;

#[cfg(test)]
mod testing;

pub use auth::SignupForm;
pub use client::ApiClient;
pub use documents::timestamp_now;
pub use error::{ApiError, ApiResult};
pub use projects::InviteOutcome;
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, Transport};

pub use store::{Document, Endpoint, NewProject, Parameter, Project, ProjectManagerConfig, Session};
