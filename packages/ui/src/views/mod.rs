mod login;
pub use login::LoginView;

mod signup;
pub use signup::SignupView;

mod projects;
pub use projects::ProjectListView;

mod create_project;
pub use create_project::CreateProjectView;

mod project_detail;
pub use project_detail::{invite_error_message, ProjectDetailView};

mod document_form;
pub use document_form::DocumentFormView;

mod document_detail;
pub use document_detail::DocumentDetailView;
