mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod signed_in_layout;
pub use signed_in_layout::SignedInLayout;

mod projects;
pub use projects::{CreateProject, Projects};

mod project_detail;
pub use project_detail::ProjectDetail;

mod documents;
pub use documents::{CreateDocument, DocumentDetail};

mod not_found;
pub use not_found::NotFound;
