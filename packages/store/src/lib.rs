pub mod config;
pub mod draft;
pub mod models;
pub mod session;
pub mod storage;

mod memory;
pub use memory::MemoryStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod browser;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use browser::BrowserStorage;

pub use config::ProjectManagerConfig;
pub use draft::{
    DocumentDraft, DraftError, EndpointField, EndpointId, EndpointView, FormPhase, ParameterField,
    ParameterId, ParameterView,
};
pub use models::{
    Document, Endpoint, NewDocument, NewProject, Parameter, PreviousDocument, Project,
};
pub use session::Session;
pub use storage::SessionStorage;
