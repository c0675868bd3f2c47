//! This crate contains all shared UI for the workspace.
//!
//! Views take navigation callbacks instead of routes so the platform package
//! owns the route table.

pub mod navigation;

mod session;
pub use session::{
    use_api, use_session, Client, LogoutButton, RequireSession, SessionProvider, SessionState,
};

mod header;
pub use header::{user_initial, Header};

mod method_badge;
pub use method_badge::{method_class, MethodBadge};

pub mod views;
