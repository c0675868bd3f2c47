//! Session context and hooks for the UI.
//!
//! [`SessionProvider`] opens the persisted [`Session`] once at startup, builds the
//! shared [`Client`] around it and puts both the client and a [`SessionState`]
//! signal into context. Views never touch browser storage directly.

use api::{ApiClient, HttpTransport};
use dioxus::prelude::*;
use store::{ProjectManagerConfig, Session, SessionStorage};

use crate::navigation;

/// The API client every view shares.
pub type Client = ApiClient<HttpTransport>;

/// Who is signed in, as far as rendering is concerned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub user_id: Option<String>,
}

impl SessionState {
    fn from_session(session: &Session) -> Self {
        Self {
            user_id: session.user_id().filter(|_| session.is_active()),
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.user_id.is_some()
    }
}

/// Get the current session state.
/// Returns a signal that updates on login and logout.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Get the shared API client.
pub fn use_api() -> Client {
    use_context::<Client>()
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
fn platform_storage() -> impl SessionStorage {
    store::BrowserStorage
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
fn platform_storage() -> impl SessionStorage {
    store::MemoryStorage::new()
}

/// Provider component that owns the session and the API client.
/// Wrap the router with this component.
#[component]
pub fn SessionProvider(config: ProjectManagerConfig, children: Element) -> Element {
    let session = use_hook(|| Session::restore(platform_storage()));
    let state = use_signal(|| SessionState::from_session(&session));

    let client = use_hook(|| {
        tracing::debug!("API base URL: {}", config.base_url());
        ApiClient::new(HttpTransport::new(config.base_url()), session.clone())
            .on_unauthorized(|| navigation::hard_redirect("/"))
    });

    use_context_provider(|| client);
    use_context_provider(|| state);

    rsx! {
        {children}
    }
}

/// Renders `children` only while someone is signed in.
///
/// Without a session `on_signed_out` runs during render and nothing below mounts,
/// so no child view issues a request unauthenticated.
#[component]
pub fn RequireSession(on_signed_out: EventHandler<()>, children: Element) -> Element {
    let session = use_session();

    if !session().is_signed_in() {
        tracing::debug!("No session, leaving the signed-in area");
        on_signed_out.call(());
        return rsx! {};
    }

    rsx! {
        {children}
    }
}

/// Button that signs the current user out after a confirmation.
#[component]
pub fn LogoutButton(
    on_signed_out: EventHandler<()>,
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "btn btn-secondary".to_string())] class: String,
) -> Element {
    let client = use_api();
    let mut state = use_session();

    let onclick = move |_| {
        if !navigation::confirm("Do you want to log out?") {
            return;
        }
        let client = client.clone();
        spawn(async move {
            client.logout().await;
            state.set(SessionState::default());
            on_signed_out.call(());
        });
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
