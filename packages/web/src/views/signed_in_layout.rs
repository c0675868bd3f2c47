use dioxus::prelude::*;
use ui::{Header, LogoutButton, RequireSession};

use crate::Route;

/// Shell for every page that needs a signed-in user.
///
/// Without a session the router is sent to the login page before any child view
/// mounts.
#[component]
pub fn SignedInLayout() -> Element {
    let nav = use_navigator();

    rsx! {
        RequireSession {
            on_signed_out: move |_| {
                nav.replace(Route::Login {});
            },
            Header {
                LogoutButton {
                    on_signed_out: move |_| {
                        nav.replace(Route::Login {});
                    },
                }
            }
            main {
                Outlet::<Route> {}
            }
        }
    }
}
