use dioxus::prelude::*;

use crate::use_session;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// First character of the user id, upper-cased, for the avatar bubble.
pub fn user_initial(user_id: &str) -> String {
    user_id
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

/// Top bar with the signed-in user's avatar and id. `children` go on the right.
#[component]
pub fn Header(children: Element) -> Element {
    let session = use_session();
    let user_id = session().user_id.unwrap_or_default();
    let initial = user_initial(&user_id);

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        header {
            class: "app-header",
            div {
                class: "app-header-user",
                span { class: "avatar", "{initial}" }
                div {
                    class: "app-header-name",
                    strong { "{user_id}" }
                    small { "logged in user" }
                }
            }
            div {
                class: "app-header-actions",
                {children}
            }
        }
    }
}
