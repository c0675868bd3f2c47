use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "not-found",
            h1 { "Page not found" }
            p { "There is nothing at /{path}." }
            Link { to: Route::Login {}, "Back to login" }
        }
    }
}
