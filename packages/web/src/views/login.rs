use dioxus::prelude::*;
use ui::views::LoginView;

use crate::Route;

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();

    rsx! {
        LoginView {
            on_signed_in: move |_| {
                nav.replace(Route::Projects {});
            },
            on_signup: move |_| {
                nav.push(Route::Signup {});
            },
        }
    }
}
