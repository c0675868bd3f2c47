use dioxus::prelude::*;

use crate::{use_api, use_session, SessionState};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Login form.
///
/// Navigates through `on_signed_in` as soon as a session exists, including when
/// the page is opened while already signed in.
#[component]
pub fn LoginView(on_signed_in: EventHandler<()>, on_signup: EventHandler<()>) -> Element {
    let client = use_api();
    let mut session = use_session();
    let mut login_id = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    use_effect(move || {
        if session().is_signed_in() {
            on_signed_in.call(());
        }
    });

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);
            match client.login(&login_id(), &password()).await {
                Ok(user_id) => {
                    session.set(SessionState {
                        user_id: Some(user_id),
                    });
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.user_message("Login failed. Check your ID and password.")));
                }
            }
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "auth-page",
            form {
                class: "auth-card",
                onsubmit: handle_login,

                h1 { "Login" }

                if let Some(err) = error() {
                    div { class: "error-message", "{err}" }
                }

                label { r#for: "loginId", "ID" }
                input {
                    id: "loginId",
                    r#type: "text",
                    placeholder: "Enter your ID",
                    value: login_id(),
                    oninput: move |evt: FormEvent| login_id.set(evt.value()),
                }

                label { r#for: "password", "Password" }
                input {
                    id: "password",
                    r#type: "password",
                    placeholder: "Enter your password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Logging in..." } else { "Login" }
                }

                p {
                    class: "auth-switch",
                    "No account yet? "
                    button {
                        class: "link-button",
                        r#type: "button",
                        onclick: move |_| on_signup.call(()),
                        "Sign up"
                    }
                }
            }
        }
    }
}
